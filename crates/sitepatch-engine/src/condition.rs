//! Readiness predicates gating whether and when operations run.
//!
//! A condition is a pure, total function of the document's ready state. It
//! carries no state of its own and is evaluated fresh every time.

use sitepatch_common::protocol::ReadyState;
use std::fmt;
use std::sync::Arc;

/// A predicate over [`ReadyState`].
///
/// Built-in variants cover the common gates; `Custom` admits arbitrary
/// caller predicates (e.g. one that reads a captured cancellation flag).
#[derive(Clone)]
pub enum Condition {
    /// True unconditionally.
    Always,
    /// False unconditionally. Disables an operation without deleting it.
    Never,
    /// True once the document has left the `Loading` phase.
    DomContentLoaded,
    /// True only once the document is fully loaded.
    Load,
    /// True when every inner condition is true.
    All(Vec<Condition>),
    /// True when at least one inner condition is true.
    Any(Vec<Condition>),
    /// Arbitrary caller-supplied predicate.
    Custom(Arc<dyn Fn(ReadyState) -> bool + Send + Sync>),
}

impl Condition {
    pub fn custom(predicate: impl Fn(ReadyState) -> bool + Send + Sync + 'static) -> Self {
        Condition::Custom(Arc::new(predicate))
    }

    pub fn evaluate(&self, state: ReadyState) -> bool {
        match self {
            Condition::Always => true,
            Condition::Never => false,
            Condition::DomContentLoaded => state != ReadyState::Loading,
            Condition::Load => state == ReadyState::Complete,
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(state)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(state)),
            Condition::Custom(predicate) => predicate(state),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => f.write_str("Always"),
            Condition::Never => f.write_str("Never"),
            Condition::DomContentLoaded => f.write_str("DomContentLoaded"),
            Condition::Load => f.write_str("Load"),
            Condition::All(conditions) => f.debug_tuple("All").field(conditions).finish(),
            Condition::Any(conditions) => f.debug_tuple("Any").field(conditions).finish(),
            Condition::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
