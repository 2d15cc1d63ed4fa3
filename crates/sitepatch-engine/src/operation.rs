//! Operations and the plan that schedules them.
//!
//! An operation is declared once by the embedding userscript and only read by
//! the runner. Whether it has DOM prerequisites is fixed at construction
//! time: the two kinds carry differently-typed actions, so an independent
//! action can never be handed dependencies and a dependent one can never run
//! without them.

use crate::condition::Condition;
use crate::resolution::ResolvedDependencies;
use sitepatch_common::protocol::{Dependencies, OperationFailure};
use std::fmt;
use std::time::Duration;

/// What an action reports back: success, or an error message that will be
/// treated as a permanent, non-retryable failure of that operation.
pub type ActionResult = Result<(), String>;

pub type IndependentAction = Box<dyn FnMut() -> ActionResult + Send>;
pub type DependentAction = Box<dyn FnMut(&ResolvedDependencies) -> ActionResult + Send>;

/// The dependency-presence split, chosen at construction time.
pub enum OperationKind {
    /// No DOM prerequisites; the action runs as soon as the operation is
    /// eligible.
    Independent { action: IndependentAction },

    /// The action runs only once every declared dependency resolves.
    WithDependencies {
        dependencies: Dependencies,
        action: DependentAction,
    },
}

/// A named, conditionally-gated unit of work against the page.
pub struct Operation {
    /// Human-readable description, used only for diagnostics
    /// ("change the heading").
    pub description: String,
    /// Gates whether this operation is wanted at all on this run.
    /// Evaluated once, at filter time.
    pub condition: Condition,
    /// If present, holds the operation back until true for the current ready
    /// state. Re-evaluated every round.
    pub defer_until: Option<Condition>,
    pub kind: OperationKind,
}

impl Operation {
    pub fn independent(
        description: impl Into<String>,
        condition: Condition,
        action: impl FnMut() -> ActionResult + Send + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            condition,
            defer_until: None,
            kind: OperationKind::Independent {
                action: Box::new(action),
            },
        }
    }

    pub fn with_dependencies(
        description: impl Into<String>,
        condition: Condition,
        dependencies: Dependencies,
        action: impl FnMut(&ResolvedDependencies) -> ActionResult + Send + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            condition,
            defer_until: None,
            kind: OperationKind::WithDependencies {
                dependencies,
                action: Box::new(action),
            },
        }
    }

    /// Hold this operation back until `condition` is true for the current
    /// ready state.
    pub fn defer_until(mut self, condition: Condition) -> Self {
        self.defer_until = Some(condition);
        self
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            OperationKind::Independent { .. } => "Independent",
            OperationKind::WithDependencies { .. } => "WithDependencies",
        };
        f.debug_struct("Operation")
            .field("description", &self.description)
            .field("condition", &self.condition)
            .field("defer_until", &self.defer_until)
            .field("kind", &kind)
            .finish_non_exhaustive()
    }
}

/// A permanently failed operation paired with why it failed.
#[derive(Debug)]
pub struct OperationAndFailure {
    pub operation: Operation,
    pub failure: OperationFailure,
}

/// Called exactly once, with the complete list of permanent failures. Never
/// called when everything succeeded.
pub type FailuresHandler = Box<dyn FnOnce(Vec<OperationAndFailure>) + Send>;

/// Full configuration for one scheduling run.
pub struct Plan {
    pub operations: Vec<Operation>,
    /// Delay between polling rounds.
    pub interval: Duration,
    /// Once true for the current ready state, dependency failures stop being
    /// "try again later" and the `extra_tries` countdown begins.
    pub try_until: Condition,
    /// Rounds allowed after `try_until` is first satisfied, to absorb
    /// late-arriving content.
    pub extra_tries: u32,
    pub handle_failures: FailuresHandler,
}
