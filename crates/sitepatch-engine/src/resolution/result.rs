use crate::resolution::ResolvedDependencies;
use sitepatch_common::protocol::DependencyFailure;

/// Outcome of one resolution attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Every key bound to a verified element.
    Resolved(ResolvedDependencies),

    /// One or more dependencies missing or mistyped. Carries the complete
    /// list, not just the first miss.
    Failed(Vec<DependencyFailure>),
}
