//! Engine-side adapter over the common failure formatter.

use crate::operation::OperationAndFailure;
use sitepatch_common::formatter::{ReportContext, describe_failure};

/// Curry a [`ReportContext`] into a renderer for failure records.
///
/// The returned closure is `'static`, so it can be moved into a plan's
/// `handle_failures` callback.
pub fn failure_describer(context: ReportContext) -> impl Fn(&OperationAndFailure) -> String {
    move |failure| {
        describe_failure(
            &context,
            &failure.operation.description,
            &failure.failure,
        )
    }
}
