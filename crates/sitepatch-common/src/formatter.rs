//! Renders accumulated operation failures as human-readable diagnostics.
//!
//! The output is meant to be pasted directly into a bug report, so it names
//! the host site and the extension and explains which of the two most likely
//! needs fixing. Pure string building; the caller decides where it goes.

use crate::protocol::{DependencyFailure, OperationFailure};

const INDENTATION: &str = "  ";

/// Naming context for diagnostics. Passed explicitly so the formatter stays
/// free of global state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    /// Display name of the host site (e.g. "Example Forum").
    pub site_name: String,
    /// Display name of the consuming userscript/extension.
    pub extension_name: String,
    /// URL of the page the run happened on.
    pub location: String,
}

fn format_dependency(d: &DependencyFailure) -> String {
    match d {
        DependencyFailure::DoesNotExist { key, selector } => {
            format!("{INDENTATION}{key}: nothing matches '{selector}'")
        }
        DependencyFailure::IsOfWrongType {
            key,
            expected,
            actual_tag_name,
        } => {
            format!("{INDENTATION}{key}: expected {expected}, found <{actual_tag_name}>")
        }
    }
}

/// The failure-specific part of a diagnostic.
pub fn explanation(failure: &OperationFailure) -> String {
    match failure {
        OperationFailure::Dependencies { dependencies } => {
            let lines: Vec<String> = dependencies.iter().map(format_dependency).collect();
            format!(
                "These dependencies could not be satisfied:\n\n{}",
                lines.join("\n")
            )
        }
        OperationFailure::Internal { message } => {
            format!("The operation failed with this error:\n\n{INDENTATION}{message}")
        }
    }
}

/// Full multi-paragraph diagnostic for one failed operation.
///
/// `description` is the operation's human-readable description ("change the
/// heading" reads as "Could not change the heading on this page").
pub fn describe_failure(
    context: &ReportContext,
    description: &str,
    failure: &OperationFailure,
) -> String {
    [
        format!("Could not {description} on this page:"),
        String::new(),
        format!("{INDENTATION}{}", context.location),
        String::new(),
        explanation(failure),
        String::new(),
        format!(
            "This problem might be caused by {} changing its content/structure, \
             in which case {} needs to be updated accordingly. Otherwise, it's \
             probably a bug in {}.",
            context.site_name, context.extension_name, context.extension_name,
        ),
        String::new(),
        "If you file a bug report, please include this message.".to_string(),
    ]
    .join("\n")
}
