//! Userscript entry point with a run-once guard.
//!
//! A userscript can end up injected more than once on the same document,
//! e.g. installed twice, or revived from the back/forward cache. The guard marks
//! the document element with an attribute on first run and refuses to run
//! again while it is present.

use crate::operation::Plan;
use crate::page::Page;
use crate::runner::{self, RunnerError};
use tracing::warn;

/// A userscript's identity plus the plan it wants executed.
pub struct Userscript {
    /// Stable identifier, used to derive the guard attribute name.
    pub id: String,
    /// Display name, used in log messages.
    pub name: String,
    pub plan: Plan,
}

fn guard_attribute(id: &str) -> String {
    format!("data-{id}-has-run")
}

/// Run `userscript` against `page` unless it already ran on this document.
pub async fn run_userscript<P: Page + ?Sized>(
    userscript: Userscript,
    page: &mut P,
) -> Result<(), RunnerError> {
    let attribute = guard_attribute(&userscript.id);
    if page.document_attribute(&attribute).await?.is_some() {
        warn!(
            "It looks as though {} has already run (attribute \"{}\" is present on the document element). Stopping.",
            userscript.name, attribute,
        );
        return Ok(());
    }
    page.set_document_attribute(&attribute, "").await?;
    runner::run(userscript.plan, page).await
}
