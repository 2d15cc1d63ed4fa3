//! Resolves declared dependencies to concrete elements.

use crate::page::{Page, PageError};
use crate::resolution::Resolution;
use sitepatch_common::protocol::{Dependencies, DependencyFailure, Element};
use std::collections::BTreeMap;

/// Dependencies bound to the elements that satisfied them, keyed as declared.
pub type ResolvedDependencies = BTreeMap<String, Element>;

/// Resolve every key in `spec` against the live page.
///
/// All keys are attempted even after a failure, so the caller sees every
/// missing or mistyped dependency in one pass. Results are built fresh on
/// every call; the page may change between attempts, so nothing is cached.
///
/// An empty spec resolves trivially. Page-level errors (backend fault, bad
/// selector syntax) propagate as `Err`; a selector that matches nothing is a
/// [`DependencyFailure`], not an error.
pub async fn resolve_dependencies<P: Page + ?Sized>(
    spec: &Dependencies,
    page: &mut P,
) -> Result<Resolution, PageError> {
    let mut resolved = ResolvedDependencies::new();
    let mut failures: Vec<DependencyFailure> = Vec::new();

    for (key, dependency) in spec {
        match page.query_selector(&dependency.selector).await? {
            None => failures.push(DependencyFailure::DoesNotExist {
                key: key.clone(),
                selector: dependency.selector.clone(),
            }),
            Some(element) if !dependency.kind.accepts(&element.tag_name) => {
                failures.push(DependencyFailure::IsOfWrongType {
                    key: key.clone(),
                    expected: dependency.kind,
                    actual_tag_name: element.tag_name.clone(),
                })
            }
            Some(element) => {
                resolved.insert(key.clone(), element);
            }
        }
    }

    if failures.is_empty() {
        Ok(Resolution::Resolved(resolved))
    } else {
        Ok(Resolution::Failed(failures))
    }
}
