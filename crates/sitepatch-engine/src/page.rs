//! The live-document seam.
//!
//! The runner and resolver never touch a page directly; everything goes
//! through this trait. A real implementation wraps whatever host environment
//! the userscript runs in; tests use an in-memory mock.

use async_trait::async_trait;
use sitepatch_common::protocol::{Element, ReadyState};
use thiserror::Error;

/// Errors raised by a `Page` implementation.
///
/// These are backend or programmer faults, not dependency failures: a
/// selector that simply matches nothing is `Ok(None)`, never an error.
#[derive(Debug, Clone, Error)]
pub enum PageError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}

/// A live, possibly still-loading document.
///
/// Query methods must always re-query live state; the document can change
/// between any two calls. Only `set_document_attribute` writes, and only the
/// bootstrap run-once guard uses it; operation actions own all other
/// mutation.
#[async_trait]
pub trait Page: Send + Sync {
    /// Current lifecycle state of the document.
    async fn ready_state(&mut self) -> Result<ReadyState, PageError>;

    /// First element matching `selector`, or `None` if nothing matches.
    async fn query_selector(&mut self, selector: &str) -> Result<Option<Element>, PageError>;

    /// Read an attribute on the document element.
    async fn document_attribute(&mut self, _name: &str) -> Result<Option<String>, PageError> {
        Err(PageError::NotSupported("document_attribute".into()))
    }

    /// Set an attribute on the document element.
    async fn set_document_attribute(
        &mut self,
        _name: &str,
        _value: &str,
    ) -> Result<(), PageError> {
        Err(PageError::NotSupported("set_document_attribute".into()))
    }
}
