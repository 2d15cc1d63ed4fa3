//! Dependency resolution against the live page.

mod resolver;
mod result;

pub use resolver::{ResolvedDependencies, resolve_dependencies};
pub use result::Resolution;
