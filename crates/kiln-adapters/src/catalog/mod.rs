//! Dependency catalog adapters.

mod builtin;
mod loader;

pub use builtin::BuiltinCatalog;
pub use loader::{CatalogFile, CatalogLoader, DependencySpec};
