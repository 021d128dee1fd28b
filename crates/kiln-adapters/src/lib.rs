//! Infrastructure adapters for Kiln.
//!
//! This crate implements the ports defined in `kiln-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archive;
pub mod catalog;
pub mod filesystem;

// Re-export commonly used adapters
pub use archive::ZipArchiver;
pub use catalog::{BuiltinCatalog, CatalogLoader};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
