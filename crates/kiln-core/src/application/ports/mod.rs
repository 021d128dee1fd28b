//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kiln-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Ephemeral tree storage
//!   - `ArchiveWriter`: Packaging a tree into bytes
//!   - `DependencyCatalog`: Dependency id lookup
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `GenerationService::generate`

pub mod output;

pub use output::{ArchiveWriter, CatalogEntry, DependencyCatalog, DirEntry, EntryKind, Filesystem};
