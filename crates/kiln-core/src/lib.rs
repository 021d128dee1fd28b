//! Kiln Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Kiln
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             kiln-cli (CLI)              │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │   (GenerationService, CatalogService)   │
//! │          Orchestrates Use Cases         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, ArchiveWriter, Catalog)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kiln-adapters (Infrastructure)      │
//! │ (LocalFilesystem, ZipArchiver, etc)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectRequest, Synthesizer, Tree)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiln_core::{application::GenerationService, domain::ProjectRequest};
//!
//! // 1. Describe the project
//! let request = ProjectRequest::new("com.example", "demo", "1.0.0")
//!     .with_dependency("web");
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerationService::new(filesystem, archiver, catalog);
//! let archive = service.generate(&request)?;
//! std::fs::write(&archive.file_name, &archive.bytes)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Archive, CatalogService, GenerationService,
        ports::{ArchiveWriter, CatalogEntry, DependencyCatalog, DirEntry, EntryKind, Filesystem},
    };
    pub use crate::domain::{
        Coordinate, CrossCuttingLibraryRequest, EnvironmentalCredentialsRequest, MarkupPolicy,
        ProjectRequest, ProjectTree, ValidationReason,
    };
    pub use crate::error::{KilnError, KilnResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
