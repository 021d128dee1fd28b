// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kiln.
//!
//! This module contains pure business logic. All I/O (ephemeral storage,
//! archiving, dependency lookup) is reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Plain data requests**: behaviour is limited to defaulting accessors
//! - **Rules as functions**: validation is an ordered list of pure predicates
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod synthesis;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    project_tree::{BUILD_DESCRIPTOR, ENTRY_POINT, ProjectTree, TreeEntry, TreeFile},
    request::{
        CrossCuttingLibraryRequest, DEFAULT_BOOT_VERSION, DEFAULT_JAVA_VERSION,
        EnvironmentalCredentialsRequest, ProjectRequest, REQUIRED_ROLES,
    },
};

pub use error::{DomainError, ErrorCategory, ValidationReason};

pub use synthesis::{ContentSynthesizer, RenderContext, SynthesizedContent};

pub use value_objects::{Coordinate, MarkupPolicy, ResolvedDependency};

pub use validation::DomainValidator;
