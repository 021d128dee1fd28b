//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "list dependencies".

pub mod catalog_service;
pub mod ephemeral;
pub mod generation_service;
pub mod tree_builder;

pub use catalog_service::CatalogService;
pub use ephemeral::{EPHEMERAL_PREFIX, EphemeralRoot};
pub use generation_service::{Archive, GenerationService};
pub use tree_builder::TreeBuilder;
