pub mod common;
pub mod project_tree;
pub mod request;

pub use crate::domain::DomainError;
pub use project_tree::{ProjectTree, TreeEntry, TreeFile};
pub use request::{CrossCuttingLibraryRequest, EnvironmentalCredentialsRequest, ProjectRequest};
