//! Generation Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the request
//! 2. Resolve dependencies and synthesize content
//! 3. Lay the content out as a project tree
//! 4. Materialize the tree on a fresh ephemeral root
//! 5. Archive the tree and reclaim the root
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{ArchiveWriter, DependencyCatalog, Filesystem},
        services::{ephemeral::EphemeralRoot, tree_builder::TreeBuilder},
    },
    domain::{
        ContentSynthesizer, DomainValidator as validator, MarkupPolicy, ProjectRequest,
        ProjectTree, ResolvedDependency,
    },
    error::KilnResult,
};

/// The result of one generation: archive bytes plus a suggested file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

impl Archive {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Main generation service.
///
/// Stateless between calls: every `generate` allocates its own ephemeral
/// root, so one service can serve concurrent callers.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
    archiver: Box<dyn ArchiveWriter>,
    catalog: Box<dyn DependencyCatalog>,
    synthesizer: ContentSynthesizer,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kiln_core::application::GenerationService;
    ///
    /// let service = GenerationService::new(
    ///     filesystem, // impl Filesystem
    ///     archiver,   // impl ArchiveWriter
    ///     catalog,    // impl DependencyCatalog
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        archiver: Box<dyn ArchiveWriter>,
        catalog: Box<dyn DependencyCatalog>,
    ) -> Self {
        Self {
            filesystem,
            archiver,
            catalog,
            synthesizer: ContentSynthesizer::default(),
        }
    }

    /// Choose how user text is inserted into `pom.xml`.
    pub fn with_markup_policy(mut self, policy: MarkupPolicy) -> Self {
        self.synthesizer = ContentSynthesizer::new(policy);
        self
    }

    /// Generate a project archive.
    ///
    /// This is the main use case. The ephemeral root is gone when this
    /// returns, whatever the outcome.
    #[instrument(
        skip_all,
        fields(
            group = %request.group_id,
            artifact = %request.artifact_id,
            version = %request.version
        )
    )]
    pub fn generate(&self, request: &ProjectRequest) -> KilnResult<Archive> {
        let tree = self.preview(request)?;

        let scratch = EphemeralRoot::allocate(self.filesystem.as_ref())?;
        let project_root =
            TreeBuilder::new(self.filesystem.as_ref()).materialize(&tree, scratch.path())?;

        let bytes = self
            .archiver
            .archive(self.filesystem.as_ref(), &project_root)?;

        scratch.release()?;

        let archive = Archive {
            bytes,
            file_name: format!("{}.{}", request.artifact_id, self.archiver.extension()),
        };
        info!(
            file_name = %archive.file_name,
            bytes = archive.len(),
            files = tree.file_count(),
            "Generation completed"
        );
        Ok(archive)
    }

    /// Validate, synthesize and lay out the project without touching storage.
    pub fn preview(&self, request: &ProjectRequest) -> KilnResult<ProjectTree> {
        if let Err(e) = validator::validate_request(request) {
            warn!(reason = ?e.reason(), error = %e, "Request rejected");
            return Err(e.into());
        }

        let dependencies = self.resolve_dependencies(request);
        let content = self.synthesizer.synthesize(request, &dependencies);

        let tree = ProjectTree::for_request(request, content)?;
        validator::validate_project_tree(&tree)?;
        Ok(tree)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Look every selected id up; unknown ids pass through.
    fn resolve_dependencies(&self, request: &ProjectRequest) -> Vec<ResolvedDependency> {
        request
            .unique_dependencies()
            .into_iter()
            .map(|id| match self.catalog.lookup(id) {
                Some(coordinate) => ResolvedDependency::Known {
                    id: id.to_string(),
                    coordinate,
                },
                None => {
                    warn!(dependency = id, "Unknown dependency id, emitting placeholder");
                    ResolvedDependency::Unknown { id: id.to_string() }
                }
            })
            .collect()
    }
}
