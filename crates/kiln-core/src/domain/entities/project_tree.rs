use std::collections::HashSet;

use crate::domain::{
    entities::{common::RelativePath, request::ProjectRequest},
    error::DomainError,
    synthesis::SynthesizedContent,
};

/// Build descriptor file name at the project root.
pub const BUILD_DESCRIPTOR: &str = "pom.xml";

/// Entry-point source file name inside the group package directory.
pub const ENTRY_POINT: &str = "Application.java";

/// In-memory project layout ready for materialization.
///
/// The tree is write-once: every file path is written exactly once and any
/// second write fails with [`DomainError::DuplicatePath`]. Directory entries
/// are idempotent. It contains no I/O, only data.
#[derive(Debug, Clone)]
pub struct ProjectTree {
    root: String,
    entries: Vec<TreeEntry>,
    seen_files: HashSet<RelativePath>,
    seen_dirs: HashSet<RelativePath>,
}

impl ProjectTree {
    /// Create an empty tree whose archive root directory is `root`.
    pub fn new(root: impl Into<String>) -> Result<Self, DomainError> {
        let root = root.into();
        let segment = RelativePath::try_new(&root)?;
        if root.is_empty() || segment.as_path().components().count() != 1 {
            return Err(DomainError::InvalidTree(format!(
                "root must be a single path segment, got '{}'",
                root
            )));
        }

        Ok(Self {
            root,
            entries: Vec::new(),
            seen_files: HashSet::new(),
            seen_dirs: HashSet::new(),
        })
    }

    /// Lay out the generated content in the standard Maven structure.
    ///
    /// ```text
    /// <artifactId>/
    ///   pom.xml
    ///   src/main/java/<group-path>/Application.java
    ///   src/main/resources/application*.properties   (environment only)
    ///   src/test/java/<group-path>/                   (empty)
    /// ```
    pub fn for_request(
        request: &ProjectRequest,
        content: SynthesizedContent,
    ) -> Result<Self, DomainError> {
        let mut tree = Self::new(request.artifact_id.as_str())?;

        let group: Vec<&str> = request.group_segments().collect();
        let main_package = RelativePath::from_segments(
            ["src", "main", "java"].into_iter().chain(group.iter().copied()),
        )?;
        let test_package = RelativePath::from_segments(
            ["src", "test", "java"].into_iter().chain(group.iter().copied()),
        )?;
        let resources = RelativePath::from_segments(["src", "main", "resources"])?;

        tree.add_file(RelativePath::try_new(BUILD_DESCRIPTOR)?, content.build_descriptor)?;
        tree.add_file(main_package.join(ENTRY_POINT)?, content.entry_point)?;
        tree.add_directory(resources.clone());
        for (file_name, body) in content.resources {
            tree.add_file(resources.join(file_name)?, body)?;
        }
        tree.add_directory(test_package);

        Ok(tree)
    }

    /// Record a directory and its ancestors. Re-adding is a no-op.
    pub fn add_directory(&mut self, path: RelativePath) {
        let mut chain = Vec::new();
        let mut current = Some(path);
        while let Some(dir) = current {
            current = dir.parent();
            chain.push(dir);
        }

        for dir in chain.into_iter().rev() {
            if self.seen_dirs.insert(dir.clone()) {
                self.entries.push(TreeEntry::Directory(dir));
            }
        }
    }

    /// Record a file, creating parent directory entries as needed.
    pub fn add_file(
        &mut self,
        path: RelativePath,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.seen_dirs.contains(&path) || !self.seen_files.insert(path.clone()) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            self.add_directory(parent);
        }

        self.entries.push(TreeEntry::File(TreeFile {
            path,
            content: content.into(),
        }));
        Ok(())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &TreeFile> {
        self.entries.iter().filter_map(|e| match e {
            TreeEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.iter().filter_map(|e| match e {
            TreeEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.seen_files.len()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.seen_files.is_empty() {
            return Err(DomainError::InvalidTree("project tree has no files".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum TreeEntry {
    File(TreeFile),
    Directory(RelativePath),
}

#[derive(Debug, Clone)]
pub struct TreeFile {
    pub path: RelativePath,
    pub content: String,
}

impl TreeFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
