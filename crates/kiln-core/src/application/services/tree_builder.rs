//! Writes a [`ProjectTree`] onto storage.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ProjectTree, TreeEntry},
    error::KilnResult,
};

/// Materializes project trees through the [`Filesystem`] port.
pub struct TreeBuilder<'fs> {
    fs: &'fs dyn Filesystem,
}

impl<'fs> TreeBuilder<'fs> {
    pub fn new(fs: &'fs dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Write every entry below `<base>/<tree root>` and return that directory.
    ///
    /// Files are write-once, so materializing onto a non-empty base fails at
    /// the first clash instead of replacing content.
    #[instrument(skip_all, fields(root = tree.root()))]
    pub fn materialize(&self, tree: &ProjectTree, base: &Path) -> KilnResult<PathBuf> {
        let root = base.join(tree.root());
        self.fs.create_dir_all(&root)?;

        for entry in tree.entries() {
            match entry {
                TreeEntry::Directory(dir) => {
                    self.fs.create_dir_all(&root.join(dir))?;
                }
                TreeEntry::File(file) => {
                    let path = root.join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.fs.create_dir_all(parent)?;
                    }

                    self.fs.write_file(&path, file.content.as_bytes())?;
                    debug!(path = %file.path, bytes = file.size(), "file written");
                }
            }
        }

        Ok(root)
    }
}
