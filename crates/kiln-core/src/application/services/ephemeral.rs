//! Call-scoped scratch directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::{KilnError, KilnResult},
};

/// Prefix of every ephemeral root directory name.
pub const EPHEMERAL_PREFIX: &str = "kiln-";

/// A uniquely named scratch directory owned by one generation.
///
/// Dropping the guard removes the directory. [`EphemeralRoot::release`] does
/// the same but reports a failed removal to the caller instead of only
/// logging it.
pub struct EphemeralRoot<'fs> {
    fs: &'fs dyn Filesystem,
    path: PathBuf,
    released: bool,
}

impl<'fs> EphemeralRoot<'fs> {
    /// Allocate `kiln-<uuid>` through the filesystem port.
    pub fn allocate(fs: &'fs dyn Filesystem) -> KilnResult<Self> {
        let name = format!("{EPHEMERAL_PREFIX}{}", Uuid::new_v4());
        let path = fs.create_ephemeral_root(&name)?;
        debug!(path = %path.display(), "ephemeral root allocated");

        Ok(Self {
            fs,
            path,
            released: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory now.
    pub fn release(mut self) -> KilnResult<()> {
        self.released = true;
        remove(self.fs, &self.path)
    }
}

impl Drop for EphemeralRoot<'_> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = remove(self.fs, &self.path) {
            warn!(error = %e, path = %self.path.display(), "ephemeral root cleanup failed");
        }
    }
}

fn remove(fs: &dyn Filesystem, path: &Path) -> KilnResult<()> {
    fs.remove_dir_all(path).map_err(|e| {
        KilnError::from(ApplicationError::Cleanup {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;
    debug!(path = %path.display(), "ephemeral root removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;

    fn allocating_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_ephemeral_root()
            .withf(|name| name.starts_with(EPHEMERAL_PREFIX))
            .returning(|name| Ok(PathBuf::from("/scratch").join(name)));
        fs
    }

    #[test]
    fn drop_removes_root() {
        let mut fs = allocating_fs();
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        let root = EphemeralRoot::allocate(&fs).unwrap();
        assert!(root.path().starts_with("/scratch"));
        drop(root);
    }

    #[test]
    fn release_removes_exactly_once() {
        let mut fs = allocating_fs();
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        let root = EphemeralRoot::allocate(&fs).unwrap();
        root.release().unwrap();
    }

    #[test]
    fn release_surfaces_cleanup_failure() {
        let mut fs = allocating_fs();
        fs.expect_remove_dir_all().times(1).returning(|p| {
            Err(ApplicationError::Storage {
                path: p.to_path_buf(),
                reason: "busy".into(),
            }
            .into())
        });

        let root = EphemeralRoot::allocate(&fs).unwrap();
        let err = root.release().unwrap_err();
        assert!(matches!(
            err,
            KilnError::Application(ApplicationError::Cleanup { .. })
        ));
    }

    #[test]
    fn each_allocation_gets_a_distinct_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_ephemeral_root()
            .times(2)
            .returning(|name| Ok(PathBuf::from(name)));
        fs.expect_remove_dir_all().times(2).returning(|_| Ok(()));

        let a = EphemeralRoot::allocate(&fs).unwrap();
        let b = EphemeralRoot::allocate(&fs).unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn failed_allocation_does_not_clean_up() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_ephemeral_root().returning(|name| {
            Err(ApplicationError::Storage {
                path: PathBuf::from(name),
                reason: "read-only".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all().never();

        assert!(EphemeralRoot::allocate(&fs).is_err());
    }
}
