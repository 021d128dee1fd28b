//! Local filesystem adapter using std::fs.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use kiln_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::{KilnError, KilnResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Ephemeral roots are created under `base`, which defaults to the system
/// temporary directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    base: PathBuf,
}

impl LocalFilesystem {
    /// Create a new local filesystem adapter rooted at the system temp dir.
    pub fn new() -> Self {
        Self {
            base: std::env::temp_dir(),
        }
    }

    /// Allocate ephemeral roots under `base` instead.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_ephemeral_root(&self, name: &str) -> KilnResult<PathBuf> {
        fs::create_dir_all(&self.base)
            .map_err(|e| map_io_error(&self.base, e, "create scratch area"))?;

        let path = self.base.join(name);
        fs::create_dir(&path).map_err(|e| map_io_error(&path, e, "create ephemeral root"))?;
        Ok(path)
    }

    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> KilnResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => ApplicationError::AlreadyWritten {
                    path: path.to_path_buf(),
                }
                .into(),
                _ => map_io_error(path, e, "create file"),
            })?;

        file.write_all(content)
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> KilnResult<Vec<DirEntry>> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "get file type"))?;

            children.push(if file_type.is_dir() {
                DirEntry::directory(entry.path())
            } else {
                DirEntry::file(entry.path())
            });
        }
        Ok(children)
    }

    fn open_file(&self, path: &Path) -> KilnResult<Box<dyn Read + Send>> {
        let file = File::open(path).map_err(|e| map_io_error(path, e, "open file"))?;
        Ok(Box::new(file))
    }

    fn remove_dir_all(&self, path: &Path) -> KilnResult<()> {
        fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KilnError {
    ApplicationError::Storage {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ephemeral_root_is_created_under_base() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_base(tmp.path());

        let root = fs.create_ephemeral_root("kiln-test").unwrap();
        assert_eq!(root, tmp.path().join("kiln-test"));
        assert!(root.is_dir());
    }

    #[test]
    fn ephemeral_root_must_be_fresh() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_base(tmp.path());

        fs.create_ephemeral_root("kiln-test").unwrap();
        assert!(fs.create_ephemeral_root("kiln-test").is_err());
    }

    #[test]
    fn write_file_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_base(tmp.path());
        let path = tmp.path().join("pom.xml");

        fs.write_file(&path, b"first").unwrap();
        let err = fs.write_file(&path, b"second").unwrap_err();

        assert!(matches!(
            err,
            KilnError::Application(ApplicationError::AlreadyWritten { .. })
        ));
        assert_eq!(std::fs::read(&path).unwrap(), b"first");
    }

    #[test]
    fn read_dir_reports_kinds() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_base(tmp.path());
        fs.create_dir_all(&tmp.path().join("src/main")).unwrap();
        fs.write_file(&tmp.path().join("pom.xml"), b"<project/>").unwrap();

        let mut children = fs.read_dir(tmp.path()).unwrap();
        children.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(children.len(), 2);
        assert!(!children[0].is_dir());
        assert!(children[1].is_dir());
    }

    #[test]
    fn open_file_streams_content() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_base(tmp.path());
        let path = tmp.path().join("a.txt");
        fs.write_file(&path, b"hello").unwrap();

        let mut content = String::new();
        fs.open_file(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_base(tmp.path());
        let root = fs.create_ephemeral_root("kiln-gone").unwrap();
        fs.create_dir_all(&root.join("a/b")).unwrap();
        fs.write_file(&root.join("a/b/c.txt"), b"x").unwrap();

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }
}
