//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    io::{Cursor, Read},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kiln_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::KilnResult,
};

/// Directory ephemeral roots are placed under.
const SCRATCH: &str = "/scratch";

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle while the service owns
/// another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// True if nothing but the scratch area itself remains.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|inner| {
                inner.files.is_empty()
                    && inner
                        .directories
                        .iter()
                        .all(|d| Path::new(SCRATCH).starts_with(d))
            })
            .unwrap_or(false)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_ephemeral_root(&self, name: &str) -> KilnResult<PathBuf> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let path = Path::new(SCRATCH).join(name);
        if inner.directories.contains(&path) {
            return Err(ApplicationError::Storage {
                path,
                reason: "Ephemeral root already exists".into(),
            }
            .into());
        }

        inner.insert_dir_all(&path);
        Ok(path)
    }

    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert_dir_all(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Storage {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        if inner.files.contains_key(path) {
            return Err(ApplicationError::AlreadyWritten {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_dir(&self, path: &Path) -> KilnResult<Vec<DirEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::Storage {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into());
        }

        let is_child = |p: &&PathBuf| p.parent() == Some(path);
        let dirs = inner
            .directories
            .iter()
            .filter(is_child)
            .map(|p| DirEntry::directory(p.clone()));
        let files = inner
            .files
            .keys()
            .filter(is_child)
            .map(|p| DirEntry::file(p.clone()));

        Ok(dirs.chain(files).collect())
    }

    fn open_file(&self, path: &Path) -> KilnResult<Box<dyn Read + Send>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let content = inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::Storage {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            })?;
        Ok(Box::new(Cursor::new(content)))
    }

    fn remove_dir_all(&self, path: &Path) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}
