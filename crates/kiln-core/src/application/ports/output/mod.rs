//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kiln-adapters` crate provides implementations.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::Coordinate;
use crate::error::KilnResult;

/// Kind of a directory entry returned by [`Filesystem::read_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path, i.e. the listed directory joined with the child name.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Port for ephemeral storage operations.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFilesystem` (production, system temp dir)
/// - `kiln_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Every generation gets its own root from [`Filesystem::create_ephemeral_root`]
/// - `write_file` never overwrites
/// - `read_dir` order is whatever the storage yields; callers sort
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a fresh, empty directory called `name` in the adapter's scratch
    /// area and return its path. Fails if it already exists.
    fn create_ephemeral_root(&self, name: &str) -> KilnResult<PathBuf>;

    /// Create a directory and all parent directories. Existing is fine.
    fn create_dir_all(&self, path: &Path) -> KilnResult<()>;

    /// Write a new file. Fails if `path` already exists.
    fn write_file(&self, path: &Path, content: &[u8]) -> KilnResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List the direct children of a directory.
    fn read_dir(&self, path: &Path) -> KilnResult<Vec<DirEntry>>;

    /// Open a file for streamed reading.
    fn open_file(&self, path: &Path) -> KilnResult<Box<dyn Read + Send>>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> KilnResult<()>;
}

/// Port for packaging a materialized tree.
///
/// Implemented by:
/// - `kiln_adapters::archive::ZipArchiver`
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveWriter: Send + Sync {
    /// Serialize every file below `root` into one archive.
    ///
    /// Entry names are `<root file name>/<relative path>` with `/` separators.
    fn archive(&self, fs: &dyn Filesystem, root: &Path) -> KilnResult<Vec<u8>>;

    /// File extension of the produced archive, without the dot.
    fn extension(&self) -> &'static str;
}

/// A named catalog entry, for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub coordinate: Coordinate,
    pub description: String,
}

/// Port for dependency id → coordinate lookup.
///
/// Implemented by:
/// - `kiln_adapters::catalog::BuiltinCatalog` (compiled-in table, optionally
///   extended from a TOML file)
#[cfg_attr(test, mockall::automock)]
pub trait DependencyCatalog: Send + Sync {
    /// Resolve an id; `None` means unknown.
    fn lookup(&self, id: &str) -> Option<Coordinate>;

    /// Every known entry, sorted by id.
    fn entries(&self) -> Vec<CatalogEntry>;
}
