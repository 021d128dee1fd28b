//! Zip archive adapter.

use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use zip::{CompressionMethod, DateTime, ZipWriter, result::ZipError, write::SimpleFileOptions};

use kiln_core::{
    application::{
        ApplicationError,
        ports::{ArchiveWriter, Filesystem},
    },
    error::{KilnError, KilnResult},
};

/// Bytes copied from storage into the zip stream per read.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Packs a materialized tree into a zip archive.
///
/// Output is reproducible: children are visited in name order and every
/// entry carries the same DOS timestamp (1980-01-01 00:00).
#[derive(Debug, Clone, Copy)]
pub struct ZipArchiver {
    compression: CompressionMethod,
}

impl ZipArchiver {
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Store entries uncompressed.
    pub fn stored() -> Self {
        Self {
            compression: CompressionMethod::Stored,
        }
    }

    fn options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644)
    }
}

impl Default for ZipArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveWriter for ZipArchiver {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn archive(&self, fs: &dyn Filesystem, root: &Path) -> KilnResult<Vec<u8>> {
        let root_name = root
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| archive_error(format!("root {} has no usable name", root.display())))?;

        let mut files = Vec::new();
        collect_files(fs, root, root_name, &mut files)?;

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let mut chunk = vec![0u8; CHUNK_SIZE];

        for (entry_name, path) in files {
            writer
                .start_file(entry_name.as_str(), self.options())
                .map_err(zip_error)?;

            let mut reader = fs.open_file(&path)?;
            let mut copied = 0usize;
            loop {
                let n = reader
                    .read(&mut chunk)
                    .map_err(|e| archive_error(format!("reading {}: {e}", path.display())))?;
                if n == 0 {
                    break;
                }
                writer
                    .write_all(&chunk[..n])
                    .map_err(|e| archive_error(format!("compressing {entry_name}: {e}")))?;
                copied += n;
            }
            debug!(entry = %entry_name, bytes = copied, "entry archived");
        }

        let cursor = writer.finish().map_err(zip_error)?;
        Ok(cursor.into_inner())
    }

    fn extension(&self) -> &'static str {
        "zip"
    }
}

/// Depth-first, name-sorted walk collecting `(entry name, path)` for files.
fn collect_files(
    fs: &dyn Filesystem,
    dir: &Path,
    prefix: &str,
    out: &mut Vec<(String, PathBuf)>,
) -> KilnResult<()> {
    let mut children = fs.read_dir(dir)?;
    children.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    for child in children {
        let name = child
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                archive_error(format!("{} has no usable name", child.path.display()))
            })?;
        let entry_name = format!("{prefix}/{name}");

        if child.is_dir() {
            collect_files(fs, &child.path, &entry_name, out)?;
        } else {
            out.push((entry_name, child.path));
        }
    }
    Ok(())
}

fn archive_error(reason: String) -> KilnError {
    ApplicationError::Archive { reason }.into()
}

fn zip_error(e: ZipError) -> KilnError {
    archive_error(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use zip::ZipArchive;

    fn sample() -> (MemoryFilesystem, PathBuf) {
        let fs = MemoryFilesystem::new();
        let root = PathBuf::from("/scratch/kiln-t/demo");
        fs.create_dir_all(&root.join("src/main/java/com/example"))
            .unwrap();
        fs.create_dir_all(&root.join("src/test/java")).unwrap();
        fs.write_file(&root.join("pom.xml"), b"<project/>").unwrap();
        fs.write_file(
            &root.join("src/main/java/com/example/Application.java"),
            b"package com.example;",
        )
        .unwrap();
        (fs, root)
    }

    fn names(bytes: Vec<u8>) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(String::from).collect()
    }

    #[test]
    fn entries_are_root_prefixed_and_sorted() {
        let (fs, root) = sample();
        let bytes = ZipArchiver::new().archive(&fs, &root).unwrap();

        let mut listed = names(bytes);
        listed.sort();
        assert_eq!(
            listed,
            [
                "demo/pom.xml",
                "demo/src/main/java/com/example/Application.java"
            ]
        );
    }

    #[test]
    fn empty_directories_produce_no_entries() {
        let (fs, root) = sample();
        let bytes = ZipArchiver::new().archive(&fs, &root).unwrap();
        assert!(names(bytes).iter().all(|n| !n.contains("src/test")));
    }

    #[test]
    fn content_larger_than_one_chunk_survives() {
        let fs = MemoryFilesystem::new();
        let root = PathBuf::from("/r/big");
        fs.create_dir_all(&root).unwrap();
        let payload: Vec<u8> = (0..CHUNK_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        fs.write_file(&root.join("blob.bin"), &payload).unwrap();

        let bytes = ZipArchiver::new().archive(&fs, &root).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name("big/blob.bin").unwrap();
        let mut read_back = Vec::new();
        entry.read_to_end(&mut read_back).unwrap();
        assert_eq!(read_back, payload);
    }

    #[test]
    fn identical_trees_give_identical_bytes() {
        let (a, root) = sample();
        let (b, _) = sample();
        let archiver = ZipArchiver::new();
        assert_eq!(
            archiver.archive(&a, &root).unwrap(),
            archiver.archive(&b, &root).unwrap()
        );
    }

    #[test]
    fn stored_archives_are_readable() {
        let (fs, root) = sample();
        let bytes = ZipArchiver::stored().archive(&fs, &root).unwrap();
        assert_eq!(names(bytes).len(), 2);
    }

    #[test]
    fn missing_root_is_an_error() {
        let fs = MemoryFilesystem::new();
        assert!(
            ZipArchiver::new()
                .archive(&fs, Path::new("/nowhere/demo"))
                .is_err()
        );
    }
}
