//! Directory listing in canonical child order

use crate::error::HashError;
use crate::tree::path;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Kind of a hashed filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Immediate child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name (UTF-8), the only part of the path that is hashed
    pub name: String,
    /// Full path used to read the entry
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Fail with `NotFound` unless `dir` currently exists and is a directory.
pub fn ensure_directory(dir: &Path) -> Result<(), HashError> {
    let metadata = std::fs::metadata(dir).map_err(|e| HashError::from_io(dir, e))?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(HashError::NotFound(dir.to_path_buf()))
    }
}

/// List the immediate children of `dir`
///
/// Returns files and subdirectories together, sorted by base name with
/// byte-wise ordinal comparison. Symbolic links are never followed; they and
/// any other special files are left out.
pub fn list_children(dir: &Path) -> Result<Vec<Entry>, HashError> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = entry.map_err(|e| {
            let failed_path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(io_err) => HashError::from_io(&failed_path, io_err),
                None => HashError::Io {
                    path: failed_path,
                    source: io::Error::new(io::ErrorKind::Other, "Failed to walk directory"),
                },
            }
        })?;

        let file_type = entry.file_type();
        let kind = if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            trace!(path = %entry.path().display(), "Skipping non-regular entry");
            continue;
        };

        let name = path::entry_name(entry.file_name(), entry.path())?;
        entries.push(Entry {
            name,
            path: entry.into_path(),
            kind,
        });
    }

    // String ordering compares UTF-8 bytes, which is the canonical order
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(entries)
}
