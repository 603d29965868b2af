//! Base name extraction for hashed entries

use crate::error::HashError;
use std::ffi::OsStr;
use std::path::Path;

/// Decode an entry's file name as UTF-8.
///
/// `path` is only used for error reporting.
pub fn entry_name(name: &OsStr, path: &Path) -> Result<String, HashError> {
    name.to_str()
        .map(str::to_string)
        .ok_or_else(|| HashError::InvalidName(path.to_path_buf()))
}

/// Resolve the base name used to hash the entry at `path`
///
/// This function:
/// 1. Uses the final path component when there is one
/// 2. Otherwise (`.`, `..`, `dir/..`) canonicalizes and uses the canonical final component
/// 3. Returns the empty name for a filesystem root
pub fn base_name(path: &Path) -> Result<String, HashError> {
    if let Some(name) = path.file_name() {
        return entry_name(name, path);
    }

    // Use dunce for cross-platform canonicalization
    let canonical = dunce::canonicalize(path).map_err(|e| HashError::from_io(path, e))?;
    match canonical.file_name() {
        Some(name) => entry_name(name, &canonical),
        None => Ok(String::new()),
    }
}
