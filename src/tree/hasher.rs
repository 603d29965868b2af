//! Digest computation for files and directories using BLAKE3
//!
//! Every digest is the first `DIGEST_LEN` bytes of the BLAKE3 extendable
//! output over the entry's hash input buffer:
//!
//! - file: `name || content`
//! - directory: `name || child_1 || ... || child_n` (children in canonical order)
//!
//! No delimiters or length prefixes are inserted.

use crate::error::HashError;
use crate::tree::path;
use crate::types::{Digest, DIGEST_LEN};
use blake3::Hasher;
use std::fs::File;
use std::path::Path;
use tracing::trace;

fn finalize(hasher: &Hasher) -> Digest {
    let mut digest = [0u8; DIGEST_LEN];
    hasher.finalize_xof().fill(&mut digest);
    digest
}

/// Compute a digest of arbitrary data
pub fn digest(data: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(data);
    finalize(&hasher)
}

/// Compute the digest of a file from its base name and content
pub fn file_digest(name: &str, content: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    hasher.update(content);
    finalize(&hasher)
}

/// Compute the digest of a directory from its base name and child digests.
///
/// Children must already be in canonical order.
pub fn directory_digest(name: &str, children: &[Digest]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    for child in children {
        hasher.update(child);
    }
    finalize(&hasher)
}

/// Hash the file at `file_path` under an already resolved base name
///
/// Content is streamed into the hasher, which yields the same digest as
/// hashing `name || content` in one buffer.
pub fn hash_named_file(name: &str, file_path: &Path) -> Result<Digest, HashError> {
    let mut file = File::open(file_path).map_err(|e| HashError::from_io(file_path, e))?;

    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    let size = std::io::copy(&mut file, &mut hasher)
        .map_err(|e| HashError::from_io(file_path, e))?;

    let digest = finalize(&hasher);
    trace!(path = %file_path.display(), size, digest = %to_hex(&digest), "Hashed file");
    Ok(digest)
}

/// Hash a single file by path
pub fn hash_file(file_path: &Path) -> Result<Digest, HashError> {
    let metadata = std::fs::metadata(file_path).map_err(|e| HashError::from_io(file_path, e))?;
    if metadata.is_dir() {
        return Err(HashError::Io {
            path: file_path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Expected a file, found a directory",
            ),
        });
    }

    let name = path::base_name(file_path)?;
    hash_named_file(&name, file_path)
}

/// Render a digest as uppercase hexadecimal without separators
pub fn to_hex(digest: &Digest) -> String {
    hex::encode_upper(digest)
}
