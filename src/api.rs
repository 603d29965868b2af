//! Public hashing API
//!
//! Entry points consumed by the CLI and by library callers: hash a single
//! file, hash a directory tree in either mode, render digests, and run both
//! modes side by side.

use crate::error::HashError;
use crate::tree::hasher;
use crate::tree::{HashMode, HashReport, HashingConfig, TreeHasher};
use crate::types::Digest;
use std::path::Path;
use tracing::warn;

/// Compute the digest of a single file: `H(name || content)`
pub fn compute_file_hash(path: impl AsRef<Path>) -> Result<Digest, HashError> {
    hasher::hash_file(path.as_ref())
}

/// Compute the digest of a directory tree with the default hashing limits
pub fn compute_directory_hash(
    path: impl AsRef<Path>,
    mode: HashMode,
) -> Result<Digest, HashError> {
    TreeHasher::new(path.as_ref().to_path_buf()).compute(mode)
}

/// Render a digest as uppercase hex, two characters per byte
pub fn digest_to_hex(digest: &Digest) -> String {
    hasher::to_hex(digest)
}

/// Timed results of hashing one tree in both modes
#[derive(Debug, Clone)]
pub struct ModeComparison {
    pub sequential: HashReport,
    pub concurrent: HashReport,
}

impl ModeComparison {
    /// Whether both modes produced the same digest
    pub fn matches(&self) -> bool {
        self.sequential.digest == self.concurrent.digest
    }

    pub fn reports(&self) -> [&HashReport; 2] {
        [&self.sequential, &self.concurrent]
    }
}

/// Hash `path` sequentially, then concurrently, timing each run
pub fn compare_modes(
    path: impl AsRef<Path>,
    config: &HashingConfig,
) -> Result<ModeComparison, HashError> {
    let tree = TreeHasher::new(path.as_ref().to_path_buf()).with_config(config.clone());

    let comparison = ModeComparison {
        sequential: tree.compute_timed(HashMode::Sequential)?,
        concurrent: tree.compute_timed(HashMode::Concurrent)?,
    };

    if !comparison.matches() {
        warn!(
            sequential = %comparison.sequential.hex(),
            concurrent = %comparison.concurrent.hex(),
            "Sequential and concurrent digests differ"
        );
    }

    Ok(comparison)
}
