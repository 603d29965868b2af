//! Tree hasher: selects the execution strategy for one directory fingerprint

use crate::error::HashError;
use crate::tree::hasher;
use crate::tree::{concurrent, sequential};
use crate::types::Digest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Execution strategy for a directory fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashMode {
    /// One child at a time on the calling thread
    Sequential,
    /// One task per child, joined in canonical order
    Concurrent,
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashMode::Sequential => write!(f, "sequential"),
            HashMode::Concurrent => write!(f, "concurrent"),
        }
    }
}

/// Hashing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Maximum directory listings and file reads in flight (concurrent mode)
    #[serde(default = "default_max_open_files")]
    pub max_open_files: usize,

    /// Runtime worker threads for concurrent mode (None = tokio default)
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_max_open_files() -> usize {
    64
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            max_open_files: default_max_open_files(),
            worker_threads: None,
        }
    }
}

impl HashingConfig {
    /// Validate hashing configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_open_files == 0 {
            return Err("max_open_files must be at least 1".to_string());
        }
        if self.worker_threads == Some(0) {
            return Err("worker_threads must be at least 1 when set".to_string());
        }
        Ok(())
    }
}

/// Outcome of one timed computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashReport {
    pub mode: HashMode,
    pub digest: Digest,
    pub elapsed: Duration,
}

impl HashReport {
    /// Digest as uppercase hex
    pub fn hex(&self) -> String {
        hasher::to_hex(&self.digest)
    }
}

/// Computes the fingerprint of a directory tree
pub struct TreeHasher {
    root: PathBuf,
    config: HashingConfig,
}

impl TreeHasher {
    /// Create a new tree hasher for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: HashingConfig::default(),
        }
    }

    /// Use custom hashing limits instead of the defaults
    pub fn with_config(mut self, config: HashingConfig) -> Self {
        self.config = config;
        self
    }

    /// Compute the root digest using the given strategy
    ///
    /// Concurrent mode builds its own runtime and therefore must not be called
    /// from within an async context; use [`TreeHasher::compute_async`] there.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn compute(&self, mode: HashMode) -> Result<Digest, HashError> {
        let start = Instant::now();
        let result = match mode {
            HashMode::Sequential => sequential::hash_directory(&self.root),
            HashMode::Concurrent => self.compute_blocking_concurrent(),
        };

        match &result {
            Ok(digest) => info!(
                %mode,
                digest = %hasher::to_hex(digest),
                duration_ms = start.elapsed().as_millis(),
                "Tree hash completed"
            ),
            Err(e) => error!(%mode, "Tree hash failed: {}", e),
        }
        result
    }

    /// Compute the root digest and measure wall time
    pub fn compute_timed(&self, mode: HashMode) -> Result<HashReport, HashError> {
        let start = Instant::now();
        let digest = self.compute(mode)?;
        Ok(HashReport {
            mode,
            digest,
            elapsed: start.elapsed(),
        })
    }

    /// Compute the root digest concurrently on the caller's runtime
    pub async fn compute_async(&self) -> Result<Digest, HashError> {
        concurrent::hash_directory(self.root.clone(), self.config.max_open_files).await
    }

    fn compute_blocking_concurrent(&self) -> Result<Digest, HashError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(HashError::Concurrency(
                "Cannot block on concurrent hashing from within an async runtime; use compute_async"
                    .to_string(),
            ));
        }

        let mut builder = tokio::runtime::Builder::new_multi_thread();
        if let Some(threads) = self.config.worker_threads.filter(|t| *t > 0) {
            builder.worker_threads(threads);
        }
        let runtime = builder
            .max_blocking_threads(self.config.max_open_files.max(1))
            .enable_all()
            .build()
            .map_err(|e| HashError::Concurrency(format!("Failed to create runtime: {}", e)))?;

        runtime.block_on(self.compute_async())
    }
}
