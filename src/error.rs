//! Error types for directory tree fingerprinting.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while hashing files and directories
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Entry name is not valid UTF-8: {0}")]
    InvalidName(PathBuf),

    #[error("Concurrent hashing failed: {0}")]
    Concurrency(String),
}

impl HashError {
    /// Classify an I/O error raised while touching `path`.
    ///
    /// A missing path becomes `NotFound`; every other failure is `Io`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            HashError::NotFound(path.to_path_buf())
        } else {
            HashError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HashError::NotFound(_))
    }
}

/// Errors surfaced by the CLI shell and its configuration layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Hash(#[from] HashError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
