//! treehash: Deterministic Directory Fingerprints
//!
//! Computes a single fixed-size digest for a directory tree by Merkle reduction:
//! files hash their base name and content, directories hash their base name and
//! their children's digests in canonical order. Sequential and concurrent
//! execution produce byte-identical digests.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;

pub use api::{compute_directory_hash, compute_file_hash, digest_to_hex};
pub use error::HashError;
pub use tree::HashMode;
pub use types::{Digest, DIGEST_LEN};
