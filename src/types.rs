//! Core types for directory tree fingerprinting.

/// Width of every digest in bytes
pub const DIGEST_LEN: usize = 16;

/// Digest: Deterministic hash of a file or directory subtree
pub type Digest = [u8; DIGEST_LEN];
