//! Directory Merkle Reduction
//!
//! Fingerprints a directory tree bottom-up: each file hashes its base name and
//! content, each directory hashes its base name and its children's digests in
//! canonical (ordinal name) order.

pub mod builder;
pub mod concurrent;
pub mod hasher;
pub mod path;
pub mod sequential;
pub mod walker;

pub use builder::{HashMode, HashReport, HashingConfig, TreeHasher};
