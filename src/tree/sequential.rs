//! Sequential tree reduction
//!
//! Walks the tree depth-first on the calling thread with an explicit stack of
//! open directories, so tree depth never grows the native call stack.

use crate::error::HashError;
use crate::tree::hasher;
use crate::tree::path;
use crate::tree::walker::{self, Entry, EntryKind};
use crate::types::Digest;
use std::path::Path;
use tracing::debug;

/// A directory whose children are still being reduced
struct PendingDirectory {
    name: String,
    children: std::vec::IntoIter<Entry>,
    digests: Vec<Digest>,
}

impl PendingDirectory {
    fn open(name: String, dir_path: &Path) -> Result<Self, HashError> {
        let children = walker::list_children(dir_path)?;
        debug!(path = %dir_path.display(), children = children.len(), "Listed directory");
        Ok(Self {
            name,
            digests: Vec::with_capacity(children.len()),
            children: children.into_iter(),
        })
    }
}

/// Compute the digest of the directory at `root`, one child at a time
pub fn hash_directory(root: &Path) -> Result<Digest, HashError> {
    walker::ensure_directory(root)?;
    let name = path::base_name(root)?;

    let mut stack = vec![PendingDirectory::open(name, root)?];
    let mut root_digest = None;

    while let Some(current) = stack.last_mut() {
        if let Some(entry) = current.children.next() {
            match entry.kind {
                EntryKind::File => {
                    let digest = hasher::hash_named_file(&entry.name, &entry.path)?;
                    current.digests.push(digest);
                }
                EntryKind::Directory => {
                    stack.push(PendingDirectory::open(entry.name, &entry.path)?);
                }
            }
            continue;
        }

        // All children resolved: combine and hand the digest to the parent
        if let Some(done) = stack.pop() {
            let digest = hasher::directory_digest(&done.name, &done.digests);
            match stack.last_mut() {
                Some(parent) => parent.digests.push(digest),
                None => root_digest = Some(digest),
            }
        }
    }

    root_digest.ok_or_else(|| HashError::NotFound(root.to_path_buf()))
}
