//! Concurrent tree reduction
//!
//! Fork-join over tokio tasks: every child of a directory is hashed in its own
//! task, and the parent joins all of them before combining. Child digests are
//! slotted by dispatch index, so completion order never affects the result.
//! Blocking filesystem work runs on the blocking pool behind a semaphore that
//! caps simultaneously open handles.

use crate::error::HashError;
use crate::tree::hasher;
use crate::tree::path;
use crate::tree::walker::{self, EntryKind};
use crate::types::Digest;
use futures::future::{BoxFuture, FutureExt};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

/// Shared state handed to every task of one computation
#[derive(Clone)]
struct Reduction {
    /// Bounds open directory and file handles; held only around blocking calls
    open_handles: Arc<Semaphore>,
}

impl Reduction {
    fn new(max_open_files: usize) -> Self {
        Self {
            open_handles: Arc::new(Semaphore::new(max_open_files.max(1))),
        }
    }

    /// Run blocking filesystem work on the blocking pool under a handle permit
    async fn blocking<T, F>(&self, work: F) -> Result<T, HashError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, HashError> + Send + 'static,
    {
        let _permit = Arc::clone(&self.open_handles)
            .acquire_owned()
            .await
            .map_err(|_| HashError::Concurrency("Handle semaphore closed".to_string()))?;

        tokio::task::spawn_blocking(work)
            .await
            .map_err(|e| HashError::Concurrency(format!("Blocking task failed: {}", e)))?
    }

    fn reduce_directory(
        self,
        name: String,
        dir_path: PathBuf,
    ) -> BoxFuture<'static, Result<Digest, HashError>> {
        async move {
            let listing_path = dir_path.clone();
            let children = self
                .blocking(move || walker::list_children(&listing_path))
                .await?;
            debug!(path = %dir_path.display(), children = children.len(), "Listed directory");

            let mut slots: Vec<Option<Digest>> = vec![None; children.len()];
            let mut tasks = JoinSet::new();

            for (index, entry) in children.into_iter().enumerate() {
                let reduction = self.clone();
                tasks.spawn(async move {
                    let result = match entry.kind {
                        EntryKind::File => {
                            let (name, file_path) = (entry.name, entry.path);
                            reduction
                                .blocking(move || hasher::hash_named_file(&name, &file_path))
                                .await
                        }
                        EntryKind::Directory => {
                            reduction.reduce_directory(entry.name, entry.path).await
                        }
                    };
                    (index, result)
                });
            }

            // Returning early drops the JoinSet, which aborts the remaining siblings
            while let Some(joined) = tasks.join_next().await {
                let (index, result) = joined
                    .map_err(|e| HashError::Concurrency(format!("Child task failed: {}", e)))?;
                slots[index] = Some(result?);
            }

            let digests = slots
                .into_iter()
                .collect::<Option<Vec<Digest>>>()
                .ok_or_else(|| {
                    HashError::Concurrency(format!(
                        "Missing child digest under {}",
                        dir_path.display()
                    ))
                })?;

            Ok(hasher::directory_digest(&name, &digests))
        }
        .boxed()
    }
}

/// Compute the digest of the directory at `root` with one task per child
///
/// Must be awaited on a multi-threaded tokio runtime or a current-thread
/// runtime; blocking reads never run on the async workers.
pub async fn hash_directory(root: PathBuf, max_open_files: usize) -> Result<Digest, HashError> {
    let reduction = Reduction::new(max_open_files);

    let checked_root = root.clone();
    let name = reduction
        .blocking(move || {
            walker::ensure_directory(&checked_root)?;
            path::base_name(&checked_root)
        })
        .await?;

    reduction.reduce_directory(name, root).await
}
