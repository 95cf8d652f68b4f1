//! Filesystem blob store.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use scribe_core::ports::{BlobError, BlobStore};

/// Stores uploaded binaries as files under a root directory.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Open a blob store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, BlobError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| BlobError::Io(e.to_string()))?;
        Ok(Self { root })
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, BlobError> {
        let filename = stored_filename(original_name);
        let path = self.root.join(&filename);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| BlobError::Io(e.to_string()))?;

        tracing::debug!(filename = %filename, size = bytes.len(), "blob stored");
        Ok(filename)
    }
}

/// Collision-resistant stored name: millisecond timestamp, a random
/// suffix, and the original extension when one exists.
fn stored_filename(original: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    let suffix = &random[..8];

    match original.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("file-{millis}-{suffix}.{ext}"),
        _ => format!("file-{millis}-{suffix}"),
    }
}
