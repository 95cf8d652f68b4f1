//! Blob store port - opaque binary storage for uploads.

use async_trait::async_trait;

/// Durable storage for uploaded binary content. Implementations own the
/// stored-filename scheme; callers only get the name back.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist `bytes`, returning the stored filename the content is
    /// reachable under.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, BlobError>;
}

/// Blob store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("Blob write failed: {0}")]
    Io(String),
}
