//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{
    BlobStore, FileStore, PasswordService, PostStore, TokenService, UserStore,
};
use scribe_infra::{
    Argon2PasswordService, FsBlobStore, InMemoryFiles, InMemoryPosts, InMemoryUsers,
    JwtTokenService,
};

use crate::config::AppConfig;

/// Shared application state, initialized once at startup. Handlers reach
/// every collaborator through these trait objects; nothing is ambient.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    pub files: Arc<dyn FileStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the application state with the in-memory stores and the
    /// filesystem blob store.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        let blobs = FsBlobStore::open(&config.upload_dir)
            .await
            .map_err(std::io::Error::other)?;

        tracing::info!(upload_dir = %config.upload_dir.display(), "application state initialized");

        Ok(Self {
            users: Arc::new(InMemoryUsers::new()),
            posts: Arc::new(InMemoryPosts::new()),
            files: Arc::new(InMemoryFiles::new()),
            blobs: Arc::new(blobs),
            tokens: Arc::new(JwtTokenService::from_env()),
            passwords: Arc::new(Argon2PasswordService::new()),
        })
    }
}
