//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`:
//! JWT session tokens, Argon2 password hashing, in-memory collection
//! stores, and the filesystem blob store.

pub mod auth;
pub mod blob;
pub mod store;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use blob::FsBlobStore;
pub use store::{InMemoryFiles, InMemoryPosts, InMemoryUsers};
