//! Collection store error types.

use thiserror::Error;

/// Errors surfaced by collection store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (e.g. duplicate email).
    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}
