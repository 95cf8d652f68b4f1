//! Validation engine - per-resource rule sets applied before any mutation.
//!
//! Rules run in a fixed order. Missing-required-field checks aggregate all
//! missing fields into one error; every later rule reports only the first
//! failure. No partial writes happen on failure.

mod post;
mod user;

use std::collections::BTreeMap;

pub use post::validate_new_post;
pub use user::{validate_login, validate_new_user};

/// A failed validation rule: the wire-facing message plus an optional
/// per-field breakdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub details: Option<BTreeMap<String, String>>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: BTreeMap<String, String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details),
        }
    }
}
