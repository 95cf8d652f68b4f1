//! # Scribe Core
//!
//! The domain layer of the Scribe demo API.
//! This crate contains the entities, validation rules, and the port traits
//! that infrastructure must implement. Zero HTTP or storage dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::StoreError;
pub use validation::ValidationError;
