//! # Scribe Shared
//!
//! Wire types shared by server and clients: request DTOs, public
//! projections, list envelopes, and the structured error body.

pub mod dto;
pub mod response;

pub use response::ErrorBody;
