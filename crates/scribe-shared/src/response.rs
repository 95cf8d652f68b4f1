//! The structured error body every failure path renders to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire shape of every error response:
/// `{error, message, timestamp, details?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Taxonomy label, e.g. `"Validation failed"`.
    pub error: String,

    /// Human-readable explanation of this occurrence.
    pub message: String,

    /// When the failure was rendered (RFC 3339).
    pub timestamp: DateTime<Utc>,

    /// Optional structured detail, e.g. a per-field breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    // Common constructors, one per taxonomy label.

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("Validation failed", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("Unauthorized", message)
    }

    pub fn invalid_credentials() -> Self {
        Self::new("Invalid credentials", "Email or password is incorrect")
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new("Forbidden", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("Conflict", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("Not found", message)
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error", "Something went wrong on the server")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorBody::not_found("nope")).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["error"], "Not found");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn details_round_trip() {
        let body = ErrorBody::validation("Name, email, and password are required")
            .with_details(serde_json::json!({"name": "Name is required"}));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["details"]["name"], "Name is required");
    }
}
