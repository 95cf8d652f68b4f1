use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status. No current flow deactivates an account, but the field
/// round-trips on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// User entity.
///
/// Deliberately does not implement `Serialize`: the only outward-facing
/// representation is the `UserPublic` projection, which guarantees the
/// password hash never crosses the wire.
#[derive(Debug, Clone)]
pub struct User {
    /// Assigned by the store on append; empty until then.
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// Free-form role string, defaulting to `"user"`. The value is stored
    /// and round-tripped but never checked against a closed set.
    pub role: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user. The id is left empty for the store to fill.
    pub fn new(name: String, email: String, password_hash: String, role: String) -> Self {
        Self {
            id: String::new(),
            name,
            email,
            password_hash,
            role,
            status: UserStatus::Active,
            created_at: Utc::now(),
        }
    }
}
