//! Data Transfer Objects - request/response types for the API.
//!
//! Required request fields are `Option`s on purpose: the validation engine,
//! not serde, reports missing fields with the documented wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scribe_core::domain::{Post, User, UserStatus};

/// Request to create a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Free-form; defaults to `"user"` when absent.
    pub role: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request to create a post. The author is taken from the verified token
/// claims, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

/// Pagination query values, kept as raw strings so that non-numeric input
/// falls back to the defaults instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Post listing query: optional exact-match filters plus pagination.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListQuery {
    pub author: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Public projection of a user: everything except the password hash.
///
/// This is the only serializable user shape, so a credential can never
/// leak by accident regardless of how the entity evolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status,
            created_at: user.created_at,
        }
    }
}

/// Successful login: the bearer token, the authenticated user, and the
/// token's expiry instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserPublic,
    pub expires_at: DateTime<Utc>,
}

/// Paginated user listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub data: Vec<UserPublic>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

/// Post listing envelope. `total` is the filtered count before slicing.
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub data: Vec<Post>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_never_carries_credential_material() {
        let user = User::new(
            "Jane Roe".into(),
            "jane@x.io".into(),
            "$argon2id$v=19$m=19456,t=2,p=1$abc$def".into(),
            "user".into(),
        );
        let public = UserPublic::from(&user);
        let json = serde_json::to_string(&public).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"email\":\"jane@x.io\""));
        assert!(json.contains("\"status\":\"active\""));
    }

    #[test]
    fn post_request_accepts_camel_case_flag() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"Five Char","isPublished":true}"#).unwrap();
        assert_eq!(req.is_published, Some(true));
        assert!(req.content.is_none());
    }
}
