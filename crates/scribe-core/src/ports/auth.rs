//! Authentication ports: session tokens and password hashing.

use chrono::{DateTime, Utc};

/// Identity claims embedded in a session token at issuance.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    /// Subject user id.
    pub subject: String,
    pub email: String,
    pub role: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// A freshly issued token together with its expiry instant.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signed, time-limited session tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token for the given subject, valid for the configured window.
    fn issue(&self, subject: &str, email: &str, role: &str) -> Result<IssuedToken, AuthError>;

    /// Verify a token and return its claims. Signature failure and expiry
    /// both reject, with distinct variants.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
