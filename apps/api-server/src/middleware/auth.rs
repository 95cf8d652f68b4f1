//! The access gate: bearer-token extraction and verification.
//!
//! Applied per route by taking `Identity` as a handler argument. A missing
//! header rejects with 401; a present-but-unverifiable token with 403.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use scribe_core::ports::TokenClaims;

use crate::middleware::error::ApiError;
use crate::state::AppState;

/// Verified identity attached to a request by the access gate.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Subject user id from the token claims.
    pub subject: String,
    pub email: String,
    pub role: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            subject: claims.subject,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl FromRequest for Identity {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Identity, ApiError> {
    let state = match req.app_data::<web::Data<AppState>>() {
        Some(state) => state,
        None => {
            tracing::error!("AppState not found in app data");
            return Err(ApiError::Internal("server configuration error".to_string()));
        }
    };

    // The credential is the second whitespace-separated segment of the
    // Authorization header ("Bearer <token>"). A header without one counts
    // as no credential at all.
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.split_whitespace().nth(1));

    let token = match token {
        None | Some(None) => {
            return Err(ApiError::Unauthorized("Access token required".to_string()));
        }
        Some(Some(token)) => token,
    };

    match state.tokens.verify(token) {
        Ok(claims) => {
            let identity = Identity::from(claims);
            tracing::debug!(subject = %identity.subject, role = %identity.role, "request authenticated");
            Ok(identity)
        }
        Err(err) => {
            tracing::debug!("token rejected: {err}");
            Err(ApiError::Forbidden("Invalid or expired token".to_string()))
        }
    }
}
