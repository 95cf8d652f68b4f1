//! Authentication handlers.

use actix_web::{HttpResponse, web};

use scribe_core::validation::validate_login;
use scribe_shared::dto::{LoginRequest, LoginResponse, UserPublic};

use crate::middleware::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /v1/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();
    let email = req.email.as_deref().unwrap_or("");
    let password = req.password.as_deref().unwrap_or("");
    validate_login(email, password)?;

    // Unknown email and wrong password are indistinguishable to the caller.
    let user = state
        .users
        .find_by_email(email)
        .await
        .ok_or(ApiError::InvalidCredentials)?;

    let valid = state
        .passwords
        .verify(password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    let issued = state
        .tokens
        .issue(&user.id, &user.email, &user.role)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(user = %user.id, "login succeeded");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: issued.token,
        user: UserPublic::from(&user),
        expires_at: issued.expires_at,
    }))
}
