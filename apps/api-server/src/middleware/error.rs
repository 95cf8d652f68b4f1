//! The application error taxonomy and its single mapping onto the wire
//! error shape `{error, message, timestamp, details?}`.

use std::fmt;

use actix_multipart::MultipartError;
use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};

use scribe_core::StoreError;
use scribe_core::ports::BlobError;
use scribe_core::validation::ValidationError;
use scribe_shared::ErrorBody;

/// Application-level failure taxonomy. Every failure path is expressed as
/// one of these values; handlers never build error JSON ad hoc.
#[derive(Debug)]
pub enum ApiError {
    /// 400 - structural or semantic validation failure.
    Validation(ValidationError),
    /// 401 - no credential material presented.
    Unauthorized(String),
    /// 401 - login with an unknown email or wrong password.
    InvalidCredentials,
    /// 403 - credential present but invalid or expired.
    Forbidden(String),
    /// 409 - uniqueness violation.
    Conflict(String),
    /// 404 - unresolved id or route.
    NotFound(String),
    /// 500 - unexpected fault; logged server-side, opaque to the caller.
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(err) => write!(f, "Validation failed: {err}"),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            ApiError::InvalidCredentials => write!(f, "Invalid credentials"),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            ApiError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(err) => {
                let mut body = ErrorBody::validation(err.message.clone());
                if let Some(details) = &err.details {
                    if let Ok(value) = serde_json::to_value(details) {
                        body = body.with_details(value);
                    }
                }
                body
            }
            ApiError::Unauthorized(msg) => ErrorBody::unauthorized(msg.clone()),
            ApiError::InvalidCredentials => ErrorBody::invalid_credentials(),
            ApiError::Forbidden(msg) => ErrorBody::forbidden(msg.clone()),
            ApiError::Conflict(msg) => ErrorBody::conflict(msg.clone()),
            ApiError::NotFound(msg) => ErrorBody::not_found(msg.clone()),
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                ErrorBody::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(msg) => ApiError::Conflict(msg),
        }
    }
}

impl From<BlobError> for ApiError {
    fn from(err: BlobError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Map JSON body extraction failures onto the validation wire shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(ValidationError::new(format!("Invalid JSON body: {err}"))).into()
}

/// Map multipart extraction failures (including the size cap) onto the
/// validation wire shape.
pub fn multipart_error_handler(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(ValidationError::new(format!(
        "Invalid multipart payload: {err}"
    )))
    .into()
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
