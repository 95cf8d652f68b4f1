//! File upload handlers.

use actix_multipart::form::{MultipartForm, bytes::Bytes as MultipartBytes, text::Text};
use actix_web::{HttpRequest, HttpResponse, web};

use scribe_core::domain::StoredFile;
use scribe_core::validation::ValidationError;

use crate::middleware::auth::Identity;
use crate::middleware::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart payload: one binary part named `file` plus an optional
/// free-text description. The total-size cap is enforced by the
/// `MultipartFormConfig` registered at startup.
#[derive(MultipartForm)]
pub struct UploadForm {
    pub file: Option<MultipartBytes>,
    pub description: Option<Text<String>>,
}

/// POST /v1/files/upload - auth required.
pub async fn upload(
    identity: Identity,
    state: web::Data<AppState>,
    req: HttpRequest,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> ApiResult<HttpResponse> {
    let Some(file) = form.file else {
        return Err(ApiError::Validation(ValidationError::new(
            "No file provided",
        )));
    };

    let original_name = file
        .file_name
        .clone()
        .unwrap_or_else(|| "upload".to_string());
    let mime_type = file
        .content_type
        .as_ref()
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let size = file.data.len() as u64;

    let filename = state.blobs.store(&original_name, &file.data).await?;

    // Publicly reachable URL built from the request's own scheme and host.
    let conn = req.connection_info();
    let url = format!("{}://{}/uploads/{}", conn.scheme(), conn.host(), filename);

    let record = StoredFile::new(
        filename,
        url,
        size,
        mime_type,
        form.description.map(|text| text.0),
    );
    let record = state.files.append(record).await?;

    tracing::info!(file = %record.id, size, uploader = %identity.email, "file uploaded");
    Ok(HttpResponse::Created().json(record))
}
