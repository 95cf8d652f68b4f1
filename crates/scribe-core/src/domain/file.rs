use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata record for an uploaded binary. The content itself lives in the
/// blob store; this record only points at it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Time-based id (`file_{unix millis}`); not unique across processes.
    pub id: String,
    /// Stored filename as reported by the blob store.
    pub filename: String,
    /// Publicly reachable URL for the stored content.
    pub url: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type as reported by the client; not validated against content.
    pub mime_type: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl StoredFile {
    pub fn new(
        filename: String,
        url: String,
        size: u64,
        mime_type: String,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: format!("file_{}", now.timestamp_millis()),
            filename,
            url,
            size,
            mime_type,
            description,
            uploaded_at: now,
        }
    }
}
