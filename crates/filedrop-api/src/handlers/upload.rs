//! File upload handling.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::multipart::{Field, Multipart};
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use filedrop_core::constants::{MAX_UPLOAD_BYTES, UPLOAD_FIELD};
use filedrop_core::{check_upload, generate_internal_name, UploadRecord};
use serde::Serialize;
use std::sync::Arc;

/// Response body for an accepted upload.
///
/// Exposes only what the client sent plus the received size; the internal
/// name, storage path, and timestamp are withheld.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: String,
}

/// `POST /api/fileanalyse`
///
/// Accepts exactly one file in the `upfile` multipart field. The field is
/// read under the size cap, so an oversized upload aborts before the filter
/// ever sees it. After the filter passes, the blob is stored under a fresh
/// internal name and a record is inserted into the history; when the
/// insertion evicts the oldest record, that record's blob is deleted as well.
pub async fn analyse_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut accepted: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        // Non-file fields and other field names are drained and ignored.
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let display_name = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        if accepted.is_some() {
            return Err(ApiError::BadRequest(
                "Multiple file fields are not allowed; send exactly one field named 'upfile'"
                    .to_string(),
            ));
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = read_field_capped(field, MAX_UPLOAD_BYTES).await?;
        accepted = Some((display_name, content_type, data));
    }

    let (display_name, content_type, data) = match accepted {
        Some(parts) => parts,
        None => return Err(ApiError::BadRequest("No file uploaded".to_string())),
    };

    check_upload(&display_name, &content_type)?;

    let internal_name = generate_internal_name();
    let size_bytes = data.len() as u64;

    state.storage.write(&internal_name, data).await?;

    let record = UploadRecord {
        display_name,
        content_type,
        size_bytes,
        internal_name,
        uploaded_at: Utc::now(),
    };
    let response = UploadResponse {
        name: record.display_name.clone(),
        content_type: record.content_type.clone(),
        size: record.human_size(),
    };

    tracing::info!(
        name = %record.display_name,
        internal_name = %record.internal_name,
        size_bytes,
        "Upload accepted"
    );

    let evicted = {
        let mut history = state.history.lock().await;
        history.insert_front(record)
    };

    // Keep the blob set consistent with the history. A failed delete here only
    // orphans a file; the upload that caused the eviction still succeeds.
    if let Some(old) = evicted {
        if let Err(e) = state.storage.delete(&old.internal_name).await {
            tracing::warn!(
                internal_name = %old.internal_name,
                error = %e,
                "Failed to delete evicted upload"
            );
        }
    }

    Ok(Json(response))
}

/// Read a multipart field into memory, aborting as soon as the running total
/// exceeds `max_bytes`.
async fn read_field_capped(mut field: Field<'_>, max_bytes: usize) -> Result<Vec<u8>, ApiError> {
    let mut data = Vec::new();

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read file data: {}", e)))?
    {
        if data.len() + chunk.len() > max_bytes {
            return Err(ApiError::PayloadTooLarge);
        }
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}
