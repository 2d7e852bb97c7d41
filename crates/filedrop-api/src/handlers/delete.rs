//! Stored file deletion.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use filedrop_core::is_safe_internal_name;
use serde::Serialize;
use std::sync::Arc;

/// Response body for a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: String,
}

/// `DELETE /api/delete/{filename}`
///
/// `filename` must be an internal name from the history. The blob is deleted
/// first and history records are removed only after that succeeds, so a failed
/// delete leaves the record visible. Any delete failure, missing blob
/// included, reads as not-found to the caller.
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !is_safe_internal_name(&filename) {
        return Err(ApiError::BadRequest("Invalid filename".to_string()));
    }

    if let Err(e) = state.storage.delete(&filename).await {
        tracing::debug!(filename = %filename, error = %e, "Delete failed");
        return Err(ApiError::NotFound(
            "File not found or already deleted".to_string(),
        ));
    }

    let removed = {
        let mut history = state.history.lock().await;
        history.remove_by_internal_name(&filename)
    };

    tracing::info!(filename = %filename, records_removed = removed, "File deleted");

    Ok(Json(DeleteResponse {
        success: true,
        deleted: filename,
    }))
}
