//! Upload history listing.

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use filedrop_core::UploadRecord;
use serde::Serialize;
use std::sync::Arc;

/// One history entry as exposed over the API.
///
/// Unlike the upload response this view includes the internal name and the
/// access path, so callers can fetch or delete stored files. A demo-grade
/// surface, unsanitized on purpose.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: String,
    pub filename: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
    pub path: String,
}

impl From<UploadRecord> for HistoryEntry {
    fn from(record: UploadRecord) -> Self {
        let size = record.human_size();
        let path = record.access_path();
        HistoryEntry {
            name: record.display_name,
            content_type: record.content_type,
            size,
            filename: record.internal_name,
            uploaded_at: record.uploaded_at,
            path,
        }
    }
}

/// `GET /api/history`
///
/// Returns every record in the history, newest first. No pagination.
pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryEntry>> {
    let records = state.history.lock().await.snapshot();
    Json(records.into_iter().map(HistoryEntry::from).collect())
}
