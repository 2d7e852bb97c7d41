//! Health check handler.

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// `GET /health` - liveness probe with the current history size.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let history_len = state.history.lock().await.len();

    Json(serde_json::json!({
        "status": "ok",
        "history_len": history_len,
    }))
}
