//! Shared application state.

use filedrop_core::UploadHistory;
use filedrop_storage::Storage;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state shared by all handlers.
pub struct AppState {
    /// Bounded upload history. The mutex is the single mutual-exclusion
    /// boundary for every read-modify-write on the records; it is never held
    /// across storage I/O.
    pub history: Mutex<UploadHistory>,
    /// Blob storage backend.
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        AppState {
            history: Mutex::new(UploadHistory::new()),
            storage,
        }
    }
}
