//! Upload records and the bounded in-memory upload history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::constants::{HISTORY_CAPACITY, UPLOAD_URL_PREFIX};

/// Metadata for one stored upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Client-declared filename, shown back to clients but never used on disk.
    pub display_name: String,
    /// Client-declared MIME type, stored verbatim.
    pub content_type: String,
    /// Bytes actually received.
    pub size_bytes: u64,
    /// Server-generated name the blob is stored under; the only deletion key.
    pub internal_name: String,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadRecord {
    /// URL path the stored blob is served from.
    pub fn access_path(&self) -> String {
        format!("{}/{}", UPLOAD_URL_PREFIX, self.internal_name)
    }

    /// Size as shown to clients: `"5 bytes (0.00 MB)"`, MB to two decimals.
    /// Ties round away from zero, so 131072 bytes reads `0.13 MB`.
    pub fn human_size(&self) -> String {
        let mb = self.size_bytes as f64 / (1024.0 * 1024.0);
        format!(
            "{} bytes ({:.2} MB)",
            self.size_bytes,
            (mb * 100.0).round() / 100.0
        )
    }
}

/// Fixed-capacity, newest-first history of accepted uploads.
///
/// Holds at most [`HISTORY_CAPACITY`] records. Not synchronized; callers wrap
/// it in a mutex and hold the guard for each read-modify-write.
#[derive(Debug, Default)]
pub struct UploadHistory {
    records: VecDeque<UploadRecord>,
}

impl UploadHistory {
    pub fn new() -> Self {
        UploadHistory {
            records: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Insert a record at the front.
    ///
    /// When the insertion pushes the history over capacity, the oldest record
    /// is dropped and returned so the caller can delete its blob.
    pub fn insert_front(&mut self, record: UploadRecord) -> Option<UploadRecord> {
        self.records.push_front(record);
        if self.records.len() > HISTORY_CAPACITY {
            self.records.pop_back()
        } else {
            None
        }
    }

    /// Remove every record stored under `internal_name`, returning how many
    /// were removed. Removing an unknown name is a no-op.
    pub fn remove_by_internal_name(&mut self, internal_name: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.internal_name != internal_name);
        before - self.records.len()
    }

    /// Ordered copy of the history, newest first.
    pub fn snapshot(&self) -> Vec<UploadRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
