//! Application-wide constants.

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Maximum number of records kept in the upload history.
pub const HISTORY_CAPACITY: usize = 50;

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "upfile";

/// Directory uploaded blobs are written to, relative to the working directory.
pub const UPLOAD_DIR: &str = "uploads";

/// URL prefix under which stored blobs are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";
