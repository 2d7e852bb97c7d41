//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, ApiError>`. Domain errors convert
//! into `ApiError` via `From` and render consistently: a status code plus a
//! `{"error": message}` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use filedrop_core::FileRejected;
use filedrop_storage::StorageError;
use serde::Serialize;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Rejected(#[from] FileRejected),

    /// Upload exceeded the per-file size cap. Reported as a 400, not a 413,
    /// with a fixed client message.
    #[error("File too large. Maximum size is 10MB.")]
    PayloadTooLarge,

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Rejected(_) | ApiError::PayloadTooLarge => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client errors are routine; only server errors get the error level,
        // and their detail stays in the log rather than the response body.
        match &self {
            ApiError::Internal(source) => {
                tracing::error!(error = %source, "Request failed");
            }
            other => {
                tracing::debug!(error = %other, "Request rejected");
            }
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(key) => ApiError::NotFound(format!("File not found: {}", key)),
            StorageError::InvalidKey(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_is_400() {
        let err = ApiError::BadRequest("No file uploaded".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No file uploaded");
    }

    #[test]
    fn test_rejected_is_400_with_filter_reason() {
        let err = ApiError::from(FileRejected::Extension {
            extension: "exe".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "File type not allowed: .exe files are blocked for security reasons"
        );
    }

    #[test]
    fn test_payload_too_large_is_400_with_fixed_message() {
        let err = ApiError::PayloadTooLarge;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "File too large. Maximum size is 10MB.");
    }

    #[test]
    fn test_not_found_is_404() {
        let err = ApiError::NotFound("File not found or already deleted".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_is_500_and_hides_detail() {
        let err = ApiError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_storage_write_failure_maps_to_internal() {
        let err = ApiError::from(StorageError::WriteFailed("boom".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_io_error_maps_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ApiError::from(StorageError::from(io));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err = ApiError::from(StorageError::NotFound("abc".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse {
            error: "Invalid filename".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Invalid filename" }));
    }
}
