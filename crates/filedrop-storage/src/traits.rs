//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends store flat blobs under caller-supplied keys. Keys are bare
/// filenames; anything containing a separator or a `..` sequence is rejected
/// with `InvalidKey` before touching the filesystem.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `key`, replacing any existing blob.
    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Delete the blob stored under `key`.
    ///
    /// Returns `NotFound` when no such blob exists.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether a blob exists under `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}
