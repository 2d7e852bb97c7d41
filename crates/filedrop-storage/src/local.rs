use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use filedrop_core::is_safe_internal_name;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Every blob is a single file directly under the base directory.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating the base directory if it
    /// does not exist yet.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Root directory blobs are stored under.
    pub fn root(&self) -> &Path {
        &self.base_path
    }

    /// Convert a storage key to a filesystem path with security validation.
    ///
    /// Keys must be bare filenames. Separators and `..` sequences are rejected
    /// so a key can never resolve outside the base directory.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if !is_safe_internal_name(key) {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(key))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        let size = data.len();
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage write successful"
        );

        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        let start = std::time::Instant::now();

        // Deleting a blob that is not there must be distinguishable from other
        // failures; the API maps NotFound to a 404.
        fs::remove_file(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
            _ => StorageError::DeleteFailed(format!(
                "Failed to delete file {}: {}",
                path.display(),
                e
            )),
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage delete successful"
        );

        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(fs::try_exists(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_then_exists() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage.write("blob1", b"test data".to_vec()).await.unwrap();

        assert!(storage.exists("blob1").await.unwrap());
        assert!(!storage.exists("blob2").await.unwrap());

        let on_disk = std::fs::read(dir.path().join("blob1")).unwrap();
        assert_eq!(on_disk, b"test data");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_blob() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage.write("blob", b"old".to_vec()).await.unwrap();
        storage.write("blob", b"new".to_vec()).await.unwrap();

        let on_disk = std::fs::read(dir.path().join("blob")).unwrap();
        assert_eq!(on_disk, b"new");
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage.write("blob", b"data".to_vec()).await.unwrap();
        storage.delete("blob").await.unwrap();

        assert!(!storage.exists("blob").await.unwrap());
        assert!(!dir.path().join("blob").exists());
    }

    #[tokio::test]
    async fn test_delete_missing_blob_is_not_found() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let result = storage.delete("nonexistent").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_exists_propagates_io_errors() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        // A NUL byte passes the key check but the OS rejects the path, so the
        // failure must surface instead of reading as absent.
        let result = storage.exists("bad\0name").await;
        assert!(matches!(result, Err(StorageError::IoError(_))));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let result = storage.write("../escape", b"data".to_vec()).await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.delete("../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.exists("/etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.delete("..\\windows").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_new_creates_base_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let storage = LocalStorage::new(&nested).await.unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.root(), nested.as_path());
    }
}
