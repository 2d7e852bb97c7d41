//! Test helpers: build state and router for integration tests.
//!
//! Run from workspace root: `cargo test -p filedrop-api`.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use filedrop_api::setup::routes;
use filedrop_api::state::AppState;
use filedrop_storage::{LocalStorage, Storage};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus the owned storage directory.
pub struct TestApp {
    pub server: TestServer,
    storage_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// On-disk path of the blob stored under `internal_name`.
    pub fn blob_path(&self, internal_name: &str) -> PathBuf {
        self.storage_dir.path().join(internal_name)
    }

    /// Number of blobs currently on disk.
    pub fn blob_count(&self) -> usize {
        std::fs::read_dir(self.storage_dir.path())
            .expect("Failed to read storage dir")
            .count()
    }
}

/// Setup test app with isolated local storage.
pub async fn setup_test_app() -> TestApp {
    let storage_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(storage_dir.path())
            .await
            .expect("Failed to create local storage"),
    );

    let state = Arc::new(AppState::new(storage));
    let router = routes::build_router(state, storage_dir.path().to_path_buf());
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        storage_dir,
    }
}

/// Upload `data` as `filename` with `content_type` through the API.
pub async fn upload_file(
    server: &TestServer,
    filename: &str,
    content_type: &str,
    data: Vec<u8>,
) -> TestResponse {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename)
        .mime_type(content_type);
    let form = MultipartForm::new().add_part("upfile", part);
    server.post("/api/fileanalyse").multipart(form).await
}
