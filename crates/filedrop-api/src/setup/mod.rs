//! Application setup and initialization
//!
//! Initialization logic lives here instead of main.rs so tests can assemble
//! the same router against their own storage.

pub mod routes;
pub mod server;

use crate::state::AppState;
use crate::telemetry;
use anyhow::Result;
use filedrop_core::constants::UPLOAD_DIR;
use filedrop_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app() -> Result<(Arc<AppState>, axum::Router)> {
    // Telemetry first so storage setup is traced
    telemetry::init_tracing();

    let local = LocalStorage::new(UPLOAD_DIR).await?;
    let serve_root = local.root().to_path_buf();
    tracing::info!(upload_dir = %serve_root.display(), "Upload directory ready");

    let storage: Arc<dyn Storage> = Arc::new(local);
    let state = Arc::new(AppState::new(storage));
    let router = routes::build_router(state.clone(), serve_root);

    Ok((state, router))
}
