//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::routing::{delete, get, post};
use axum::Router;
use filedrop_core::constants::{MAX_UPLOAD_BYTES, UPLOAD_URL_PREFIX};
use std::path::PathBuf;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Server-level concurrency limit to protect against resource exhaustion
/// under extreme load.
const HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Build the application router.
///
/// `serve_root` is the directory stored blobs are served from, mounted
/// read-only under `/uploads`.
pub fn build_router(state: Arc<AppState>, serve_root: PathBuf) -> Router {
    Router::new()
        .route("/", get(handlers::index::index_page))
        .route("/health", get(handlers::health::health_check))
        .route("/api/fileanalyse", post(handlers::upload::analyse_file))
        .route("/api/history", get(handlers::history::list_history))
        .route(
            "/api/delete/{filename}",
            delete(handlers::delete::delete_file),
        )
        .nest_service(UPLOAD_URL_PREFIX, ServeDir::new(serve_root))
        // The upload handler enforces the per-file cap itself so oversized
        // uploads get the fixed JSON message; the request body limit sits
        // above it with headroom and only cuts off grossly larger requests.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES * 2))
        .layer(setup_cors())
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(HTTP_CONCURRENCY_LIMIT))
        .with_state(state)
}

/// Permissive CORS, matching the open demo surface.
fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}
