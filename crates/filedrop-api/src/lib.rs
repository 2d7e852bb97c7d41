//! Filedrop API Library
//!
//! This crate provides the HTTP handlers, error mapping, and application setup.

// Module declarations
mod handlers;
mod telemetry;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;
