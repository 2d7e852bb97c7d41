//! Filedrop Core Library
//!
//! This crate provides the domain types and policy shared across all filedrop
//! components: configuration, the upload filter, internal storage names, and
//! the bounded upload history.

pub mod config;
pub mod constants;
pub mod filter;
pub mod history;
pub mod names;

// Re-export commonly used types
pub use config::Config;
pub use filter::{check_upload, FileRejected};
pub use history::{UploadHistory, UploadRecord};
pub use names::{generate_internal_name, is_safe_internal_name};
