//! Filedrop Storage Library
//!
//! This crate provides the blob storage abstraction and the local filesystem
//! backend. Blobs are stored flat under a single directory, keyed by
//! server-generated internal names; keys that look like paths are rejected.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
