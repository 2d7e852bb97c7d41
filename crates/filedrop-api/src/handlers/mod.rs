//! HTTP request handlers.

pub mod delete;
pub mod health;
pub mod history;
pub mod index;
pub mod upload;
