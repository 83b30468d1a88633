//! Shared module - Common types
//!
//! Types shared across features. No tree-sitter dependency lives here.

pub mod models;

pub use models::*;
