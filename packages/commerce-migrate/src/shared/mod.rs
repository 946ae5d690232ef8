//! Shared module - Common types and utilities
//!
//! Types shared across all features: source locations, the fixed
//! identifiers the classifier keys on, naming and tree-sitter helpers.

pub mod constants;
pub mod models;
pub mod utils;

pub use models::*;
