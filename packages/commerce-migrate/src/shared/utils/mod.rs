//! Utility modules shared across features
//!
//! - `tree_sitter`: Tree-sitter node reading helpers
//! - `naming`: Java identifier checks and casing

pub mod naming;
pub mod tree_sitter;

pub use naming::{capitalize_first, is_java_identifier};
