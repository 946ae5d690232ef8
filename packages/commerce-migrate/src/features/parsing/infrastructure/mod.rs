//! Parsing infrastructure - external dependencies

pub mod tree_sitter;

pub use self::tree_sitter::JavaParser;
