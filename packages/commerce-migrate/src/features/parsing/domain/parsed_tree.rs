//! Parsed tree representation
//!
//! A `SourceUnit` is read once at ingestion and handed to the parser; the
//! resulting `ParsedTree` is never mutated afterwards.

use super::syntax_node::SyntaxNode;
use crate::shared::models::Location;
use thiserror::Error;

/// Source text plus the identity of the file it came from
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub origin: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }
}

/// Parsed syntax tree
#[derive(Debug)]
pub struct ParsedTree {
    /// Root node of the tree
    pub root: SyntaxNode,

    /// File path (for log messages)
    pub file_path: String,
}

/// Syntax error with the location of the first offending node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {location}")]
pub struct ParseError {
    pub message: String,
    pub location: Location,
}

impl ParseError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

impl ParsedTree {
    pub fn new(root: SyntaxNode, file_path: impl Into<String>) -> Self {
        Self {
            root,
            file_path: file_path.into(),
        }
    }
}
