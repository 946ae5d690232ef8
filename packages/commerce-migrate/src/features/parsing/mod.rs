//! Parsing Feature
//!
//! Responsible for Java parsing and syntax tree traversal.
//!
//! ## Structure
//! - `domain/` - SourceUnit, ParsedTree, SyntaxNode models
//! - `ports/` - Parser trait
//! - `infrastructure/` - tree-sitter backed JavaParser
//! - `visitor` - Tree walker

pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod visitor;

// Re-exports
pub use domain::{ParseError, ParsedTree, SourceUnit, SyntaxKind, SyntaxNode};
pub use infrastructure::JavaParser;
pub use ports::Parser;
pub use visitor::{traverse, TreeNode, Visitor};
