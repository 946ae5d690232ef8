//! Parser port (interface)
//!
//! Defines the contract for parsing legacy source code.

use crate::features::parsing::domain::{ParseError, ParsedTree};

/// Parser trait - abstraction over the parsing implementation
pub trait Parser: Send + Sync {
    /// Parse source code into a ParsedTree
    ///
    /// Fails with the location of the first syntax error.
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree, ParseError>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
