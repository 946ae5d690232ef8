//! Tree-sitter based parser implementation

mod parser;

pub use parser::JavaParser;
