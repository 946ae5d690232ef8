use thiserror::Error;

/// Emission fault, only raised on malformed facts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid class name `{0}`")]
    InvalidClassName(String),

    #[error("invalid field name `{name}` at position {index}")]
    InvalidFieldName { index: usize, name: String },

    #[error("invalid base package `{0}`")]
    InvalidPackage(String),
}
