//! Error types for commerce-migrate
//!
//! Provides unified error handling across the crate. Every variant is
//! terminal for the unit being converted; the batch layer turns them into
//! report entries.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::features::emission::domain::GenerationError;
use crate::features::parsing::domain::ParseError;
use crate::shared::constants::command;

/// Main error type for migration operations
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Source is not valid Java
    #[error("Invalid Java code: {0}")]
    Syntax(#[from] ParseError),

    /// Parsed unit contains no class declaration
    #[error("No class found in source")]
    NoClass,

    /// Class is outside the command family
    #[error(
        "Class {class_name} does not extend {} or implement {}",
        command::BASE_CLASS,
        command::INTERFACE
    )]
    NotCommand { class_name: String },

    /// Template synthesis failed
    #[error("Conversion failed: {0}")]
    Generation(#[from] GenerationError),

    /// Reading a source or writing an artifact failed
    #[error("File processing failed: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MigrateError {
    /// Create an IO error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MigrateError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a not-a-command rejection
    pub fn not_command(class_name: impl Into<String>) -> Self {
        MigrateError::NotCommand {
            class_name: class_name.into(),
        }
    }

    /// Short category name used in log fields
    pub fn category(&self) -> &'static str {
        match self {
            MigrateError::Syntax(_) => "syntax",
            MigrateError::NoClass | MigrateError::NotCommand { .. } => "classification",
            MigrateError::Generation(_) => "generation",
            MigrateError::Io { .. } => "io",
            MigrateError::Config(_) => "config",
        }
    }
}

/// Result type alias for migration operations
pub type Result<T> = std::result::Result<T, MigrateError>;
