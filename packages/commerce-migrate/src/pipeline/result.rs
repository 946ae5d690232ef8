//! Conversion outcomes and batch report

use serde::Serialize;
use std::path::PathBuf;

use super::state::StateTrace;
use crate::errors::MigrateError;

pub const SUCCESS_STATUS: &str = "success";

/// Result of one file in a batch
///
/// Serializes as `{"file", "status": "success", "class_name"}` or
/// `{"file", "error"}`. The state trace is kept for callers and logs but is
/// not part of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileOutcome {
    Converted {
        file: String,
        status: &'static str,
        class_name: String,
        #[serde(skip)]
        written: Vec<PathBuf>,
        #[serde(skip)]
        trace: StateTrace,
    },
    Failed {
        file: String,
        error: String,
        #[serde(skip)]
        trace: StateTrace,
    },
}

impl FileOutcome {
    pub fn converted(
        file: impl Into<String>,
        class_name: impl Into<String>,
        written: Vec<PathBuf>,
        trace: StateTrace,
    ) -> Self {
        FileOutcome::Converted {
            file: file.into(),
            status: SUCCESS_STATUS,
            class_name: class_name.into(),
            written,
            trace,
        }
    }

    pub fn failed(file: impl Into<String>, error: &MigrateError, trace: StateTrace) -> Self {
        FileOutcome::Failed {
            file: file.into(),
            error: error.to_string(),
            trace,
        }
    }

    pub fn file(&self) -> &str {
        match self {
            FileOutcome::Converted { file, .. } | FileOutcome::Failed { file, .. } => file,
        }
    }

    /// States the unit went through
    pub fn trace(&self) -> &StateTrace {
        match self {
            FileOutcome::Converted { trace, .. } | FileOutcome::Failed { trace, .. } => trace,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FileOutcome::Failed { error, .. } => Some(error),
            FileOutcome::Converted { .. } => None,
        }
    }
}

/// Aggregate of a directory conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub results: Vec<FileOutcome>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl BatchReport {
    pub fn with_warning(warning: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            warning: Some(warning.into()),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
