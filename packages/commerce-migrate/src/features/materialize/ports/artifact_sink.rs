//! Artifact Sink Port
//!
//! Port/Adapter pattern for output targets:
//! - Filesystem writer for the CLI
//! - In-memory sink for tests

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::features::emission::domain::Artifact;

/// Destination for the generated files of one unit
pub trait ArtifactSink: Send + Sync {
    /// Persist every artifact under `dir`, creating it as needed
    ///
    /// All or nothing: on error no file of this call remains.
    fn write_all(&self, dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>>;
}
