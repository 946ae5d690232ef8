//! Filesystem artifact writer
//!
//! A failed unit leaves the tree as it found it: files and directories
//! created by the failing call are removed, files that already existed are
//! left in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{MigrateError, Result};
use crate::features::emission::domain::Artifact;
use crate::features::materialize::ports::ArtifactSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactWriter;

impl FsArtifactWriter {
    pub fn new() -> Self {
        Self
    }

    /// Directories `create_dir_all(dir)` will create, deepest first
    fn missing_dirs(dir: &Path) -> Vec<PathBuf> {
        dir.ancestors()
            .take_while(|d| !d.as_os_str().is_empty() && !d.exists())
            .map(Path::to_path_buf)
            .collect()
    }

    fn rollback(created_files: &[PathBuf], created_dirs: &[PathBuf]) {
        for path in created_files.iter().rev() {
            if let Err(e) = fs::remove_file(path) {
                tracing::warn!("rollback could not remove {}: {}", path.display(), e);
            }
        }
        for dir in created_dirs {
            if let Err(e) = fs::remove_dir(dir) {
                tracing::warn!("rollback could not remove {}: {}", dir.display(), e);
            }
        }
    }
}

impl ArtifactSink for FsArtifactWriter {
    fn write_all(&self, dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
        let created_dirs = Self::missing_dirs(dir);
        if let Err(e) = fs::create_dir_all(dir) {
            Self::rollback(&[], &created_dirs);
            return Err(MigrateError::io(dir, e));
        }

        let mut written = Vec::with_capacity(artifacts.len());
        let mut created_files = Vec::new();
        for artifact in artifacts {
            let path = dir.join(&artifact.file_name);
            let existed = path.exists();
            if let Err(e) = fs::write(&path, &artifact.content) {
                tracing::error!("failed to write {}: {}", path.display(), e);
                Self::rollback(&created_files, &created_dirs);
                return Err(MigrateError::io(path, e));
            }
            tracing::debug!("wrote {} ({} bytes)", path.display(), artifact.content.len());
            if !existed {
                created_files.push(path.clone());
            }
            written.push(path);
        }
        Ok(written)
    }
}
