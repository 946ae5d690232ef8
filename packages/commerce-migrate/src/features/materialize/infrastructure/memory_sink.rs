//! In-Memory Artifact Sink (for testing)
//!
//! Records every write keyed by path. Nothing touches the disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::Result;
use crate::features::emission::domain::Artifact;
use crate::features::materialize::ports::ArtifactSink;

#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactSink {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl MemoryArtifactSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn files(&self) -> MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files().get(path.as_ref()).cloned()
    }

    pub fn len(&self) -> usize {
        self.files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files().is_empty()
    }
}

impl ArtifactSink for MemoryArtifactSink {
    fn write_all(&self, dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
        let mut files = self.files();
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = dir.join(&artifact.file_name);
            files.insert(path.clone(), artifact.content.clone());
            written.push(path);
        }
        Ok(written)
    }
}
