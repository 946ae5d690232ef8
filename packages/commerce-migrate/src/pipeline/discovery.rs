//! Source file discovery

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::{MigrateError, Result};
use crate::features::parsing::Parser;

/// Sources under `dir` that `parser` accepts, sorted by name
///
/// Only the top level is searched unless `recursive` is set. Unreadable
/// entries below the root are skipped.
pub fn discover_sources(dir: &Path, recursive: bool, parser: &dyn Parser) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(MigrateError::io(
            dir,
            io::Error::new(io::ErrorKind::NotFound, "input directory does not exist"),
        ));
    }
    if !dir.is_dir() {
        return Err(MigrateError::io(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "input path is not a directory"),
        ));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_source_for(entry.path(), parser) {
            sources.push(entry.into_path());
        }
    }

    tracing::info!(
        "found {} {} files in {}",
        sources.len(),
        parser.language_name(),
        dir.display()
    );
    Ok(sources)
}

fn is_source_for(path: &Path, parser: &dyn Parser) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| parser.supports_extension(e))
        .unwrap_or(false)
}
