//! Configuration I/O (YAML schema)
//!
//! Defines the on-disk shape only. Loading and defaults live in
//! migration_config.rs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// YAML Schema v1
///
/// Every setting is optional; absent keys keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Descend into subdirectories of `input_dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,

    /// One output directory per class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_class_dirs: Option<bool>,

    /// Also write `<Class>.impex`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emit_bulk_load: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_package: Option<String>,
}
