//! Effective migration settings
//!
//! Precedence, lowest first: defaults, YAML file, environment, CLI flags.

use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigFileV1;
use crate::shared::constants::output;
use crate::shared::utils::is_java_identifier;

pub const SUPPORTED_VERSIONS: [u32; 1] = [1];

pub const ENV_INPUT_DIR: &str = "COMMERCE_MIGRATE_INPUT_DIR";
pub const ENV_OUTPUT_DIR: &str = "COMMERCE_MIGRATE_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub recursive: bool,
    pub per_class_dirs: bool,
    pub emit_bulk_load: bool,
    pub base_package: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            recursive: false,
            per_class_dirs: true,
            emit_bulk_load: false,
            base_package: output::DEFAULT_BASE_PACKAGE.to_string(),
        }
    }
}

impl MigrationConfig {
    /// Load from a YAML file (schema v1)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        // Version check
        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let defaults = Self::default();
        let config = Self {
            input_dir: file.input_dir.unwrap_or(defaults.input_dir),
            output_dir: file.output_dir.unwrap_or(defaults.output_dir),
            recursive: file.recursive.unwrap_or(defaults.recursive),
            per_class_dirs: file.per_class_dirs.unwrap_or(defaults.per_class_dirs),
            emit_bulk_load: file.emit_bulk_load.unwrap_or(defaults.emit_bulk_load),
            base_package: file.base_package.unwrap_or(defaults.base_package),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply `COMMERCE_MIGRATE_*` variables from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ENV_INPUT_DIR).filter(|v| !v.is_empty()) {
            tracing::debug!("{} overrides input_dir", ENV_INPUT_DIR);
            self.input_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
            tracing::debug!("{} overrides output_dir", ENV_OUTPUT_DIR);
            self.output_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid("output_dir", "must not be empty"));
        }
        if let Some(segment) = self
            .base_package
            .split('.')
            .find(|s| !is_java_identifier(s))
        {
            return Err(ConfigError::invalid(
                "base_package",
                format!("segment `{segment}` is not a Java identifier"),
            ));
        }
        Ok(())
    }

    /// Serialize the effective configuration as schema v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(SUPPORTED_VERSIONS[0]),
            input_dir: Some(self.input_dir.clone()),
            output_dir: Some(self.output_dir.clone()),
            recursive: Some(self.recursive),
            per_class_dirs: Some(self.per_class_dirs),
            emit_bulk_load: Some(self.emit_bulk_load),
            base_package: Some(self.base_package.clone()),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn recursive(mut self, enabled: bool) -> Self {
        self.recursive = enabled;
        self
    }

    pub fn per_class_dirs(mut self, enabled: bool) -> Self {
        self.per_class_dirs = enabled;
        self
    }

    pub fn emit_bulk_load(mut self, enabled: bool) -> Self {
        self.emit_bulk_load = enabled;
        self
    }
}
