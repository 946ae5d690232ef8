//! Configuration System
//!
//! Settings come from three layers, each overriding the previous one:
//! - Defaults
//! - YAML file (schema v1, `version: 1` required)
//! - `COMMERCE_MIGRATE_*` environment variables
//!
//! The CLI applies its flags on top.
//!
//! # Examples
//!
//! ```rust,ignore
//! use commerce_migrate::config::MigrationConfig;
//!
//! let config = MigrationConfig::from_yaml("migrate.yaml")?.with_env_overrides();
//! ```

pub mod error;
pub mod io;
pub mod migration_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use migration_config::{MigrationConfig, ENV_INPUT_DIR, ENV_OUTPUT_DIR};
