//! Commerce Migrate CLI
//!
//! Converts legacy `ControllerCommand` classes into Spring/Hybris sources.
//!
//! # Usage
//!
//! ```bash
//! # Convert one file, print the generated sources as JSON
//! cargo run --bin commerce-migrate -- convert legacy/OrderCmd.java
//!
//! # Convert a directory
//! cargo run --bin commerce-migrate -- convert-dir --input legacy --output generated --impex
//!
//! # Print a starter configuration
//! cargo run --bin commerce-migrate -- init-config > migrate.yaml
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries JSON only.

use clap::{Parser, Subcommand};
use commerce_migrate::{FsArtifactWriter, MigrateError, MigrationConfig, Migrator};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "commerce-migrate")]
#[command(about = "Convert legacy commerce commands to Spring/Hybris components", long_about = None)]
struct Cli {
    /// YAML configuration file (schema v1)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one source file and print the result
    Convert {
        /// Java source file
        file: PathBuf,
    },

    /// Convert every Java file of a directory
    ConvertDir {
        /// Input directory
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Descend into subdirectories
        #[arg(long)]
        recursive: bool,

        /// Also write the ImpEx bulk-load script
        #[arg(long)]
        impex: bool,

        /// Write all files directly into the output directory
        #[arg(long)]
        flat: bool,
    },

    /// Print the default configuration
    InitConfig,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            println!("{}", json!({ "error": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, MigrateError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert { file } => convert(config, &file),
        Commands::ConvertDir {
            input,
            output,
            recursive,
            impex,
            flat,
        } => {
            let mut config = config;
            if let Some(input) = input {
                config.input_dir = input;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            config.recursive |= recursive;
            config.emit_bulk_load |= impex;
            if flat {
                config.per_class_dirs = false;
            }
            convert_dir(config)
        }
        Commands::InitConfig => {
            print!("{}", MigrationConfig::default().to_yaml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<MigrationConfig, MigrateError> {
    let config = match path {
        Some(path) => MigrationConfig::from_yaml(path)?,
        None => MigrationConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn convert(config: MigrationConfig, file: &Path) -> Result<ExitCode, MigrateError> {
    let source = std::fs::read_to_string(file).map_err(|e| MigrateError::io(file, e))?;
    let migrator = Migrator::new(config);

    match migrator.convert_source(&source, &file.display().to_string()) {
        Ok(conversion) => {
            println!("{}", to_json(&conversion));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!("{} rejected: {}", file.display(), e);
            println!("{}", json!({ "error": e.to_string() }));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn convert_dir(config: MigrationConfig) -> Result<ExitCode, MigrateError> {
    let input_dir = config.input_dir.clone();
    let migrator = Migrator::new(config);
    let report = migrator.convert_directory(&input_dir, &FsArtifactWriter::new())?;
    println!("{}", to_json(&report));
    Ok(ExitCode::SUCCESS)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| json!({ "error": format!("serialization failed: {e}") }).to_string())
}
