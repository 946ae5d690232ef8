//! Migration orchestrator
//!
//! Runs parse, extract, classify, detect and emit for one unit, then hands
//! the bundle to an `ArtifactSink`. Units are independent: nothing is shared
//! between two conversions except the configuration.

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

use super::discovery::discover_sources;
use super::result::{BatchReport, FileOutcome};
use super::state::{PipelineState, StateTrace};
use crate::config::MigrationConfig;
use crate::errors::{MigrateError, Result};
use crate::features::classification::{detect_entry_pattern, extract_facts, UsePattern};
use crate::features::emission::{emit_bundle, EmissionBundle, EmitRequest};
use crate::features::materialize::ArtifactSink;
use crate::features::parsing::{JavaParser, Parser, SourceUnit};
use crate::shared::constants::output;

/// Generated sources for one accepted class
#[derive(Debug, Clone)]
pub struct Conversion {
    pub class_name: String,
    pub use_pattern: UsePattern,
    pub use_orchestration: bool,
    pub bundle: EmissionBundle,
    pub trace: StateTrace,
}

#[derive(Serialize)]
struct ConversionView<'a> {
    input_type: &'static str,
    class_name: &'a str,
    spring_controller: &'a str,
    spring_facade: &'a str,
    spring_service: &'a str,
    spring_config: String,
    impex: &'a str,
}

impl Serialize for Conversion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ConversionView {
            input_type: output::INPUT_TYPE,
            class_name: &self.class_name,
            spring_controller: &self.bundle.controller,
            spring_facade: self.bundle.facade.as_deref().unwrap_or(""),
            spring_service: &self.bundle.service,
            spring_config: self.bundle.config(),
            impex: &self.bundle.bulk_load,
        }
        .serialize(serializer)
    }
}

pub struct Migrator {
    config: MigrationConfig,
    parser: Box<dyn Parser>,
}

impl Migrator {
    pub fn new(config: MigrationConfig) -> Self {
        Self::with_parser(config, Box::new(JavaParser::new()))
    }

    pub fn with_parser(config: MigrationConfig, parser: Box<dyn Parser>) -> Self {
        Self { config, parser }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Convert source text without touching the filesystem
    pub fn convert_source(&self, source: &str, origin: &str) -> Result<Conversion> {
        let mut trace = StateTrace::new(origin);
        self.convert_unit(&SourceUnit::new(origin, source), &mut trace)
    }

    /// Convert one unit, recording every state it reaches in `trace`
    ///
    /// On failure `trace` ends in `Rejected`.
    pub fn convert_unit(&self, unit: &SourceUnit, trace: &mut StateTrace) -> Result<Conversion> {
        self.run(unit, trace).map_err(|e| {
            trace.reject();
            tracing::trace!("{}: {:?}", unit.origin, trace.states());
            e
        })
    }

    fn run(&self, unit: &SourceUnit, trace: &mut StateTrace) -> Result<Conversion> {
        let tree = match self.parser.parse(&unit.text, &unit.origin) {
            Ok(tree) => {
                trace.advance(PipelineState::ParseOk);
                tree
            }
            Err(e) => {
                trace.advance(PipelineState::ParseFailed);
                return Err(e.into());
            }
        };

        let Some(facts) = extract_facts(&tree) else {
            trace.advance(PipelineState::NoClass);
            return Err(MigrateError::NoClass);
        };
        trace.advance(PipelineState::ClassFound);

        if !facts.is_command_family {
            return Err(MigrateError::not_command(&facts.class_name));
        }

        let use_pattern = detect_entry_pattern(&facts);
        let use_orchestration = use_pattern.needs_orchestration();
        trace.advance(PipelineState::Classified);
        tracing::debug!(
            "{}: conditional={} response_writes={} context={} -> facade={}",
            facts.class_name,
            use_pattern.has_conditional,
            use_pattern.response_write_count,
            use_pattern.uses_execution_context,
            use_orchestration
        );

        let request = EmitRequest::from_facts(&facts, use_orchestration)
            .with_base_package(self.config.base_package.clone());
        let bundle = emit_bundle(&request)?;
        trace.advance(PipelineState::Emitted);

        Ok(Conversion {
            class_name: facts.class_name,
            use_pattern,
            use_orchestration,
            bundle,
            trace: trace.clone(),
        })
    }

    /// Directory receiving the artifacts of `class_name`
    pub fn output_dir_for(&self, class_name: &str) -> PathBuf {
        if self.config.per_class_dirs {
            self.config.output_dir.join(class_name)
        } else {
            self.config.output_dir.clone()
        }
    }

    /// Write a conversion through `sink`
    pub fn materialize(&self, conversion: &mut Conversion, sink: &dyn ArtifactSink) -> Result<Vec<PathBuf>> {
        let dir = self.output_dir_for(&conversion.class_name);
        let artifacts = conversion.bundle.artifacts(self.config.emit_bulk_load);
        match sink.write_all(&dir, &artifacts) {
            Ok(paths) => {
                conversion.trace.advance(PipelineState::Written);
                Ok(paths)
            }
            Err(e) => {
                conversion.trace.reject();
                Err(e)
            }
        }
    }

    /// Read, convert and write one file; never fails, errors become the outcome
    pub fn convert_file(&self, path: &Path, sink: &dyn ArtifactSink) -> FileOutcome {
        let file = path.display().to_string();
        tracing::info!("processing {}", file);
        let mut trace = StateTrace::new(&file);

        let converted = match std::fs::read_to_string(path) {
            Ok(source) => self.convert_unit(&SourceUnit::new(file.as_str(), source), &mut trace),
            Err(e) => {
                trace.reject();
                Err(MigrateError::io(path, e))
            }
        };
        let result = converted.and_then(|mut conversion| {
            let written = self.materialize(&mut conversion, sink);
            trace = conversion.trace;
            written.map(|paths| (conversion.class_name, paths))
        });

        match result {
            Ok((class_name, written)) => {
                tracing::info!("converted {} -> {} ({} files)", file, class_name, written.len());
                FileOutcome::converted(file, class_name, written, trace)
            }
            Err(e) => {
                log_rejection(&file, &e);
                FileOutcome::failed(file, &e, trace)
            }
        }
    }

    /// Convert every Java source in `input_dir`
    ///
    /// Fails only when `input_dir` itself is unusable; per-file failures are
    /// entries of the report.
    pub fn convert_directory(&self, input_dir: &Path, sink: &dyn ArtifactSink) -> Result<BatchReport> {
        let sources = discover_sources(input_dir, self.config.recursive, self.parser.as_ref()).map_err(|e| {
            tracing::error!("{}", e);
            e
        })?;

        if sources.is_empty() {
            let warning = format!("No Java files found in {}", input_dir.display());
            tracing::warn!("{}", warning);
            return Ok(BatchReport::with_warning(warning));
        }

        let results: Vec<FileOutcome> = sources
            .iter()
            .map(|path| self.convert_file(path, sink))
            .collect();
        let report = BatchReport {
            results,
            warning: None,
        };
        tracing::info!(
            "batch finished: {} converted, {} failed",
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }
}

fn log_rejection(file: &str, err: &MigrateError) {
    match err {
        MigrateError::Syntax(_) | MigrateError::NoClass | MigrateError::NotCommand { .. } => {
            tracing::warn!("rejected {} ({}): {}", file, err.category(), err)
        }
        _ => tracing::error!("failed {} ({}): {}", file, err.category(), err),
    }
}
