/*
 * Commerce Migrate - Legacy command to Spring/Hybris transpiler
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, Location), constants, utilities
 * - features/    : Vertical slices (parsing → classification → emission → materialize)
 * - pipeline/    : Per-unit state machine, batch orchestration
 * - config/      : YAML configuration
 *
 * Processing is single-threaded: one unit is parsed, classified, emitted
 * and written before the next begins.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, MigrationConfig};
pub use errors::{MigrateError, Result};
pub use features::classification::{ClassFacts, UsePattern};
pub use features::emission::{ArtifactKind, EmissionBundle, EmitRequest};
pub use features::materialize::{ArtifactSink, FsArtifactWriter, MemoryArtifactSink};
pub use features::parsing::{JavaParser, ParseError, Parser};
pub use pipeline::{BatchReport, Conversion, FileOutcome, Migrator, PipelineState};
