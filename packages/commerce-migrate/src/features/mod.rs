//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure models (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - infrastructure/ - External dependency implementations

pub mod parsing;

// Command-family rule and facade detection
pub mod classification;

// Fixed-template Spring/Hybris sources
pub mod emission;

// Artifact output
pub mod materialize;
