//! Emission Feature
//!
//! Fixed-template Spring/Hybris sources for one classified command.
//!
//! ## Structure
//! - `domain/` - EmitRequest, EmissionBundle, Artifact, GenerationError
//! - `infrastructure/` - SourceWriter and one builder per artifact kind

pub mod domain;
pub mod infrastructure;

pub use domain::{Artifact, ArtifactKind, EmissionBundle, EmitRequest, GenerationError};
pub use infrastructure::emit_bundle;
