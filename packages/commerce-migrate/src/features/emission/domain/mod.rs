//! Emission domain models

mod artifact;
mod error;
mod request;

pub use artifact::{Artifact, ArtifactKind, EmissionBundle};
pub use error::GenerationError;
pub use request::EmitRequest;
