//! Materialize Feature
//!
//! Writes emitted artifacts to their destination.
//!
//! ## Structure
//! - `ports/` - ArtifactSink trait
//! - `infrastructure/` - filesystem writer, in-memory sink

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{FsArtifactWriter, MemoryArtifactSink};
pub use ports::ArtifactSink;
