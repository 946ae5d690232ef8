//! Pipeline orchestration
//!
//! One unit flows parse -> classify -> emit -> write exactly once. Batches
//! isolate failures per file and aggregate a report.

pub mod discovery;
pub mod migrator;
pub mod result;
pub mod state;

pub use discovery::discover_sources;
pub use migrator::{Conversion, Migrator};
pub use result::{BatchReport, FileOutcome};
pub use state::{PipelineState, StateTrace};
