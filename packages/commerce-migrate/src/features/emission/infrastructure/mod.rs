//! Template emission infrastructure

mod emitter;
mod source_writer;
pub mod templates;
mod validate;

pub use emitter::emit_bundle;
pub use source_writer::SourceWriter;
