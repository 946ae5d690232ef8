mod fs_writer;
mod memory_sink;

pub use fs_writer::FsArtifactWriter;
pub use memory_sink::MemoryArtifactSink;
