mod artifact_sink;

pub use artifact_sink::ArtifactSink;
