use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy of the extraction pipeline.
///
/// `FileRead` is recovered at per-file granularity: the file is dropped from
/// the mapping and the batch continues. `OutputWrite` and
/// `MissingSourceDirectory` are fatal.
#[derive(Debug, Error)]
pub enum VertexmapError {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source directory not found: {path}")]
    MissingSourceDirectory { path: PathBuf },
}
