//! Source file error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Input file does not exist
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// File existed but yielded no usable entries after parsing
    #[error("no usable entries in {0}")]
    NoEntries(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
