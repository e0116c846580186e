//! Fetch error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level HTTP failure; a non-success status is not an error
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Cache directory could not be determined on this platform
    #[error("no cache directory available")]
    NoCacheDir,

    #[error("cache i/o failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configured URL template produced an unparseable URL
    #[error("invalid fetch url: {0}")]
    InvalidUrl(String),
}
