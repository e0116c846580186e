//! Analysis error types.

use thiserror::Error;

use study_embeddings::EmbeddingError;

/// Errors that abort an analysis run.
///
/// Fatal conditions return a structured failure instead of empty or
/// defaulted data that would masquerade as a successful-but-uninteresting
/// result. Non-fatal conditions (insufficient content, no question bank)
/// travel as metadata on the report instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Topic list empty or absent
    #[error("no topics provided")]
    MissingInput,

    /// Malformed input, e.g. duplicate topic labels
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The embedding provider could not produce vectors.
    ///
    /// Fatal for graph and importance alike; never mapped to all-zero
    /// scores, which would be indistinguishable from "no matches".
    #[error("embedding provider failure: {0}")]
    Embedding(#[from] EmbeddingError),
}
