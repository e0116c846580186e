//! Embedding error types.

use thiserror::Error;

/// Errors that can occur while loading the model or producing vectors.
///
/// Any of these is fatal for a whole analysis run: partial embeddings would
/// silently corrupt similarity scores, so the caller must never map them to
/// all-zero results.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Candle model error
    #[error("candle error: {0}")]
    Candle(#[from] candle_core::Error),

    /// Tokenizer error
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Model file missing or unreadable
    #[error("model file not found: {0}")]
    ModelNotFound(String),

    /// Download from the model hub failed
    #[error("failed to download model: {0}")]
    Download(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Vectors of mismatched dimension reached a similarity computation
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
