//! # study-embeddings
//!
//! Local text embedding for the study graph engine.
//!
//! This is the sole place the analysis core touches an embedding model. The
//! contract is deliberately thin: semantically similar strings map to vectors
//! with higher cosine similarity, range roughly [-1, 1]. The model's semantic
//! quality is assumed here, never verified.
//!
//! ## Features
//! - Local inference via Candle (no Python, no API)
//! - all-MiniLM-L6-v2 model (384 dimensions)
//! - Automatic model file caching
//! - Batch embedding, order-preserving, empty-input tolerant
//!
//! The embedder is expensive to load; construct it once and share it via
//! `Arc<dyn TextEmbedder>` rather than reloading per call site.

pub mod cache;
pub mod error;
pub mod minilm;
pub mod model;

pub use cache::{fetch_model_files, ModelCache, ModelPaths, DEFAULT_MODEL_REPO, MODEL_FILES};
pub use error::EmbeddingError;
pub use minilm::MiniLmEmbedder;
pub use model::{similarity_matrix, Embedding, EmbedderInfo, TextEmbedder};
