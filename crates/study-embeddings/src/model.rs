//! Embedder trait, embedding vector type, and similarity matrix helpers.

use crate::error::EmbeddingError;

/// A fixed-length embedding vector, unit-normalized on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    values: Vec<f32>,
}

impl Embedding {
    /// Create an embedding, normalizing to unit length.
    ///
    /// A zero vector stays zero rather than dividing by zero.
    pub fn new(values: Vec<f32>) -> Self {
        let norm: f32 = values.iter().map(|x| x * x).sum::<f32>().sqrt();
        let values = if norm > 0.0 {
            values.iter().map(|x| x / norm).collect()
        } else {
            values
        };
        Self { values }
    }

    /// Wrap a vector that is already unit-normalized.
    pub fn from_normalized(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Cosine similarity with another embedding, in [-1, 1].
    ///
    /// Both vectors are unit length, so this is just the dot product.
    /// Mismatched dimensions yield 0 rather than panicking.
    pub fn cosine_similarity(&self, other: &Embedding) -> f32 {
        if self.values.len() != other.values.len() {
            return 0.0;
        }
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum()
    }
}

/// Static information about a loaded embedder.
#[derive(Debug, Clone)]
pub struct EmbedderInfo {
    /// Model name, e.g. "all-MiniLM-L6-v2"
    pub name: String,
    /// Embedding dimension
    pub dimension: usize,
    /// Maximum sequence length in tokens
    pub max_sequence_length: usize,
}

/// Strings in, one vector per string out.
///
/// Implementations must preserve input order, be deterministic for a fixed
/// model version, return empty output for empty input, and be `Send + Sync`
/// so one instance can serve concurrent analysis runs.
pub trait TextEmbedder: Send + Sync {
    /// Model information.
    fn info(&self) -> &EmbedderInfo;

    /// Embed a single text.
    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;

    /// Embed a batch of texts, order-preserving.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Embed a batch of owned strings.
    fn embed_texts(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbeddingError> {
        let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        self.embed_batch(&refs)
    }
}

/// Pairwise cosine similarity matrix: `result[i][j]` compares `a[i]` with
/// `b[j]`.
///
/// Empty inputs produce an empty matrix, never an error.
pub fn similarity_matrix(a: &[Embedding], b: &[Embedding]) -> Vec<Vec<f32>> {
    a.iter()
        .map(|row| b.iter().map(|col| row.cosine_similarity(col)).collect())
        .collect()
}
