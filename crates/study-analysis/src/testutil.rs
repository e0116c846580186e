//! Deterministic stub embedder for engine and scorer tests.

use std::collections::HashMap;

use study_embeddings::{Embedding, EmbedderInfo, EmbeddingError, TextEmbedder};

/// Embedder backed by a fixed text-to-vector table.
///
/// Unknown texts produce an error, which doubles as a way to exercise the
/// embedding-failure propagation path.
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    info: EmbedderInfo,
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self {
            vectors: HashMap::new(),
            info: EmbedderInfo {
                name: "stub".to_string(),
                dimension: 3,
                max_sequence_length: 512,
            },
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

impl TextEmbedder for StubEmbedder {
    fn info(&self) -> &EmbedderInfo {
        &self.info
    }

    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.vectors
            .get(text)
            .map(|v| Embedding::new(v.clone()))
            .ok_or_else(|| EmbeddingError::ModelNotFound(format!("no stub vector for '{text}'")))
    }
}
