//! Relation graph construction from topic content.
//!
//! Similarity is computed over the full content text of each topic, not the
//! label: academic topic titles are often too short and generic to
//! disambiguate ("Introduction" appears across many modules). Topics without
//! enough content are excluded from the computation entirely and reported
//! separately, instead of showing up as silently disconnected nodes.

use tracing::{debug, info};

use study_embeddings::{similarity_matrix, TextEmbedder};
use study_types::{RelationGraph, Topic};

use crate::config::GraphConfig;
use crate::error::AnalysisError;

/// Builds the pairwise content-similarity field for a topic set.
#[derive(Debug, Clone)]
pub struct RelationGraphBuilder {
    min_content_chars: usize,
}

impl RelationGraphBuilder {
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            min_content_chars: config.min_content_chars,
        }
    }

    /// Embed every topic with sufficient content and compute the full
    /// pairwise similarity matrix.
    ///
    /// The expensive embedding step runs once; graphs at different edge
    /// thresholds derive from the returned field without re-embedding.
    ///
    /// # Errors
    ///
    /// Propagates embedding provider failures; those are fatal for the run.
    pub fn prepare(
        &self,
        embedder: &dyn TextEmbedder,
        topics: &[(Topic, Option<&str>)],
    ) -> Result<ContentSimilarity, AnalysisError> {
        let mut valid_topics: Vec<Topic> = Vec::new();
        let mut contents: Vec<&str> = Vec::new();
        let mut insufficient: Vec<Topic> = Vec::new();

        for (topic, content) in topics {
            match content {
                Some(text) if text.chars().count() >= self.min_content_chars => {
                    valid_topics.push(topic.clone());
                    contents.push(text);
                }
                _ => {
                    debug!(topic = %topic, "Skipping topic with insufficient content");
                    insufficient.push(topic.clone());
                }
            }
        }

        info!(
            valid = valid_topics.len(),
            skipped = insufficient.len(),
            "Computing content similarity field"
        );

        let embeddings = embedder.embed_batch(&contents)?;
        let matrix = similarity_matrix(&embeddings, &embeddings);

        Ok(ContentSimilarity {
            topics: valid_topics,
            matrix,
            insufficient,
        })
    }
}

/// Pairwise content similarities over the topics that had enough content.
#[derive(Debug, Clone)]
pub struct ContentSimilarity {
    topics: Vec<Topic>,
    matrix: Vec<Vec<f32>>,
    insufficient: Vec<Topic>,
}

impl ContentSimilarity {
    /// Topics included in the similarity computation.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Topics excluded for missing or too-short content.
    pub fn insufficient(&self) -> &[Topic] {
        &self.insufficient
    }

    /// Similarity between two included topics.
    pub fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        let i = self.topics.iter().position(|t| t == a)?;
        let j = self.topics.iter().position(|t| t == b)?;
        Some(self.matrix[i][j])
    }

    /// Derive the relation graph at an edge threshold.
    ///
    /// Every included topic becomes a node; each unordered pair with
    /// similarity strictly above the threshold becomes one edge weighted by
    /// that similarity. The threshold is the caller's knob: display wants a
    /// permissive graph, clustering a strict one.
    pub fn graph_at(&self, threshold: f32) -> RelationGraph {
        let mut graph = RelationGraph::new();
        for topic in &self.topics {
            graph.add_node(topic.clone());
        }

        for i in 0..self.topics.len() {
            for j in (i + 1)..self.topics.len() {
                let score = self.matrix[i][j];
                if score > threshold {
                    // Both endpoints are distinct known nodes
                    graph
                        .add_edge(self.topics[i].clone(), self.topics[j].clone(), score)
                        .expect("endpoints are nodes and i != j");
                }
            }
        }

        debug!(
            threshold = threshold,
            edges = graph.edge_count(),
            "Derived relation graph"
        );

        graph
    }
}
