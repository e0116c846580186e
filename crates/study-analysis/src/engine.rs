//! The analysis engine: one call from raw inputs to a full report.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{info, instrument};

use study_embeddings::TextEmbedder;
use study_types::{AnalysisReport, Topic};

use crate::cluster::detect_communities;
use crate::config::AnalysisConfig;
use crate::effort::EffortEstimator;
use crate::error::AnalysisError;
use crate::graph::RelationGraphBuilder;
use crate::importance::ImportanceScorer;

/// Raw inputs for one analysis run.
///
/// `content` maps topic labels to their reference text; topics absent from
/// the map are treated as having no content. Questions may be empty.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    /// Syllabus topic labels, order preserved
    pub topics: Vec<Topic>,
    /// Historical exam question texts
    pub questions: Vec<String>,
    /// Reference text per topic
    pub content: HashMap<Topic, String>,
}

/// Runs the full pipeline: similarity field, display graph, communities,
/// importance, and effort.
///
/// Holds only the shared embedder and configuration; every run is a pure
/// function of its input.
pub struct AnalysisEngine {
    embedder: Arc<dyn TextEmbedder>,
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(embedder: Arc<dyn TextEmbedder>, config: AnalysisConfig) -> Self {
        Self { embedder, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the complete analysis.
    ///
    /// Topics excluded from the graph for insufficient content still get
    /// importance and effort entries; they are listed in the report's
    /// `insufficient_content` so the caller can flag them.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::MissingInput`] for an empty topic list
    /// - [`AnalysisError::InvalidInput`] for duplicate topic labels
    /// - [`AnalysisError::Embedding`] when the provider fails
    #[instrument(skip_all, fields(topics = input.topics.len(), questions = input.questions.len()))]
    pub fn run(&self, input: &AnalysisInput) -> Result<AnalysisReport, AnalysisError> {
        if input.topics.is_empty() {
            return Err(AnalysisError::MissingInput);
        }
        let mut seen = HashSet::new();
        for topic in &input.topics {
            if !seen.insert(topic.as_str()) {
                return Err(AnalysisError::InvalidInput(format!(
                    "duplicate topic label '{topic}'"
                )));
            }
        }

        let pairs: Vec<(Topic, Option<&str>)> = input
            .topics
            .iter()
            .map(|t| (t.clone(), input.content.get(t).map(String::as_str)))
            .collect();

        let builder = RelationGraphBuilder::new(&self.config.graph);
        let similarity = builder.prepare(self.embedder.as_ref(), &pairs)?;

        // Display and clustering graphs derive from the same similarity
        // field at their own thresholds
        let graph = similarity.graph_at(self.config.graph.display_threshold);
        let cluster_graph = similarity.graph_at(self.config.graph.cluster_threshold);
        let partition = detect_communities(&cluster_graph);

        let scorer = ImportanceScorer::new(self.config.importance.clone());
        let (importance, importance_mode) =
            scorer.score(self.embedder.as_ref(), &input.topics, &input.questions)?;

        let estimator = EffortEstimator::new(self.config.effort.clone());
        let effort: HashMap<Topic, _> = input
            .topics
            .iter()
            .map(|t| {
                (
                    t.clone(),
                    estimator.estimate(input.content.get(t).map(String::as_str)),
                )
            })
            .collect();

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            communities = partition.len(),
            mode = ?importance_mode,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            graph,
            partition,
            importance,
            effort,
            insufficient_content: similarity.insufficient().to_vec(),
            importance_mode,
        })
    }
}
