//! The assembled result of one analysis run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::graph::RelationGraph;
use crate::partition::Partition;
use crate::records::{EffortRecord, ImportanceMode, ImportanceRecord};
use crate::Topic;

/// Everything the Presentation Layer needs from one run.
///
/// Produced whole by the engine and read-only afterwards. Topics excluded
/// from the graph for lack of content still appear in `importance` and
/// `effort`; `insufficient_content` lets the caller flag them explicitly
/// instead of showing them as silently disconnected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Relation graph thresholded for interactive display
    pub graph: RelationGraph,
    /// Communities detected on the stricter clustering graph
    pub partition: Partition,
    /// Per-topic importance, covering every input topic
    pub importance: HashMap<Topic, ImportanceRecord>,
    /// Per-topic effort estimate, covering every input topic
    pub effort: HashMap<Topic, EffortRecord>,
    /// Topics with missing or too-short content, excluded from the graph
    pub insufficient_content: Vec<Topic>,
    /// Whether importance was scored or defaulted (no question bank)
    pub importance_mode: ImportanceMode,
}

impl AnalysisReport {
    /// Sum of estimated minutes across all topics.
    pub fn total_minutes(&self) -> u32 {
        self.effort.values().map(|e| e.minutes).sum()
    }

    /// Topics ordered for the study table: score descending, then minutes
    /// descending, then label for a stable tail order.
    pub fn ranked_topics(&self) -> Vec<&Topic> {
        let mut topics: Vec<&Topic> = self.importance.keys().collect();
        topics.sort_by(|a, b| {
            let score_a = self.importance[*a].score;
            let score_b = self.importance[*b].score;
            let mins_a = self.effort.get(*a).map_or(0, |e| e.minutes);
            let mins_b = self.effort.get(*b).map_or(0, |e| e.minutes);
            score_b
                .partial_cmp(&score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(mins_b.cmp(&mins_a))
                .then(a.cmp(b))
        });
        topics
    }
}
