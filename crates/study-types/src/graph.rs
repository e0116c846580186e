//! Weighted undirected relation graph over topics.
//!
//! The graph is simple: no self-loops, at most one edge per unordered topic
//! pair. Edge weights are the cosine similarities of the topics' content
//! embeddings and are stored as-is, even when negative.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Topic;

/// Errors raised while assembling a relation graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Self-edges are never allowed
    #[error("self-edge on topic '{0}'")]
    SelfEdge(Topic),

    /// Edge endpoint missing from the node set
    #[error("edge endpoint '{0}' is not a node of the graph")]
    UnknownNode(Topic),
}

/// An undirected weighted edge between two topics.
///
/// The pair is stored canonically (`source <= target`) so that
/// `edge(A, B)` and `edge(B, A)` are the same entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    /// Lexicographically smaller endpoint
    pub source: Topic,
    /// Lexicographically larger endpoint
    pub target: Topic,
    /// Content similarity of the endpoints
    pub weight: f32,
}

impl RelationEdge {
    /// Create a canonical edge between two distinct topics.
    pub fn new(a: impl Into<Topic>, b: impl Into<Topic>, weight: f32) -> Result<Self, GraphError> {
        let a = a.into();
        let b = b.into();
        if a == b {
            return Err(GraphError::SelfEdge(a));
        }
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// Check whether this edge touches the given topic.
    pub fn touches(&self, topic: &str) -> bool {
        self.source == topic || self.target == topic
    }

    /// The endpoint opposite to `topic`, if `topic` is an endpoint.
    pub fn other(&self, topic: &str) -> Option<&Topic> {
        if self.source == topic {
            Some(&self.target)
        } else if self.target == topic {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// A simple weighted undirected graph of topics.
///
/// Nodes keep their insertion order; edges are deduplicated per unordered
/// pair, keeping the first weight seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationGraph {
    nodes: Vec<Topic>,
    edges: Vec<RelationEdge>,
}

impl RelationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node if not already present.
    pub fn add_node(&mut self, topic: impl Into<Topic>) {
        let topic = topic.into();
        if !self.nodes.contains(&topic) {
            self.nodes.push(topic);
        }
    }

    /// Add an edge between two existing nodes.
    ///
    /// # Errors
    ///
    /// Fails on self-edges and on endpoints that are not nodes. Adding an
    /// edge for a pair that already has one is a no-op.
    pub fn add_edge(
        &mut self,
        a: impl Into<Topic>,
        b: impl Into<Topic>,
        weight: f32,
    ) -> Result<(), GraphError> {
        let edge = RelationEdge::new(a, b, weight)?;
        if !self.nodes.contains(&edge.source) {
            return Err(GraphError::UnknownNode(edge.source));
        }
        if !self.nodes.contains(&edge.target) {
            return Err(GraphError::UnknownNode(edge.target));
        }
        if !self.has_edge(&edge.source, &edge.target) {
            self.edges.push(edge);
        }
        Ok(())
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Topic] {
        &self.nodes
    }

    /// All edges.
    pub fn edges(&self) -> &[RelationEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check membership of a topic.
    pub fn contains(&self, topic: &str) -> bool {
        self.nodes.iter().any(|n| n == topic)
    }

    /// Check whether an edge exists between two topics (either direction).
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.touches(a) && e.other(a).is_some_and(|o| o == b))
    }

    /// Weight of the edge between two topics, if one exists.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f32> {
        self.edges
            .iter()
            .find(|e| e.touches(a) && e.other(a).is_some_and(|o| o == b))
            .map(|e| e.weight)
    }

    /// Neighbors of a topic with edge weights.
    pub fn neighbors(&self, topic: &str) -> Vec<(&Topic, f32)> {
        self.edges
            .iter()
            .filter_map(|e| e.other(topic).map(|o| (o, e.weight)))
            .collect()
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f32 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Sum of the weights of edges touching a topic (weighted degree).
    pub fn weighted_degree(&self, topic: &str) -> f32 {
        self.edges
            .iter()
            .filter(|e| e.touches(topic))
            .map(|e| e.weight)
            .sum()
    }

    /// Derive a graph keeping all nodes but only edges at or above
    /// `min_weight`.
    ///
    /// This is how one similarity computation serves both the permissive
    /// display graph and the stricter clustering graph.
    pub fn filtered(&self, min_weight: f32) -> RelationGraph {
        RelationGraph {
            nodes: self.nodes.clone(),
            edges: self
                .edges
                .iter()
                .filter(|e| e.weight >= min_weight)
                .cloned()
                .collect(),
        }
    }
}
