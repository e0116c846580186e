//! # study-analysis
//!
//! The semantic relationship and priority graph engine.
//!
//! Turns a flat topic list plus a bank of past exam questions into:
//! - a weighted relation graph linking semantically overlapping topics,
//! - a partition of that graph into topic communities,
//! - a per-topic importance score from historical question overlap,
//! - a per-topic effort estimate (minutes, difficulty, math intensity).
//!
//! Everything is recomputed per run from the inputs; the engine holds no
//! state between runs beyond the shared embedder.

pub mod cluster;
pub mod config;
pub mod effort;
pub mod engine;
pub mod error;
pub mod graph;
pub mod importance;
pub mod readability;

pub use cluster::{detect_communities, modularity};
pub use config::{AnalysisConfig, EffortConfig, GraphConfig, ImportanceConfig};
pub use effort::EffortEstimator;
pub use engine::{AnalysisEngine, AnalysisInput};
pub use error::AnalysisError;
pub use graph::{ContentSimilarity, RelationGraphBuilder};
pub use importance::ImportanceScorer;

#[cfg(test)]
pub(crate) mod testutil;
