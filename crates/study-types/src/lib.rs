//! # study-types
//!
//! Shared domain types for the study graph engine.
//!
//! This crate defines the data structures passed between the analysis core
//! and its collaborators:
//! - Relation graph: weighted undirected topic graph
//! - Partition: disjoint topic communities with stable ordering
//! - Importance and effort records keyed by topic
//! - The assembled per-run analysis report
//!
//! All of these are value types: each analysis run produces a fresh set and
//! nothing is mutated in place afterwards.

pub mod graph;
pub mod partition;
pub mod records;
pub mod report;

pub use graph::{GraphError, RelationEdge, RelationGraph};
pub use partition::Partition;
pub use records::{Difficulty, EffortRecord, ImportanceMode, ImportanceRecord, PriorityBand};
pub use report::AnalysisReport;

/// A syllabus study unit, identified by its exact label string.
///
/// The Text Source Provider normalizes labels before they reach the core;
/// duplicate labels are rejected by the engine.
pub type Topic = String;
