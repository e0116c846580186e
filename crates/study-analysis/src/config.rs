//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Master configuration for one analysis engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Relation graph settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Importance scoring settings
    #[serde(default)]
    pub importance: ImportanceConfig,

    /// Effort estimation settings
    #[serde(default)]
    pub effort: EffortConfig,
}

/// Relation graph configuration.
///
/// Display and clustering use independently configurable thresholds:
/// interactive exploration wants a permissive graph, clustering wants to
/// avoid spurious cross-links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Minimum similarity for an edge in the display graph
    #[serde(default = "default_display_threshold")]
    pub display_threshold: f32,

    /// Minimum similarity for an edge in the clustering graph
    #[serde(default = "default_cluster_threshold")]
    pub cluster_threshold: f32,

    /// Topics with less content than this are excluded from the graph
    #[serde(default = "default_min_content_chars")]
    pub min_content_chars: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            display_threshold: default_display_threshold(),
            cluster_threshold: default_cluster_threshold(),
            min_content_chars: default_min_content_chars(),
        }
    }
}

fn default_display_threshold() -> f32 {
    0.40
}
fn default_cluster_threshold() -> f32 {
    0.30
}
fn default_min_content_chars() -> usize {
    500
}

/// Importance scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceConfig {
    /// Minimum topic-question similarity for a question to count
    #[serde(default = "default_relevance_threshold")]
    pub relevance_threshold: f32,
}

impl Default for ImportanceConfig {
    fn default() -> Self {
        Self {
            relevance_threshold: default_relevance_threshold(),
        }
    }
}

fn default_relevance_threshold() -> f32 {
    0.45
}

/// Effort estimation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffortConfig {
    /// Content below this length gets the fixed Unknown default
    #[serde(default = "default_min_measurable_chars")]
    pub min_measurable_chars: usize,

    /// Math keyword hits per 1000 chars above which a topic is math-heavy
    #[serde(default = "default_math_density_threshold")]
    pub math_density_threshold: f32,

    /// Study time multiplier for math-heavy topics
    #[serde(default = "default_math_multiplier")]
    pub math_multiplier: f32,

    /// Reading speed (wpm) for reading ease >= 60
    #[serde(default = "default_base_wpm")]
    pub base_wpm: f32,

    /// Reading speed for dense academic text (ease 30-60)
    #[serde(default = "default_dense_wpm")]
    pub dense_wpm: f32,

    /// Reading speed for very hard text (ease < 30)
    #[serde(default = "default_hard_wpm")]
    pub hard_wpm: f32,
}

impl Default for EffortConfig {
    fn default() -> Self {
        Self {
            min_measurable_chars: default_min_measurable_chars(),
            math_density_threshold: default_math_density_threshold(),
            math_multiplier: default_math_multiplier(),
            base_wpm: default_base_wpm(),
            dense_wpm: default_dense_wpm(),
            hard_wpm: default_hard_wpm(),
        }
    }
}

fn default_min_measurable_chars() -> usize {
    100
}
fn default_math_density_threshold() -> f32 {
    3.0
}
fn default_math_multiplier() -> f32 {
    1.6
}
fn default_base_wpm() -> f32 {
    200.0
}
fn default_dense_wpm() -> f32 {
    130.0
}
fn default_hard_wpm() -> f32 {
    90.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_defaults() {
        let config = GraphConfig::default();
        assert!((config.display_threshold - 0.40).abs() < f32::EPSILON);
        assert!((config.cluster_threshold - 0.30).abs() < f32::EPSILON);
        assert_eq!(config.min_content_chars, 500);
    }

    #[test]
    fn test_importance_defaults() {
        let config = ImportanceConfig::default();
        assert!((config.relevance_threshold - 0.45).abs() < f32::EPSILON);
    }

    #[test]
    fn test_effort_defaults() {
        let config = EffortConfig::default();
        assert_eq!(config.min_measurable_chars, 100);
        assert!((config.math_density_threshold - 3.0).abs() < f32::EPSILON);
        assert!((config.math_multiplier - 1.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_round_trip() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            config.graph.min_content_chars,
            parsed.graph.min_content_chars
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AnalysisConfig =
            serde_json::from_str(r#"{"graph": {"display_threshold": 0.15}}"#).unwrap();
        assert!((parsed.graph.display_threshold - 0.15).abs() < f32::EPSILON);
        assert!((parsed.graph.cluster_threshold - 0.30).abs() < f32::EPSILON);
        assert!((parsed.importance.relevance_threshold - 0.45).abs() < f32::EPSILON);
    }
}
