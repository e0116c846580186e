//! Per-topic importance and effort records.

use serde::{Deserialize, Serialize};

/// How well a topic matches the historical question bank.
///
/// The score is a weighted frequency: the sum of the cosine similarities of
/// every question above the relevance threshold. Many strong matches add up,
/// so the score is unbounded above (typically 0–5). `matched_questions`
/// keeps the contributing question texts in their original source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportanceRecord {
    /// Aggregate relevance score, rounded to 2 decimals
    pub score: f32,
    /// Question texts that contributed, in source order
    pub matched_questions: Vec<String>,
}

impl ImportanceRecord {
    /// A neutral record: zero score, no matches.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Priority band for this record's score.
    pub fn priority(&self) -> PriorityBand {
        PriorityBand::from_score(self.score)
    }
}

/// Whether importance scores were actually computed.
///
/// `NoQuestions` is a degraded mode, not an error: with no question bank
/// every topic scores 0 and importance becomes a neutral tiebreaker. It is
/// kept distinct from "scored, zero matches found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceMode {
    /// Scores computed against a non-empty question bank
    Scored,
    /// No historical questions supplied; all scores default to 0
    NoQuestions,
}

/// Display band for a topic's importance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBand {
    High,
    Medium,
    Low,
}

impl PriorityBand {
    /// Band thresholds: > 2.5 high, > 1.0 medium, else low.
    pub fn from_score(score: f32) -> Self {
        if score > 2.5 {
            PriorityBand::High
        } else if score > 1.0 {
            PriorityBand::Medium
        } else {
            PriorityBand::Low
        }
    }
}

impl std::fmt::Display for PriorityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityBand::High => write!(f, "high"),
            PriorityBand::Medium => write!(f, "medium"),
            PriorityBand::Low => write!(f, "low"),
        }
    }
}

/// Study difficulty label.
///
/// `Unknown` marks topics whose content was missing or too short to judge;
/// it is deliberately distinct from `Easy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
    Unknown,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Moderate => write!(f, "moderate"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Unknown => write!(f, "unknown"),
        }
    }
}

/// Estimated study effort for one topic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortRecord {
    /// Estimated study minutes, >= 5 and a multiple of 5
    pub minutes: u32,
    /// Three-tier difficulty, or Unknown when content was insufficient
    pub difficulty: Difficulty,
    /// Requires derivation/calculation practice rather than pure reading
    pub is_math_heavy: bool,
}

impl EffortRecord {
    /// The fixed default for missing or near-empty content.
    ///
    /// Not a "fast and easy" verdict: `Unknown` flags that nothing could be
    /// measured.
    pub fn unknown() -> Self {
        Self {
            minutes: 5,
            difficulty: Difficulty::Unknown,
            is_math_heavy: false,
        }
    }
}
