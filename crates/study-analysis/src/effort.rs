//! Per-topic study effort estimation.
//!
//! A deterministic function of the topic's reference text: math-signal
//! keyword density decides whether the topic needs derivation practice,
//! reading ease picks the reading speed, and word count turns that into
//! minutes. Topics with no measurable content get a fixed `Unknown` default
//! that is never confused with a verified easy topic.

use study_types::{Difficulty, EffortRecord};
use tracing::trace;

use crate::config::EffortConfig;
use crate::readability::{flesch_reading_ease, word_count};

/// Vocabulary that signals computation- or derivation-heavy content.
const MATH_KEYWORDS: &[&str] = &[
    "formula",
    "equation",
    "calculate",
    "theorem",
    "proof",
    "algorithm",
    "integral",
    "derivative",
    "matrix",
    "logarithm",
    "complexity",
];

/// Estimates study time, difficulty, and math intensity from content text.
#[derive(Debug, Clone)]
pub struct EffortEstimator {
    config: EffortConfig,
}

impl EffortEstimator {
    pub fn new(config: EffortConfig) -> Self {
        Self { config }
    }

    /// Estimate effort for one topic's content, independently of any other
    /// topic.
    pub fn estimate(&self, content: Option<&str>) -> EffortRecord {
        let Some(text) = content else {
            return EffortRecord::unknown();
        };
        let char_count = text.chars().count();
        if char_count < self.config.min_measurable_chars {
            return EffortRecord::unknown();
        }

        let hits = math_signal_hits(text);
        let density = hits as f32 * 1000.0 / char_count as f32;
        let is_math_heavy = density > self.config.math_density_threshold;

        let ease = flesch_reading_ease(text);
        let wpm = if ease >= 60.0 {
            self.config.base_wpm
        } else if ease >= 30.0 {
            self.config.dense_wpm
        } else {
            self.config.hard_wpm
        };

        let mut minutes = word_count(text) as f32 / wpm;
        if is_math_heavy {
            // Deriving and practicing takes longer than reading
            minutes *= self.config.math_multiplier;
        }

        let minutes = (((minutes / 5.0).round() as u32) * 5).max(5);

        let difficulty = if ease < 40.0 || is_math_heavy {
            Difficulty::Hard
        } else if ease < 60.0 {
            Difficulty::Moderate
        } else {
            Difficulty::Easy
        };

        trace!(
            chars = char_count,
            math_hits = hits,
            ease = ease,
            minutes = minutes,
            "Estimated effort"
        );

        EffortRecord {
            minutes,
            difficulty,
            is_math_heavy,
        }
    }
}

impl Default for EffortEstimator {
    fn default() -> Self {
        Self::new(EffortConfig::default())
    }
}

/// Count math-signal occurrences: keyword hits plus explicit step markers
/// ("step 1"), big-O notation, and summation symbols.
fn math_signal_hits(text: &str) -> usize {
    let lower = text.to_lowercase();

    let keyword_hits: usize = MATH_KEYWORDS
        .iter()
        .map(|kw| count_occurrences(&lower, kw))
        .sum();

    let step_hits = lower
        .match_indices("step ")
        .filter(|(idx, _)| {
            lower[idx + 5..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
        })
        .count();

    let big_o_hits = count_occurrences(&lower, "o(");
    let summation_hits = text.chars().filter(|c| matches!(c, '∑' | 'Σ')).count();

    keyword_hits + step_hits + big_o_hits + summation_hits
}

/// Non-overlapping substring occurrence count.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> EffortEstimator {
        EffortEstimator::default()
    }

    /// ~184 chars of trivially easy prose, no math signals.
    fn easy_text() -> String {
        "The cat sat on the mat. ".repeat(8)
    }

    #[test]
    fn test_missing_content_gets_unknown_default() {
        let record = estimator().estimate(None);
        assert_eq!(record, EffortRecord::unknown());
    }

    #[test]
    fn test_empty_string_gets_unknown_default() {
        let record = estimator().estimate(Some(""));
        assert_eq!(record.minutes, 5);
        assert_eq!(record.difficulty, Difficulty::Unknown);
        assert!(!record.is_math_heavy);
    }

    #[test]
    fn test_near_empty_content_gets_unknown_default() {
        let record = estimator().estimate(Some("short note on sorting"));
        assert_eq!(record.difficulty, Difficulty::Unknown);
    }

    #[test]
    fn test_math_density_over_threshold() {
        // 5 hits in a ~300 char block: density ~16.7 per 1000 chars
        let filler = "the topic goes on about its subject in plain words and examples ";
        let text = format!(
            "theorem proof matrix theorem proof {}{}{}",
            filler, filler, filler
        );
        assert!(text.chars().count() >= 300 - 70 && text.chars().count() < 400);

        let record = estimator().estimate(Some(&text));
        assert!(record.is_math_heavy);
        assert_eq!(record.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_low_density_is_not_math_heavy() {
        // One keyword in a long plain text
        let text = format!("{} algorithm", easy_text().repeat(4));
        let record = estimator().estimate(Some(&text));
        assert!(!record.is_math_heavy);
    }

    #[test]
    fn test_step_markers_and_big_o_count_as_signals() {
        assert_eq!(math_signal_hits("step 1 then step 2"), 2);
        assert_eq!(math_signal_hits("runs in O(n log n)"), 1);
        assert_eq!(math_signal_hits("the sum ∑ over i"), 1);
        assert_eq!(math_signal_hits("step by step guide"), 0);
    }

    #[test]
    fn test_minutes_floor_and_granularity() {
        let record = estimator().estimate(Some(&easy_text()));
        assert!(record.minutes >= 5);
        assert_eq!(record.minutes % 5, 0);

        let long = estimator().estimate(Some(&easy_text().repeat(40)));
        assert!(long.minutes >= record.minutes);
        assert_eq!(long.minutes % 5, 0);
    }

    #[test]
    fn test_easy_content_labeled_easy() {
        let record = estimator().estimate(Some(&easy_text()));
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert!(!record.is_math_heavy);
    }

    #[test]
    fn test_single_long_sentence_is_moderate() {
        // ~72 monosyllabic words with no sentence break lands in the
        // 40-60 reading ease band
        let text = "the cat sat on the mat and the dog ran to the park ".repeat(6);
        let record = estimator().estimate(Some(&text));
        assert_eq!(record.difficulty, Difficulty::Moderate);
    }

    #[test]
    fn test_unreadable_wall_of_text_is_hard() {
        let text = "the cat sat on the mat and the dog ran to the park ".repeat(20);
        let record = estimator().estimate(Some(&text));
        assert_eq!(record.difficulty, Difficulty::Hard);
        assert!(!record.is_math_heavy); // hard by readability alone
    }

    #[test]
    fn test_math_multiplier_increases_minutes() {
        // Same text; only the density threshold differs between estimators
        let text = format!("theorem proof matrix equation formula {}", easy_text().repeat(30));

        let with_math = EffortEstimator::new(EffortConfig {
            math_density_threshold: 0.1,
            ..EffortConfig::default()
        })
        .estimate(Some(&text));
        let never_math = EffortEstimator::new(EffortConfig {
            math_density_threshold: f32::MAX,
            ..EffortConfig::default()
        })
        .estimate(Some(&text));

        assert!(with_math.is_math_heavy);
        assert!(!never_math.is_math_heavy);
        assert!(with_math.minutes > never_math.minutes);
    }

    #[test]
    fn test_deterministic() {
        let text = easy_text().repeat(3);
        let a = estimator().estimate(Some(&text));
        let b = estimator().estimate(Some(&text));
        assert_eq!(a, b);
    }
}
