//! Importance scoring against the historical question bank.
//!
//! A topic's score is a weighted frequency: the sum of its cosine
//! similarities to every question above the relevance threshold. This is a
//! cutoff, not a top-k: a topic matching many questions strongly accumulates
//! a correspondingly larger score, and near-duplicate questions each count,
//! which deliberately rewards topics that recur across past papers.

use std::collections::HashMap;

use tracing::info;

use study_embeddings::{similarity_matrix, TextEmbedder};
use study_types::{ImportanceMode, ImportanceRecord, Topic};

use crate::config::ImportanceConfig;
use crate::error::AnalysisError;

/// Scores topics by their overlap with past exam questions.
#[derive(Debug, Clone)]
pub struct ImportanceScorer {
    config: ImportanceConfig,
}

impl ImportanceScorer {
    pub fn new(config: ImportanceConfig) -> Self {
        Self { config }
    }

    /// Configured relevance threshold.
    pub fn relevance_threshold(&self) -> f32 {
        self.config.relevance_threshold
    }

    /// Score every topic against every question.
    ///
    /// With an empty question bank, every topic gets a neutral record and
    /// the mode is `NoQuestions`, distinguishable from "scored, nothing
    /// matched". Matched question texts are kept in their original source
    /// order.
    ///
    /// # Errors
    ///
    /// Embedding failures propagate; they are never mapped to zero scores.
    pub fn score(
        &self,
        embedder: &dyn TextEmbedder,
        topics: &[Topic],
        questions: &[String],
    ) -> Result<(HashMap<Topic, ImportanceRecord>, ImportanceMode), AnalysisError> {
        if questions.is_empty() {
            info!("No historical questions; importance defaults to neutral");
            let records = topics
                .iter()
                .map(|t| (t.clone(), ImportanceRecord::neutral()))
                .collect();
            return Ok((records, ImportanceMode::NoQuestions));
        }

        info!(
            topics = topics.len(),
            questions = questions.len(),
            threshold = self.config.relevance_threshold,
            "Scoring topic importance against question bank"
        );

        let topic_embeddings = embedder.embed_texts(topics)?;
        let question_embeddings = embedder.embed_texts(questions)?;
        let matrix = similarity_matrix(&topic_embeddings, &question_embeddings);

        let mut records = HashMap::with_capacity(topics.len());
        for (topic, row) in topics.iter().zip(matrix.iter()) {
            let mut total = 0.0f32;
            let mut matched = Vec::new();
            for (question, &similarity) in questions.iter().zip(row.iter()) {
                if similarity > self.config.relevance_threshold {
                    total += similarity;
                    matched.push(question.clone());
                }
            }
            records.insert(
                topic.clone(),
                ImportanceRecord {
                    score: round2(total),
                    matched_questions: matched,
                },
            );
        }

        Ok((records, ImportanceMode::Scored))
    }
}

impl Default for ImportanceScorer {
    fn default() -> Self {
        Self::new(ImportanceConfig::default())
    }
}

/// Round to 2 decimal digits for display stability.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::StubEmbedder;

    fn scorer_with_threshold(threshold: f32) -> ImportanceScorer {
        ImportanceScorer::new(ImportanceConfig {
            relevance_threshold: threshold,
        })
    }

    fn fixture() -> (StubEmbedder, Vec<Topic>, Vec<String>) {
        // sorting ~ q1 (0.98), ~ q2 (0.0); graphs ~ q2 (0.97), weak vs q1
        let embedder = StubEmbedder::new()
            .with("Sorting Algorithms", vec![1.0, 0.0, 0.0])
            .with("Graph Theory", vec![0.0, 1.0, 0.0])
            .with("quicksort and its complexity", vec![0.98, 0.2, 0.0])
            .with("BFS and DFS traversal", vec![0.25, 0.97, 0.0]);

        let topics = vec!["Sorting Algorithms".to_string(), "Graph Theory".to_string()];
        let questions = vec![
            "quicksort and its complexity".to_string(),
            "BFS and DFS traversal".to_string(),
        ];
        (embedder, topics, questions)
    }

    #[test]
    fn test_empty_question_bank_neutral_mode() {
        let embedder = StubEmbedder::new();
        let topics = vec!["a".to_string(), "b".to_string()];

        let (records, mode) = ImportanceScorer::default()
            .score(&embedder, &topics, &[])
            .unwrap();

        assert_eq!(mode, ImportanceMode::NoQuestions);
        for topic in &topics {
            let record = &records[topic];
            assert_eq!(record.score, 0.0);
            assert!(record.matched_questions.is_empty());
        }
    }

    #[test]
    fn test_cross_scores_follow_semantics() {
        let (embedder, topics, questions) = fixture();
        let (records, mode) = ImportanceScorer::default()
            .score(&embedder, &topics, &questions)
            .unwrap();

        assert_eq!(mode, ImportanceMode::Scored);
        let sorting = &records["Sorting Algorithms"];
        let graphs = &records["Graph Theory"];

        assert!(sorting.score > 0.0);
        assert!(graphs.score > 0.0);
        assert_eq!(sorting.matched_questions, vec![questions[0].clone()]);
        assert_eq!(graphs.matched_questions, vec![questions[1].clone()]);
    }

    #[test]
    fn test_score_is_sum_above_threshold() {
        // One topic matches both questions
        let embedder = StubEmbedder::new()
            .with("topic", vec![1.0, 0.0, 0.0])
            .with("q1", vec![1.0, 0.0, 0.0])
            .with("q2", vec![0.9, 0.1, 0.0]);

        let topics = vec!["topic".to_string()];
        let questions = vec!["q1".to_string(), "q2".to_string()];

        let (records, _) = scorer_with_threshold(0.45)
            .score(&embedder, &topics, &questions)
            .unwrap();

        let record = &records["topic"];
        assert_eq!(record.matched_questions.len(), 2);
        // sim(q1) = 1.0, sim(q2) ~ 0.9939 -> sum ~ 1.99
        assert!((record.score - 1.99).abs() < 0.02);
    }

    #[test]
    fn test_matched_questions_keep_source_order() {
        let embedder = StubEmbedder::new()
            .with("topic", vec![1.0, 0.0, 0.0])
            .with("weak match first", vec![0.6, 0.8, 0.0])
            .with("strong match second", vec![1.0, 0.0, 0.0]);

        let topics = vec!["topic".to_string()];
        let questions = vec![
            "weak match first".to_string(),
            "strong match second".to_string(),
        ];

        let (records, _) = scorer_with_threshold(0.5)
            .score(&embedder, &topics, &questions)
            .unwrap();

        // Source order, not similarity order
        assert_eq!(records["topic"].matched_questions, questions);
    }

    #[test]
    fn test_raising_threshold_never_raises_score() {
        let (embedder, topics, questions) = fixture();

        let thresholds = [0.1, 0.45, 0.7, 0.99];
        let mut last_scores: Option<Vec<f32>> = None;
        let mut last_counts: Option<Vec<usize>> = None;

        for threshold in thresholds {
            let (records, _) = scorer_with_threshold(threshold)
                .score(&embedder, &topics, &questions)
                .unwrap();
            let scores: Vec<f32> = topics.iter().map(|t| records[t].score).collect();
            let counts: Vec<usize> = topics
                .iter()
                .map(|t| records[t].matched_questions.len())
                .collect();

            if let (Some(prev_scores), Some(prev_counts)) = (&last_scores, &last_counts) {
                for (prev, cur) in prev_scores.iter().zip(scores.iter()) {
                    assert!(cur <= prev, "score rose with threshold");
                }
                for (prev, cur) in prev_counts.iter().zip(counts.iter()) {
                    assert!(cur <= prev, "match count rose with threshold");
                }
            }
            last_scores = Some(scores);
            last_counts = Some(counts);
        }
    }

    #[test]
    #[ignore = "requires model download"]
    fn test_real_model_pairs_topics_with_their_questions() {
        let embedder = study_embeddings::MiniLmEmbedder::load_default().unwrap();

        let topics = vec!["Sorting Algorithms".to_string(), "Graph Theory".to_string()];
        let questions = vec![
            "Explain quicksort algorithm and its complexity".to_string(),
            "Describe BFS and DFS traversal".to_string(),
        ];

        let (records, mode) = ImportanceScorer::default()
            .score(&embedder, &topics, &questions)
            .unwrap();

        assert_eq!(mode, ImportanceMode::Scored);
        let sorting = &records["Sorting Algorithms"];
        let graphs = &records["Graph Theory"];

        assert!(sorting.score > 0.0);
        assert!(graphs.score > 0.0);
        assert!(sorting.matched_questions.contains(&questions[0]));
        assert!(graphs.matched_questions.contains(&questions[1]));
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        let embedder = StubEmbedder::new()
            .with("topic", vec![3.0, 4.0, 0.0])
            .with("question", vec![1.0, 0.0, 0.0]);

        let (records, _) = scorer_with_threshold(0.1)
            .score(
                &embedder,
                &["topic".to_string()],
                &["question".to_string()],
            )
            .unwrap();

        // cos = 0.6 exactly; rounding must not disturb it
        assert_eq!(records["topic"].score, 0.6);
        let scaled = records["topic"].score * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-4);
    }

    #[test]
    fn test_embedding_failure_propagates() {
        let embedder = StubEmbedder::new(); // empty table
        let result = ImportanceScorer::default().score(
            &embedder,
            &["topic".to_string()],
            &["question".to_string()],
        );
        assert!(matches!(result, Err(AnalysisError::Embedding(_))));
    }
}
