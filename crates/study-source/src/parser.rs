//! Syllabus and question paper parsers.
//!
//! Both parsers are line-oriented and forgiving: real syllabus files mix
//! "Module 3: A, B, C" runs with bare topic lines, and question papers wrap
//! long questions across lines under a numbered marker.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use study_types::Topic;

/// "Module 1:", "Unit 2 -", "Chapter 10." style line prefixes.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(module|unit|chapter)\s*[-:]?\s*\d+\s*[:.\-]?\s*").expect("static pattern")
});

/// "1." or "23)" question markers at line start.
static QUESTION_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*[.)]\s*").expect("static pattern"));

/// Extracts topic labels from a syllabus text.
#[derive(Debug, Default)]
pub struct SyllabusParser;

impl SyllabusParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse syllabus text into a sorted, deduplicated topic list.
    ///
    /// Each line is stripped of its module/unit/chapter header, split on
    /// commas and semicolons, and every fragment longer than three
    /// characters becomes a topic. Very short fragments are list noise
    /// ("a)", "ii", "etc") rather than topics.
    pub fn parse(&self, text: &str) -> Vec<Topic> {
        let mut topics: BTreeSet<Topic> = BTreeSet::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let body = HEADER_RE.replace(line, "");
            for part in body.split([',', ';']) {
                let part = part.trim().trim_end_matches('.').trim();
                if part.chars().count() > 3 {
                    topics.insert(part.to_string());
                } else if !part.is_empty() {
                    debug!(fragment = part, "Dropping too-short syllabus fragment");
                }
            }
        }

        topics.into_iter().collect()
    }
}

/// Extracts question texts from a question paper.
#[derive(Debug, Default)]
pub struct QuestionParser;

impl QuestionParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse question paper text into individual questions.
    ///
    /// A line matching a numbered marker ("1.", "23)") starts a new
    /// question; following unnumbered lines continue it. Text before the
    /// first marker (paper titles, "PART A" headers) is dropped. A file
    /// with no markers at all is treated as a plain one-question-per-line
    /// list.
    pub fn parse(&self, text: &str) -> Vec<String> {
        let mut questions: Vec<String> = Vec::new();
        let mut current: Option<String> = None;
        let mut saw_marker = false;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(marker) = QUESTION_MARKER_RE.find(trimmed) {
                saw_marker = true;
                if let Some(done) = current.take() {
                    questions.push(done);
                }
                current = Some(trimmed[marker.end()..].trim().to_string());
            } else if let Some(question) = current.as_mut() {
                if question.is_empty() {
                    *question = trimmed.to_string();
                } else {
                    question.push(' ');
                    question.push_str(trimmed);
                }
            }
        }
        if let Some(done) = current {
            questions.push(done);
        }
        questions.retain(|q| !q.is_empty());

        if !saw_marker {
            return text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
        }
        questions
    }
}
