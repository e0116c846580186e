//! Search query cleaning.

use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(module|unit|chapter)\s*[-:]?\s*\d+\s*[:.\-]?\s*").expect("static pattern")
});

/// Reduce a raw topic label to a clean search query.
///
/// Module/unit/chapter prefixes are syllabus structure, not search terms.
/// For comma-run labels the first substantial part is the actual subject;
/// the tail is usually subtopic noise. Punctuation is stripped because it
/// changes search semantics unpredictably.
pub fn clean_topic_query(topic: &str) -> String {
    let stripped = HEADER_RE.replace(topic.trim(), "");

    let first = stripped.split(',').next().unwrap_or("").trim();
    let chosen = if first.chars().count() > 5 {
        first
    } else {
        stripped.trim()
    };

    let cleaned: String = chosen
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_prefix_stripped() {
        assert_eq!(
            clean_topic_query("Module 3: Sorting Algorithms"),
            "Sorting Algorithms"
        );
        assert_eq!(clean_topic_query("Unit 1 - Graph Theory"), "Graph Theory");
    }

    #[test]
    fn test_first_comma_part_chosen() {
        assert_eq!(
            clean_topic_query("Dynamic Programming, memoization, tabulation"),
            "Dynamic Programming"
        );
    }

    #[test]
    fn test_short_first_part_falls_back_to_whole_label() {
        let query = clean_topic_query("Heaps, priority queues");
        assert_eq!(query, "Heaps priority queues");
    }

    #[test]
    fn test_special_characters_removed() {
        assert_eq!(clean_topic_query("B+ Trees & Indexing?"), "B Trees Indexing");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(clean_topic_query("  Hash   Tables  "), "Hash Tables");
    }

    #[test]
    fn test_header_only_label_is_empty() {
        assert_eq!(clean_topic_query("Module 7"), "");
    }
}
