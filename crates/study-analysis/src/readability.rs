//! Flesch reading-ease scoring.
//!
//! Pure text statistics, no external dependencies. Higher scores mean easier
//! text: ~60+ plain prose, 30-60 dense academic writing, below 30 very hard
//! or legalistic text. Syllables are counted with the usual vowel-group
//! heuristic, which is plenty for bucketing reading speed.

/// Flesch reading ease: `206.835 - 1.015 * (words/sentences) - 84.6 *
/// (syllables/words)`.
///
/// Text with no words scores 100 (trivially easy) rather than dividing by
/// zero.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words = word_count(text);
    if words == 0 {
        return 100.0;
    }
    let sentences = sentence_count(text);
    let syllables: usize = text.split_whitespace().map(syllable_count).sum();

    206.835 - 1.015 * (words as f64 / sentences as f64) - 84.6 * (syllables as f64 / words as f64)
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of sentences, at least 1 for non-empty text.
pub fn sentence_count(text: &str) -> usize {
    let count = text
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
        .count();
    count.max(1)
}

/// Heuristic syllable count for one word: vowel groups, minus a trailing
/// silent 'e', floor of 1.
fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut in_group = false;
    for &c in &letters {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    if groups > 1 && letters.ends_with(&['e']) {
        groups -= 1;
    }
    groups.max(1)
}
