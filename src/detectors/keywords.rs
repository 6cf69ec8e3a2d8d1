//! Frequency-based keyword extraction.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

/// A keyword and its occurrence count on the page.
pub type Keyword = (String, usize);

/// Function words of four letters or more that never make useful keywords.
pub const KEYWORD_STOP_WORDS: &[&str] = &[
    "that", "this", "with", "from", "have", "will", "been", "were", "said", "each", "which",
    "their", "there", "would", "about", "into", "than", "them", "these", "only", "some", "could",
    "other", "then", "more", "very", "when", "much", "such", "also", "many", "most", "over",
    "well", "even",
];

lazy_static! {
    static ref RE_KEYWORD: Regex = Regex::new(r"\b[a-z]{4,}\b").unwrap();
}

/// The `top_n` most frequent keywords, highest count first.
///
/// Ties keep the order in which the words first appear on the page.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<Keyword> {
    if text.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for word in RE_KEYWORD.find_iter(&lowered).map(|m| m.as_str()) {
        if KEYWORD_STOP_WORDS.contains(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // sort_by is stable, so first-seen order survives among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_two() {
        let keywords = extract_keywords("data data data model model pipeline", 2);
        assert_eq!(
            keywords,
            vec![("data".to_string(), 3), ("model".to_string(), 2)]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let keywords = extract_keywords("zeta alpha zeta alpha beta", 3);
        assert_eq!(
            keywords,
            vec![
                ("zeta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("beta".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_stop_words_and_short_words_dropped() {
        let keywords = extract_keywords("This is about the Matrix and THE matrix", 10);
        assert_eq!(keywords, vec![("matrix".to_string(), 2)]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(extract_keywords("", 5).is_empty());
        assert!(extract_keywords("plenty of words here", 0).is_empty());
    }

    #[test]
    fn test_fewer_words_than_requested() {
        assert_eq!(extract_keywords("tensor", 10), vec![("tensor".to_string(), 1)]);
    }
}
