//! Filler page classification.
//!
//! A filler page carries little unique information: tables of contents,
//! reference lists, indices, front matter, or pages that are nearly empty.

use lazy_static::lazy_static;
use regex::Regex;

/// Lower-case substrings that mark structural sections.
pub const FILLER_INDICATORS: &[&str] = &[
    "table of contents",
    "references",
    "bibliography",
    "index",
    "appendix",
    "acknowledgments",
    "preface",
    "about the author",
];

/// Pages with less stripped text than this are filler.
const MIN_CONTENT_CHARS: usize = 100;

/// Sparse-page rule: fewer words than this...
const SPARSE_MAX_WORDS: usize = 50;
/// ...spread over more lines than this.
const SPARSE_MIN_LINES: usize = 20;

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
}

/// Whether the page looks like filler content.
pub fn is_filler(text: &str) -> bool {
    let lowered = text.to_lowercase();
    if FILLER_INDICATORS.iter().any(|ind| lowered.contains(ind)) {
        return true;
    }

    if text.trim().chars().count() < MIN_CONTENT_CHARS {
        return true;
    }

    // Line-broken text with few words: TOC or index layout
    let word_count = RE_WORD.find_iter(text).count();
    let line_count = text.split('\n').count();
    word_count < SPARSE_MAX_WORDS && line_count > SPARSE_MIN_LINES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prose(words: usize) -> String {
        (0..words)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_short_page_is_filler() {
        assert!(is_filler(""));
        assert!(is_filler("A short but meaningful sentence about eigenvalues."));
    }

    #[test]
    fn test_indicator_is_filler() {
        let text = format!("{} REFERENCES {}", prose(40), prose(40));
        assert!(is_filler(&text));
    }

    #[test]
    fn test_sparse_line_broken_page() {
        let sparse = (1..=25)
            .map(|i| format!("Section{:03}", i))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(sparse.trim().len() >= 100);
        assert!(is_filler(&sparse));
    }

    #[test]
    fn test_dense_prose_is_not_filler() {
        assert!(!is_filler(&prose(120)));
    }
}
