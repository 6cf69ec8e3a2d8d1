//! Term analysis for the corpus vectorizer.
//!
//! ```text
//! "The Fourier transform of f"
//!     ↓ lower-case + \b\w\w+\b
//! ["the", "fourier", "transform", "of"]
//!     ↓ drop stop words
//! ["fourier", "transform"]
//!     ↓ n-grams (1, 2)
//! ["fourier", "transform", "fourier transform"]
//! ```
//!
//! Bigrams are formed after stop-word removal, so "rate of change" yields the
//! bigram "rate change".

use lazy_static::lazy_static;
use regex::Regex;

use super::stop_words::is_stop_word;

lazy_static! {
    /// Words of two or more Unicode word characters.
    static ref RE_TERM: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Lower-case word tokens with stop words removed, in text order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE_TERM
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Expand tokens into every n-gram with `min_n <= n <= max_n`.
///
/// Unigrams come first, then bigrams, and so on; n-grams are space-joined.
pub fn ngrams(tokens: &[String], (min_n, max_n): (usize, usize)) -> Vec<String> {
    let min_n = min_n.max(1);
    let mut terms = Vec::new();
    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    terms
}

/// Tokenize and expand in one step.
pub fn analyze(text: &str, ngram_range: (usize, usize)) -> Vec<String> {
    ngrams(&tokenize(text), ngram_range)
}
