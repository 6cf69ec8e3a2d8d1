//! Lexical diversity (type-token ratio).

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref RE_VOCAB_WORD: Regex = Regex::new(r"\b[a-z]{3,}\b").unwrap();
}

/// Below this many tokens the ratio is statistically meaningless.
const MIN_TOKENS: usize = 10;

/// TTR that maps to a full score. Academic prose typically lands in 0.4-0.8.
const TTR_CALIBRATION: f64 = 0.6;

/// Normalized type-token ratio in [0, 1].
///
/// Tokens are ASCII-letter words of length >= 3, compared case-insensitively.
pub fn vocabulary_richness(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let lowered = text.to_lowercase();
    let words: Vec<&str> = RE_VOCAB_WORD.find_iter(&lowered).map(|m| m.as_str()).collect();
    if words.len() < MIN_TOKENS {
        return 0.0;
    }

    let unique: HashSet<&str> = words.iter().copied().collect();
    let ttr = unique.len() as f64 / words.len() as f64;
    (ttr / TTR_CALIBRATION).min(1.0)
}
