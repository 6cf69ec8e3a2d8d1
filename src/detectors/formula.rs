//! Mathematical formula detection.
//!
//! Counts matches of a union of formula-shaped patterns and turns the count
//! into a density score. A page saturates at 10 matches per 1000 characters.

use lazy_static::lazy_static;
use regex::Regex;

use super::density_score;

/// Matches per 1000 chars that map to a score of 1.0.
const FORMULA_SATURATION: f64 = 10.0;

lazy_static! {
    /// Union of formula patterns, case-insensitive:
    /// - math symbols
    /// - `x = value`, `x ≤ value` style equations
    /// - parenthesized expression followed by an operator
    /// - `3 × 4` multiplication
    /// - `x^2` exponents
    /// - `\macro{...}` LaTeX-like syntax
    /// - `$...$` math spans
    static ref RE_FORMULA: Regex = Regex::new(concat!(
        r"(?i)[∫∑∏∂∇±≤≥≠≈√∞]",
        r"|\b[a-zA-Z]\s*[=<>≤≥]\s*[0-9a-zA-Z\+\-\*/\^]+",
        r"|\([a-zA-Z0-9\+\-\*/\^]+\)\s*[\+\-\*/\^]",
        r"|\b\d+\s*[×·]\s*\d+",
        r"|\b[a-zA-Z]\^\d+",
        r"|\\\w+\{[^}]*\}",
        r"|\$[^$]+\$",
    ))
    .unwrap();
}

/// Number of non-overlapping formula matches in `text`.
pub fn count_formula_matches(text: &str) -> usize {
    RE_FORMULA.find_iter(text).count()
}

/// Formula density score in [0, 1]. Empty text scores 0.
pub fn detect_formulas(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    density_score(count_formula_matches(text), text, FORMULA_SATURATION)
}
