//! Definitional cue-phrase detection.

use lazy_static::lazy_static;
use regex::Regex;

use super::density_score;

/// Definitions are rarer than formulas, so the page saturates sooner.
const DEFINITION_SATURATION: f64 = 5.0;

lazy_static! {
    static ref RE_DEFINITION: Regex = Regex::new(concat!(
        r"(?i)\bis\s+defined\s+as\b",
        r"|\brefers\s+to\b",
        r"|\bknown\s+as\b",
        r"|\bcalled\b",
        r"|\bdenotes\b",
        r"|\brepresents\b",
        r"|\bmeans\b",
        r"|\b(?:Definition|Theorem|Lemma|Corollary|Proposition)[:.]",
        r"|\bwhere\s+\w+\s+is\b",
    ))
    .unwrap();
}

/// Number of non-overlapping definition cues in `text`.
pub fn count_definition_matches(text: &str) -> usize {
    RE_DEFINITION.find_iter(text).count()
}

/// Definition density score in [0, 1]. Empty text scores 0.
pub fn detect_definitions(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    density_score(count_definition_matches(text), text, DEFINITION_SATURATION)
}
