//! Page-local text signal detectors.
//!
//! Every detector is a pure function over a single page's text: no shared
//! state, no failure modes. They can run in any order or in parallel.
//!
//! ```text
//! page text ──┬── formula::detect_formulas        → [0, 1]
//!             ├── definition::detect_definitions  → [0, 1]
//!             ├── vocabulary::vocabulary_richness → [0, 1]
//!             ├── filler::is_filler               → bool
//!             └── keywords::extract_keywords      → [(word, count)]
//! ```

pub mod definition;
pub mod filler;
pub mod formula;
pub mod keywords;
pub mod vocabulary;

pub use definition::detect_definitions;
pub use filler::is_filler;
pub use formula::detect_formulas;
pub use keywords::{extract_keywords, Keyword};
pub use vocabulary::vocabulary_richness;

use serde::{Deserialize, Serialize};

/// Characters per density window.
const DENSITY_WINDOW_CHARS: f64 = 1000.0;

/// Per-page detector outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorResult {
    /// Formula density score in [0, 1]
    pub formula_score: f64,
    /// Definition density score in [0, 1]
    pub definition_score: f64,
    /// Normalized type-token ratio in [0, 1]
    pub vocabulary_score: f64,
    /// Structural filler page (TOC, references, near-empty, ...)
    pub is_filler: bool,
    /// Most frequent content words, descending by count
    pub keywords: Vec<Keyword>,
}

impl DetectorResult {
    /// Run every detector over one page's text.
    pub fn evaluate(text: &str, keyword_count: usize) -> Self {
        Self {
            formula_score: detect_formulas(text),
            definition_score: detect_definitions(text),
            vocabulary_score: vocabulary_richness(text),
            is_filler: is_filler(text),
            keywords: extract_keywords(text, keyword_count),
        }
    }
}

/// Matches per 1000 characters, scaled by `saturation` and capped at 1.0.
///
/// Texts shorter than one window count as a full window so a couple of
/// matches on a tiny page do not blow up the density.
pub(crate) fn density_score(match_count: usize, text: &str, saturation: f64) -> f64 {
    let char_count = text.chars().count() as f64;
    let windows = (char_count / DENSITY_WINDOW_CHARS).max(1.0);
    let density = match_count as f64 / windows;
    (density / saturation).min(1.0)
}
