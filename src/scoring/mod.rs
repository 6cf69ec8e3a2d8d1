//! Composite page scoring.
//!
//! Corpus relevance dominates; the page-local detectors refine it.
//!
//! | Component   | Weight |
//! |-------------|--------|
//! | TF-IDF      | 0.60   |
//! | Formulas    | 0.15   |
//! | Definitions | 0.15   |
//! | Vocabulary  | 0.10   |
//!
//! The weights sum to 1.0, so a total built from components in [0, 1] stays
//! in [0, 1].

use serde::{Deserialize, Serialize};

use crate::detectors::{DetectorResult, Keyword};

/// Weight of corpus relevance.
pub const TFIDF_WEIGHT: f64 = 0.60;

/// Weight of formula density.
pub const FORMULA_WEIGHT: f64 = 0.15;

/// Weight of definition density.
pub const DEFINITION_WEIGHT: f64 = 0.15;

/// Weight of vocabulary richness.
pub const VOCABULARY_WEIGHT: f64 = 0.10;

/// Weighted composite of the four component scores.
pub fn combine(tfidf: f64, formula: f64, definition: f64, vocabulary: f64) -> f64 {
    TFIDF_WEIGHT * tfidf
        + FORMULA_WEIGHT * formula
        + DEFINITION_WEIGHT * definition
        + VOCABULARY_WEIGHT * vocabulary
}

/// Finished analysis record for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageScore {
    /// 1-indexed page number
    pub page_number: usize,
    /// Page text as analyzed
    pub raw_text: String,
    /// Corpus relevance in [0, 1]
    pub tfidf_score: f64,
    /// Formula density in [0, 1]
    pub formula_score: f64,
    /// Definition density in [0, 1]
    pub definition_score: f64,
    /// Vocabulary richness in [0, 1]
    pub vocabulary_score: f64,
    /// Weighted composite in [0, 1]
    pub total_score: f64,
    /// Filler page flag
    pub is_filler: bool,
    /// Top keywords, descending by count
    pub keywords: Vec<Keyword>,
}

impl PageScore {
    /// Join a page's detector output with its corpus relevance.
    pub fn from_parts(
        page_number: usize,
        raw_text: String,
        tfidf_score: f64,
        detected: DetectorResult,
    ) -> Self {
        let total_score = combine(
            tfidf_score,
            detected.formula_score,
            detected.definition_score,
            detected.vocabulary_score,
        );
        Self {
            page_number,
            raw_text,
            tfidf_score,
            formula_score: detected.formula_score,
            definition_score: detected.definition_score,
            vocabulary_score: detected.vocabulary_score,
            total_score,
            is_filler: detected.is_filler,
            keywords: detected.keywords,
        }
    }
}
