// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::type_complexity)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Density
//!
//! Rank the pages of a PDF by information density and pull out the pages worth
//! reading.
//!
//! ## Scoring
//!
//! Each page gets a composite score in [0, 1]:
//!
//! ```text
//! total = 0.60 × corpus relevance (TF-IDF, relative to the whole document)
//!       + 0.15 × formula density
//!       + 0.15 × definition density
//!       + 0.10 × vocabulary richness
//! ```
//!
//! Pages are also classified as filler (tables of contents, references,
//! indices, near-empty pages) so selection can skip them.
//!
//! ## Pipeline
//!
//! ```text
//! PageText[]
//!     ↓
//! [detectors]  per page, parallel (formulas, definitions, vocabulary, filler, keywords)
//!     ↓
//! [corpus]     whole document at once (TF-IDF relevance)
//!     ↓
//! [scoring]    weighted composite → PageScore
//!     ↓
//! [ranking]    rank → select → statistics
//!     ↓
//! [report]     CSV / text summary / extraction plan
//! ```
//!
//! PDF text extraction and page copying are left to the caller; this crate
//! works on already-extracted page text.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_density::{DensityAnalyzer, PageText, SelectionCriteria};
//!
//! # fn main() -> pdf_density::Result<()> {
//! let pages = vec![
//!     PageText::new(1, "Table of Contents\n1. Intro ... 2. Methods ..."),
//!     PageText::new(2, "A vector space is defined as a set V with ..."),
//! ];
//!
//! let analysis = DensityAnalyzer::new().analyze(pages)?;
//! for page in analysis.select(&SelectionCriteria::new().with_percentage(50.0))? {
//!     println!("page {} scored {:.3}", page.page_number, page.total_score);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Input model
pub mod page;

// Page-local signals
pub mod detectors;

// Document-wide relevance
pub mod corpus;

// Composite score and ranking
pub mod ranking;
pub mod scoring;

// Orchestration
pub mod analyzer;

// Export views
pub mod report;

// Re-exports
pub use analyzer::{Analysis, DensityAnalyzer};
pub use config::{AnalysisConfig, CorpusConfig};
pub use corpus::corpus_relevance;
pub use detectors::{
    detect_definitions, detect_formulas, extract_keywords, is_filler, vocabulary_richness,
    DetectorResult, Keyword,
};
pub use error::{Error, Result};
pub use page::PageText;
pub use ranking::{rank, select, statistics, DocumentStatistics, SelectionCriteria};
pub use report::{summary_report, write_summary_csv, ExtractionPlan};
pub use scoring::{combine, PageScore};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values.
    /// This ensures that sorting operations never panic due to NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f64::NAN, f64::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f64::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f64::NAN), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pdf_density");
    }
}
