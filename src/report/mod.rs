//! Export-side views of an analysis.
//!
//! These feed the collaborators that write derived files: a per-page CSV
//! summary, a human-readable text report, and the page plan a PDF page copier
//! follows. Nothing here touches PDF bytes.

mod csv;
mod plan;
mod summary;

pub use csv::{write_summary_csv, write_summary_csv_file, CSV_HEADER};
pub use plan::ExtractionPlan;
pub use summary::summary_report;

use crate::detectors::Keyword;

/// Keywords shown per page in exported summaries.
pub const REPORT_KEYWORDS: usize = 5;

/// `word(count), word(count), ...` for the first [`REPORT_KEYWORDS`] keywords.
pub(crate) fn format_keywords_with_counts(keywords: &[Keyword]) -> String {
    keywords
        .iter()
        .take(REPORT_KEYWORDS)
        .map(|(word, count)| format!("{}({})", word, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `word, word, ...` for the first [`REPORT_KEYWORDS`] keywords.
pub(crate) fn format_keywords(keywords: &[Keyword]) -> String {
    keywords
        .iter()
        .take(REPORT_KEYWORDS)
        .map(|(word, _)| word.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
