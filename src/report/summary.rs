//! Plain-text extraction summary.

use std::fmt::Write;

use crate::ranking::DocumentStatistics;
use crate::scoring::PageScore;
use crate::utils::safe_float_cmp;

use super::format_keywords;

const RULE_WIDTH: usize = 60;
const TOP_PAGES_SHOWN: usize = 10;

/// Render the summary shown after an extraction.
///
/// `selected` is listed by descending score; only the first ten appear.
/// Missing statistics (empty document) render as zeros.
pub fn summary_report(
    selected: &[&PageScore],
    statistics: Option<&DocumentStatistics>,
    percentage: f64,
) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "Page Density - Extraction Summary");
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out);

    let (total, filler, content, avg, median) = statistics
        .map(|s| {
            (
                s.total_pages,
                s.filler_pages,
                s.content_pages,
                s.avg_score,
                s.median_score,
            )
        })
        .unwrap_or((0, 0, 0, 0.0, 0.0));

    let _ = writeln!(out, "Document Statistics");
    let _ = writeln!(out, "{}", light);
    let _ = writeln!(out, "Total Pages: {}", total);
    let _ = writeln!(out, "Filler Pages: {}", filler);
    let _ = writeln!(out, "Content Pages: {}", content);
    let _ = writeln!(out, "Average Score: {:.4}", avg);
    let _ = writeln!(out, "Median Score: {:.4}", median);
    let _ = writeln!(out);

    let _ = writeln!(out, "Extraction Details");
    let _ = writeln!(out, "{}", light);
    let _ = writeln!(out, "Threshold: Top {:.1}%", percentage);
    let _ = writeln!(out, "Pages Extracted: {}", selected.len());
    let _ = writeln!(out);

    let _ = writeln!(out, "Top Extracted Pages");
    let _ = writeln!(out, "{}", light);

    let mut by_score: Vec<&PageScore> = selected.to_vec();
    by_score.sort_by(|a, b| safe_float_cmp(b.total_score, a.total_score));

    for (rank, page) in by_score.iter().take(TOP_PAGES_SHOWN).enumerate() {
        let _ = writeln!(
            out,
            "{:2}. Page {:3} | Score: {:.4} | Keywords: {}",
            rank + 1,
            page.page_number,
            page.total_score,
            format_keywords(&page.keywords)
        );
    }
    if by_score.len() > TOP_PAGES_SHOWN {
        let _ = writeln!(out, "... and {} more pages", by_score.len() - TOP_PAGES_SHOWN);
    }

    let _ = writeln!(out);
    let _ = write!(out, "{}", heavy);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page_number: usize, total_score: f64) -> PageScore {
        PageScore {
            page_number,
            raw_text: String::new(),
            tfidf_score: 0.0,
            formula_score: 0.0,
            definition_score: 0.0,
            vocabulary_score: 0.0,
            total_score,
            is_filler: false,
            keywords: vec![("lattice".to_string(), 3), ("order".to_string(), 1)],
        }
    }

    #[test]
    fn test_report_lists_pages_by_score() {
        let low = page(2, 0.25);
        let high = page(7, 0.75);
        let report = summary_report(&[&low, &high], None, 20.0);

        assert!(report.contains("Threshold: Top 20.0%"));
        assert!(report.contains("Pages Extracted: 2"));
        assert!(report.contains(" 1. Page   7 | Score: 0.7500 | Keywords: lattice, order"));
        assert!(report.contains(" 2. Page   2 | Score: 0.2500"));
        assert!(report.contains("Total Pages: 0"));
    }

    #[test]
    fn test_report_truncates_long_selection() {
        let pages: Vec<PageScore> = (1..=13).map(|n| page(n, n as f64 / 20.0)).collect();
        let refs: Vec<&PageScore> = pages.iter().collect();
        let report = summary_report(&refs, None, 100.0);
        assert!(report.contains("... and 3 more pages"));
        assert!(!report.contains("11. Page"));
    }

    #[test]
    fn test_report_uses_statistics() {
        let stats = DocumentStatistics {
            total_pages: 40,
            filler_pages: 6,
            content_pages: 34,
            avg_score: 0.31,
            median_score: 0.28,
            max_score: 0.9,
            min_score: 0.0,
            std_score: 0.2,
        };
        let report = summary_report(&[], Some(&stats), 15.0);
        assert!(report.contains("Total Pages: 40"));
        assert!(report.contains("Filler Pages: 6"));
        assert!(report.contains("Average Score: 0.3100"));
        assert!(report.contains("Median Score: 0.2800"));
    }
}
