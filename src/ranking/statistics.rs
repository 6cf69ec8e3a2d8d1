//! Document-level score statistics.

use serde::{Deserialize, Serialize};

use crate::scoring::PageScore;
use crate::utils::safe_float_cmp;

/// Summary of one analyzed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    /// Number of analyzed pages
    pub total_pages: usize,
    /// Pages flagged as filler
    pub filler_pages: usize,
    /// Pages not flagged as filler
    pub content_pages: usize,
    /// Mean total score
    pub avg_score: f64,
    /// Median total score (mean of the middle pair for even counts)
    pub median_score: f64,
    /// Highest total score
    pub max_score: f64,
    /// Lowest total score
    pub min_score: f64,
    /// Population standard deviation of total scores
    pub std_score: f64,
}

/// Statistics over `pages`, or `None` when nothing was analyzed.
pub fn statistics(pages: &[PageScore]) -> Option<DocumentStatistics> {
    if pages.is_empty() {
        return None;
    }

    let mut scores: Vec<f64> = pages.iter().map(|p| p.total_score).collect();
    scores.sort_by(|a, b| safe_float_cmp(*a, *b));

    let n = scores.len() as f64;
    let avg_score = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - avg_score).powi(2)).sum::<f64>() / n;

    let mid = scores.len() / 2;
    let median_score = if scores.len() % 2 == 0 {
        (scores[mid - 1] + scores[mid]) / 2.0
    } else {
        scores[mid]
    };

    let filler_pages = pages.iter().filter(|p| p.is_filler).count();

    Some(DocumentStatistics {
        total_pages: pages.len(),
        filler_pages,
        content_pages: pages.len() - filler_pages,
        avg_score,
        median_score,
        max_score: scores[scores.len() - 1],
        min_score: scores[0],
        std_score: variance.sqrt(),
    })
}
