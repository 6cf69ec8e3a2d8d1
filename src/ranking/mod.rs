//! Page ranking, selection and summary statistics.
//!
//! Ranking order is fully deterministic:
//! 1. `total_score` descending
//! 2. `page_number` ascending on ties
//!
//! Selection filters first (filler flag, score floor) and then takes the top
//! percentage of what is left, so the percentage is relative to the candidate
//! count and not to the document length.

mod selection;
mod statistics;

pub use selection::{select, SelectionCriteria};
pub use statistics::{statistics, DocumentStatistics};

use std::cmp::Ordering;

use crate::scoring::PageScore;
use crate::utils::safe_float_cmp;

/// Compare two pages for ranking. `Less` means `a` ranks ahead of `b`.
pub fn compare_pages(a: &PageScore, b: &PageScore) -> Ordering {
    match safe_float_cmp(b.total_score, a.total_score) {
        Ordering::Equal => a.page_number.cmp(&b.page_number),
        ord => ord,
    }
}

/// Sort pages into rank order in place.
pub fn rank(pages: &mut [PageScore]) {
    pages.sort_by(compare_pages);
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn page(page_number: usize, total_score: f64, is_filler: bool) -> PageScore {
        PageScore {
            page_number,
            raw_text: String::new(),
            tfidf_score: 0.0,
            formula_score: 0.0,
            definition_score: 0.0,
            vocabulary_score: 0.0,
            total_score,
            is_filler,
            keywords: Vec::new(),
        }
    }

    #[test]
    fn test_rank_descending_by_score() {
        let mut pages = vec![page(1, 0.2, false), page(2, 0.9, false), page(3, 0.5, false)];
        rank(&mut pages);
        let order: Vec<usize> = pages.iter().map(|p| p.page_number).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_broken_by_page_number() {
        let mut pages = vec![page(4, 0.5, false), page(2, 0.5, false), page(9, 0.5, false)];
        rank(&mut pages);
        let order: Vec<usize> = pages.iter().map(|p| p.page_number).collect();
        assert_eq!(order, vec![2, 4, 9]);
    }

    #[test]
    fn test_compare_pages() {
        let high = page(5, 0.8, false);
        let low = page(1, 0.3, false);
        assert_eq!(compare_pages(&high, &low), Ordering::Less);
        assert_eq!(compare_pages(&low, &high), Ordering::Greater);
        assert_eq!(compare_pages(&high, &high.clone()), Ordering::Equal);
    }
}
