//! Top-percentage page selection.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::PageScore;

/// Which pages to pull out of a ranked document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    /// Share of the candidate pages to keep, in (0, 100]
    pub percentage: f64,
    /// Pages scoring below this are never selected
    pub min_score: f64,
    /// Drop pages flagged as filler before the percentage cut
    pub exclude_filler: bool,
}

impl Default for SelectionCriteria {
    fn default() -> Self {
        Self {
            percentage: 20.0,
            min_score: 0.0,
            exclude_filler: true,
        }
    }
}

impl SelectionCriteria {
    /// Create criteria with defaults (top 20%, no floor, filler excluded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every page that passes the filters.
    pub fn all() -> Self {
        Self {
            percentage: 100.0,
            min_score: 0.0,
            exclude_filler: false,
        }
    }

    /// Set the percentage of candidates to keep.
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Set the minimum total score.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Exclude or include filler pages.
    pub fn with_exclude_filler(mut self, exclude: bool) -> Self {
        self.exclude_filler = exclude;
        self
    }

    /// Reject out-of-domain parameters instead of clamping them.
    pub fn validate(&self) -> Result<()> {
        if !self.percentage.is_finite() || self.percentage <= 0.0 || self.percentage > 100.0 {
            return Err(Error::InvalidPercentage(self.percentage));
        }
        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(Error::InvalidMinScore(self.min_score));
        }
        Ok(())
    }

    /// Number of pages to keep out of `candidates`: at least one when any
    /// candidate exists, zero otherwise.
    pub fn target_count(&self, candidates: usize) -> usize {
        if candidates == 0 {
            return 0;
        }
        let count = (candidates as f64 * self.percentage / 100.0).floor() as usize;
        count.clamp(1, candidates)
    }
}

/// Select pages from an already rank-ordered slice.
///
/// The result keeps rank order.
///
/// # Errors
///
/// [`Error::InvalidPercentage`] or [`Error::InvalidMinScore`] when the
/// criteria are out of domain.
pub fn select<'a>(ranked: &'a [PageScore], criteria: &SelectionCriteria) -> Result<Vec<&'a PageScore>> {
    criteria.validate()?;

    let candidates: Vec<&PageScore> = ranked
        .iter()
        .filter(|p| !(criteria.exclude_filler && p.is_filler))
        .filter(|p| p.total_score >= criteria.min_score)
        .collect();

    let count = criteria.target_count(candidates.len());
    log::debug!(
        "Selecting {} of {} candidate pages ({} total)",
        count,
        candidates.len(),
        ranked.len()
    );

    Ok(candidates.into_iter().take(count).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::tests::page;

    fn numbers(pages: &[&PageScore]) -> Vec<usize> {
        pages.iter().map(|p| p.page_number).collect()
    }

    #[test]
    fn test_defaults() {
        let criteria = SelectionCriteria::default();
        assert_eq!(criteria.percentage, 20.0);
        assert_eq!(criteria.min_score, 0.0);
        assert!(criteria.exclude_filler);
    }

    #[test]
    fn test_validate() {
        assert!(SelectionCriteria::new().validate().is_ok());
        assert!(SelectionCriteria::new().with_percentage(100.0).validate().is_ok());
        assert!(matches!(
            SelectionCriteria::new().with_percentage(0.0).validate(),
            Err(Error::InvalidPercentage(_))
        ));
        assert!(matches!(
            SelectionCriteria::new().with_percentage(100.5).validate(),
            Err(Error::InvalidPercentage(_))
        ));
        assert!(matches!(
            SelectionCriteria::new().with_percentage(f64::NAN).validate(),
            Err(Error::InvalidPercentage(_))
        ));
        assert!(matches!(
            SelectionCriteria::new().with_min_score(-0.1).validate(),
            Err(Error::InvalidMinScore(_))
        ));
    }

    #[test]
    fn test_target_count() {
        let criteria = SelectionCriteria::new().with_percentage(20.0);
        assert_eq!(criteria.target_count(0), 0);
        assert_eq!(criteria.target_count(5), 1);
        assert_eq!(criteria.target_count(3), 1);
        assert_eq!(criteria.target_count(10), 2);
        assert_eq!(SelectionCriteria::all().target_count(7), 7);
    }

    #[test]
    fn test_filler_excluded_before_cut() {
        let ranked = vec![
            page(1, 0.9, true),
            page(2, 0.8, false),
            page(3, 0.7, false),
            page(4, 0.1, false),
        ];
        let criteria = SelectionCriteria::new().with_percentage(50.0);
        let selected = select(&ranked, &criteria).unwrap();
        // 3 candidates * 50% = 1
        assert_eq!(numbers(&selected), vec![2]);
    }

    #[test]
    fn test_min_score_floor() {
        let ranked = vec![page(1, 0.9, false), page(2, 0.4, false), page(3, 0.2, false)];
        let criteria = SelectionCriteria::all().with_min_score(0.3);
        let selected = select(&ranked, &criteria).unwrap();
        assert_eq!(numbers(&selected), vec![1, 2]);
    }

    #[test]
    fn test_no_candidates_selects_nothing() {
        let ranked = vec![page(1, 0.9, true), page(2, 0.8, true)];
        let selected = select(&ranked, &SelectionCriteria::new()).unwrap();
        assert!(selected.is_empty());
        assert!(select(&[], &SelectionCriteria::new()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_criteria_rejected() {
        let ranked = vec![page(1, 0.9, false)];
        let criteria = SelectionCriteria::new().with_percentage(250.0);
        assert!(select(&ranked, &criteria).is_err());
    }
}
