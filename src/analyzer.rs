//! End-to-end page density analysis.
//!
//! ```text
//! PageText[] ──┬─▶ detectors (per page, parallel) ──┐
//!              │                                     ├─▶ PageScore[] ─▶ rank ─▶ Analysis
//!              └─▶ corpus relevance (all pages) ─────┘
//! ```
//!
//! [`DensityAnalyzer`] only holds configuration. Each call to
//! [`DensityAnalyzer::analyze`] returns a fresh, immutable [`Analysis`]; a new
//! document simply produces a new value.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::AnalysisConfig;
use crate::corpus::corpus_relevance;
use crate::detectors::DetectorResult;
use crate::error::Result;
use crate::page::{validate_pages, PageText};
use crate::ranking::{self, DocumentStatistics, SelectionCriteria};
use crate::scoring::PageScore;

/// Page density analyzer.
///
/// # Example
///
/// ```ignore
/// use pdf_density::{DensityAnalyzer, PageText, SelectionCriteria};
///
/// let pages = PageText::from_texts(page_texts);
/// let analysis = DensityAnalyzer::new().analyze(pages)?;
/// let top = analysis.select(&SelectionCriteria::new().with_percentage(10.0))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct DensityAnalyzer {
    config: AnalysisConfig,
}

impl DensityAnalyzer {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Score and rank every page of one document.
    ///
    /// An empty page list yields an empty [`Analysis`]. So does a page list
    /// with malformed numbering (page 0 or a repeated number), which is
    /// logged as a warning; use [`DensityAnalyzer::try_analyze`] to receive
    /// the error instead.
    pub fn analyze(&self, pages: Vec<PageText>) -> Result<Analysis> {
        if let Err(e) = validate_pages(&pages) {
            log::warn!("Malformed page collection, returning empty analysis: {}", e);
            return Ok(Analysis::default());
        }
        Ok(self.score(pages))
    }

    /// Like [`DensityAnalyzer::analyze`], but malformed numbering is an error.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidPageNumber`] or [`crate::Error::DuplicatePage`]
    /// when the page numbering is malformed.
    pub fn try_analyze(&self, pages: Vec<PageText>) -> Result<Analysis> {
        validate_pages(&pages)?;
        Ok(self.score(pages))
    }

    fn score(&self, pages: Vec<PageText>) -> Analysis {
        if pages.is_empty() {
            log::info!("No pages to analyze");
            return Analysis::default();
        }

        let blank = pages.iter().filter(|p| p.is_blank()).count();
        log::info!("Analyzing {} pages ({} blank)", pages.len(), blank);
        let start = Instant::now();

        let detected = self.detect_all(&pages);
        log::debug!("Detectors finished in {:?}", start.elapsed());

        // Synchronization point: relevance needs every page's text
        let texts: Vec<&str> = pages.iter().map(|p| p.text.as_str()).collect();
        let relevance = corpus_relevance(&texts, &self.config.corpus);
        log::debug!("Corpus relevance finished in {:?}", start.elapsed());

        let mut scores: Vec<PageScore> = pages
            .into_iter()
            .zip(detected)
            .zip(relevance)
            .map(|((page, detected), tfidf)| {
                PageScore::from_parts(page.page_number, page.text, tfidf, detected)
            })
            .collect();

        ranking::rank(&mut scores);
        log::info!("Analysis complete in {:?}", start.elapsed());

        Analysis { pages: scores }
    }

    /// Score a document given only its page texts, numbered 1..=n.
    pub fn analyze_texts<I, S>(&self, texts: I) -> Result<Analysis>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.analyze(PageText::from_texts(texts))
    }

    fn detect_all(&self, pages: &[PageText]) -> Vec<DetectorResult> {
        let keyword_count = self.config.keyword_count;

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return pages
                    .par_iter()
                    .map(|p| DetectorResult::evaluate(&p.text, keyword_count))
                    .collect();
            }
        }

        pages
            .iter()
            .map(|p| DetectorResult::evaluate(&p.text, keyword_count))
            .collect()
    }
}

/// Ranked result of analyzing one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pages: Vec<PageScore>,
}

impl Analysis {
    /// All pages in rank order.
    pub fn pages(&self) -> &[PageScore] {
        &self.pages
    }

    /// Number of analyzed pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when no pages were analyzed.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up one page by its 1-indexed number.
    pub fn page(&self, page_number: usize) -> Option<&PageScore> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }

    /// Pages matching `criteria`, in rank order.
    pub fn select(&self, criteria: &SelectionCriteria) -> Result<Vec<&PageScore>> {
        ranking::select(&self.pages, criteria)
    }

    /// Document statistics, `None` if no pages were analyzed.
    pub fn statistics(&self) -> Option<DocumentStatistics> {
        ranking::statistics(&self.pages)
    }

}
