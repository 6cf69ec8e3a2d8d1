//! Configuration for page density analysis.
//!
//! Composite weights are fixed constants in [`crate::scoring`] and are not
//! configurable here.

/// Corpus relevance (TF-IDF) vectorization settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusConfig {
    /// Maximum vocabulary size, keeping the most frequent terms.
    pub max_features: usize,

    /// Terms present in more than this fraction of pages are dropped.
    pub max_df_ratio: f64,

    /// Terms present in fewer than this many pages are dropped.
    pub min_df: usize,

    /// Inclusive n-gram range, (1, 2) = unigrams and bigrams.
    pub ngram_range: (usize, usize),
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            max_features: 1000,
            max_df_ratio: 0.8,
            min_df: 1,
            ngram_range: (1, 2),
        }
    }
}

impl CorpusConfig {
    /// Set the vocabulary cap.
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Set the maximum document-frequency ratio.
    pub fn with_max_df_ratio(mut self, ratio: f64) -> Self {
        self.max_df_ratio = ratio;
        self
    }

    /// Set the minimum document frequency.
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set the n-gram range. A reversed range is swapped; zero is raised to 1.
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let (lo, hi) = if min_n <= max_n {
            (min_n, max_n)
        } else {
            (max_n, min_n)
        };
        self.ngram_range = (lo.max(1), hi.max(1));
        self
    }
}

/// Page density analysis configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Number of keywords kept per page.
    pub keyword_count: usize,

    /// Corpus relevance settings.
    pub corpus: CorpusConfig,

    /// Run per-page detectors on the rayon pool.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            keyword_count: 10,
            corpus: CorpusConfig::default(),
            parallel: true,
        }
    }

    /// Set the number of keywords extracted per page.
    pub fn with_keyword_count(mut self, count: usize) -> Self {
        self.keyword_count = count;
        self
    }

    /// Replace the corpus settings.
    pub fn with_corpus(mut self, corpus: CorpusConfig) -> Self {
        self.corpus = corpus;
        self
    }

    /// Enable or disable parallel detector evaluation.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.keyword_count, 10);
        assert!(config.parallel);
        assert_eq!(config.corpus.max_features, 1000);
        assert_eq!(config.corpus.min_df, 1);
        assert_eq!(config.corpus.ngram_range, (1, 2));
        assert!((config.corpus.max_df_ratio - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfig::new()
            .with_keyword_count(5)
            .with_parallel(false)
            .with_corpus(CorpusConfig::default().with_max_features(50));

        assert_eq!(config.keyword_count, 5);
        assert!(!config.parallel);
        assert_eq!(config.corpus.max_features, 50);
    }

    #[test]
    fn test_ngram_range_normalized() {
        let corpus = CorpusConfig::default().with_ngram_range(3, 0);
        assert_eq!(corpus.ngram_range, (1, 3));
    }
}
