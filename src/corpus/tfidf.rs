//! TF-IDF vectorization over the pages of one document.
//!
//! Pipeline:
//!
//! 1. Count n-gram terms per page ([`super::tokenizer::analyze`]).
//! 2. Drop terms whose document frequency is above `max_df_ratio * n_pages`
//!    or below `min_df`.
//! 3. Keep the `max_features` terms with the highest corpus-wide count.
//! 4. Weight = raw count × smoothed idf, `ln((1 + n) / (1 + df)) + 1`.
//! 5. L2-normalize each page row.
//!
//! All intermediate maps are ordered (`BTreeMap`) so floating-point sums are
//! accumulated in the same order on every run.

use std::collections::BTreeMap;

use crate::config::CorpusConfig;
use crate::error::{Error, Result};

use super::tokenizer::analyze;

/// A fitted TF-IDF matrix: one sparse, L2-normalized row per page.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    rows: Vec<Vec<(usize, f64)>>,
}

impl TfIdfMatrix {
    /// Vocabulary in column order (lexicographic).
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Smoothed idf per vocabulary column.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Number of page rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Sparse `(column, weight)` entries of one page, by ascending column.
    pub fn row(&self, page_idx: usize) -> &[(usize, f64)] {
        self.rows.get(page_idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of term weights per page.
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|(_, w)| w).sum())
            .collect()
    }
}

/// TF-IDF vectorizer configured from a [`CorpusConfig`].
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    config: CorpusConfig,
}

impl TfIdfVectorizer {
    /// Create a vectorizer.
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    /// Build the vocabulary from `texts` and weight every page against it.
    ///
    /// # Errors
    ///
    /// [`Error::Vectorization`] when no vocabulary survives tokenization and
    /// document-frequency pruning.
    pub fn fit_transform<S: AsRef<str>>(&self, texts: &[S]) -> Result<TfIdfMatrix> {
        let n_docs = texts.len();

        let page_counts: Vec<BTreeMap<String, usize>> = texts
            .iter()
            .map(|text| {
                let mut counts = BTreeMap::new();
                for term in analyze(text.as_ref(), self.config.ngram_range) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // term -> (document frequency, corpus count)
        let mut stats: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for counts in &page_counts {
            for (term, &count) in counts {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += count;
            }
        }

        if stats.is_empty() {
            return Err(Error::Vectorization(
                "empty vocabulary; pages contain only stop words or no text".to_string(),
            ));
        }

        let max_doc_count = self.config.max_df_ratio * n_docs as f64;
        let min_doc_count = self.config.min_df;
        if max_doc_count < min_doc_count as f64 {
            return Err(Error::Vectorization(format!(
                "max_df ({:.2} pages) is below min_df ({} pages)",
                max_doc_count, min_doc_count
            )));
        }

        let mut kept: Vec<(&str, usize, usize)> = stats
            .into_iter()
            .filter(|(_, (df, _))| (*df as f64) <= max_doc_count && *df >= min_doc_count)
            .map(|(term, (df, total))| (term, df, total))
            .collect();

        if kept.len() > self.config.max_features {
            // Highest corpus count first; ties by term
            kept.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));
            kept.truncate(self.config.max_features);
            kept.sort_by(|a, b| a.0.cmp(b.0));
        }

        if kept.is_empty() {
            return Err(Error::Vectorization(
                "after pruning, no terms remain".to_string(),
            ));
        }

        let columns: BTreeMap<&str, usize> = kept
            .iter()
            .enumerate()
            .map(|(col, (term, _, _))| (*term, col))
            .collect();
        let idf: Vec<f64> = kept
            .iter()
            .map(|(_, df, _)| ((1.0 + n_docs as f64) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let rows = page_counts
            .iter()
            .map(|counts| {
                let mut row: Vec<(usize, f64)> = counts
                    .iter()
                    .filter_map(|(term, &count)| {
                        columns
                            .get(term.as_str())
                            .map(|&col| (col, count as f64 * idf[col]))
                    })
                    .collect();
                row.sort_by_key(|(col, _)| *col);
                l2_normalize(&mut row);
                row
            })
            .collect();

        let vocabulary = kept.into_iter().map(|(term, _, _)| term.to_string()).collect();

        Ok(TfIdfMatrix {
            vocabulary,
            idf,
            rows,
        })
    }
}

fn l2_normalize(row: &mut [(usize, f64)]) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in row.iter_mut() {
            *w /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unigram_config() -> CorpusConfig {
        CorpusConfig::default().with_ngram_range(1, 1)
    }

    #[test]
    fn test_empty_vocabulary_is_error() {
        let vectorizer = TfIdfVectorizer::default();
        let result = vectorizer.fit_transform(&["", "the and of", ""]);
        assert!(matches!(result, Err(Error::Vectorization(_))));
    }

    #[test]
    fn test_single_page_prunes_everything() {
        // df = 1 > 0.8 * 1 for every term
        let vectorizer = TfIdfVectorizer::default();
        let result = vectorizer.fit_transform(&["eigenvalue decomposition"]);
        assert!(matches!(result, Err(Error::Vectorization(_))));
    }

    #[test]
    fn test_near_universal_terms_dropped() {
        let texts = [
            "matrix alpha",
            "matrix beta",
            "matrix gamma",
            "matrix delta",
            "matrix epsilon",
        ];
        let matrix = TfIdfVectorizer::new(unigram_config())
            .fit_transform(&texts)
            .unwrap();
        assert!(!matrix.vocabulary().iter().any(|t| t == "matrix"));
        assert_eq!(matrix.vocabulary().len(), 5);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let texts = ["apple banana apple", "banana cherry", "durian"];
        let matrix = TfIdfVectorizer::new(unigram_config())
            .fit_transform(&texts)
            .unwrap();
        for page in 0..matrix.n_rows() {
            let norm: f64 = matrix.row(page).iter().map(|(_, w)| w * w).sum();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_smoothed_idf() {
        let texts = ["apple banana", "banana cherry", "cherry durian"];
        let matrix = TfIdfVectorizer::new(unigram_config())
            .fit_transform(&texts)
            .unwrap();
        let col = matrix
            .vocabulary()
            .iter()
            .position(|t| t == "apple")
            .unwrap();
        let expected = (4.0f64 / 2.0).ln() + 1.0;
        assert!((matrix.idf()[col] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let texts = ["alpha alpha alpha beta", "gamma", "delta delta"];
        let config = unigram_config().with_max_features(2);
        let matrix = TfIdfVectorizer::new(config).fit_transform(&texts).unwrap();
        assert_eq!(matrix.vocabulary(), &["alpha".to_string(), "delta".to_string()]);
        assert!(matrix.row(1).is_empty());
    }

    #[test]
    fn test_bigrams_in_vocabulary() {
        let texts = ["linear algebra", "graph theory", "number theory"];
        let matrix = TfIdfVectorizer::default().fit_transform(&texts).unwrap();
        assert!(matrix.vocabulary().iter().any(|t| t == "linear algebra"));
    }
}
