//! Corpus-relative page relevance.
//!
//! The one component that needs every page at once: a page's relevance is its
//! summed TF-IDF weight, rescaled so the best page in the document scores 1.0.
//! Scores are only meaningful against the exact page set they were computed
//! from; dropping or adding a page changes every value.

pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;

pub use tfidf::{TfIdfMatrix, TfIdfVectorizer};

use crate::config::CorpusConfig;
use crate::error::Result;

/// Relevance in [0, 1] for every page, in input order.
///
/// # Errors
///
/// Propagates [`crate::Error::Vectorization`] for a degenerate vocabulary.
/// Use [`corpus_relevance`] to get the zero-vector fallback instead.
pub fn try_corpus_relevance<S: AsRef<str>>(texts: &[S], config: &CorpusConfig) -> Result<Vec<f64>> {
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let matrix = TfIdfVectorizer::new(config.clone()).fit_transform(texts)?;
    log::debug!(
        "Corpus vocabulary: {} terms over {} pages",
        matrix.vocabulary().len(),
        texts.len()
    );

    Ok(normalize_to_max(matrix.row_sums()))
}

/// Relevance in [0, 1] for every page, in input order.
///
/// A degenerate corpus (all pages empty, everything filtered out) yields a
/// zero vector of the corpus length.
pub fn corpus_relevance<S: AsRef<str>>(texts: &[S], config: &CorpusConfig) -> Vec<f64> {
    match try_corpus_relevance(texts, config) {
        Ok(scores) => scores,
        Err(e) => {
            log::warn!("Corpus relevance unavailable, using zero scores: {}", e);
            vec![0.0; texts.len()]
        },
    }
}

/// Divide by the maximum so the top page scores 1.0. All-zero input stays zero.
fn normalize_to_max(mut sums: Vec<f64>) -> Vec<f64> {
    let max = sums.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        for sum in sums.iter_mut() {
            *sum /= max;
        }
    }
    sums
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus() {
        let texts: Vec<String> = Vec::new();
        assert!(corpus_relevance(&texts, &CorpusConfig::default()).is_empty());
    }

    #[test]
    fn test_degenerate_corpus_is_zero_vector() {
        let scores = corpus_relevance(&["", "", ""], &CorpusConfig::default());
        assert_eq!(scores, vec![0.0, 0.0, 0.0]);
        assert!(try_corpus_relevance(&["", ""], &CorpusConfig::default()).is_err());
    }

    #[test]
    fn test_max_page_is_one() {
        let texts = [
            "spectral graph theory laplacian eigenvalues cheeger inequality",
            "graph coloring",
            "",
        ];
        let scores = corpus_relevance(&texts, &CorpusConfig::default());
        assert_eq!(scores.len(), 3);
        let max = scores.iter().copied().fold(0.0, f64::max);
        assert!((max - 1.0).abs() < 1e-12);
        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert!(scores[1] > 0.0 && scores[1] < 1.0);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_normalize_to_max() {
        assert_eq!(normalize_to_max(vec![1.0, 2.0, 4.0]), vec![0.25, 0.5, 1.0]);
        assert_eq!(normalize_to_max(vec![0.0, 0.0]), vec![0.0, 0.0]);
    }
}
