//! Error types for the density analysis library.
//!
//! Most of the pipeline is total: detectors never fail and a degenerate corpus
//! is recovered locally. Errors surface only for caller mistakes (bad page
//! numbering, out-of-domain selection parameters) and for the I/O done by the
//! report writers.

/// Result type alias for density analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during page analysis and export.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Selection percentage outside (0, 100]
    #[error("Invalid selection percentage: {0} (expected a value in (0, 100])")]
    InvalidPercentage(f64),

    /// Negative or non-finite score floor
    #[error("Invalid minimum score: {0} (expected a finite value >= 0)")]
    InvalidMinScore(f64),

    /// Page numbers are 1-indexed
    #[error("Invalid page number: {0} (page numbers start at 1)")]
    InvalidPageNumber(usize),

    /// Same page number supplied twice for one document
    #[error("Duplicate page number: {0}")]
    DuplicatePage(usize),

    /// Corpus vocabulary could not be built.
    ///
    /// Never returned from [`crate::DensityAnalyzer::analyze`]; the analyzer
    /// substitutes a zero relevance vector instead.
    #[error("Vectorization failed: {0}")]
    Vectorization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
