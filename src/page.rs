//! Per-page text as delivered by the PDF text-extraction collaborator.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw text of one PDF page.
///
/// `page_number` is 1-indexed. Empty text is valid and represents a blank or
/// image-only page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-indexed page number, unique within a document
    pub page_number: usize,
    /// Extracted text, possibly empty
    #[serde(default)]
    pub text: String,
}

impl PageText {
    /// Create a page record.
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }

    /// Number pages 1..=n in the order given.
    pub fn from_texts<I, S>(texts: I) -> Vec<PageText>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(idx, text)| PageText::new(idx + 1, text))
            .collect()
    }

    /// True when the page carries no text at all.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Check page numbering: every number >= 1 and unique.
pub fn validate_pages(pages: &[PageText]) -> Result<()> {
    let mut seen = HashSet::with_capacity(pages.len());
    for page in pages {
        if page.page_number == 0 {
            return Err(Error::InvalidPageNumber(0));
        }
        if !seen.insert(page.page_number) {
            return Err(Error::DuplicatePage(page.page_number));
        }
    }
    Ok(())
}
