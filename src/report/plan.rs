//! Page plan for building a derived PDF from selected pages.

use crate::scoring::PageScore;

/// Selected pages in document order, ready for a page copier.
///
/// Selection returns pages in rank order; a derived document wants them in
/// their original order. Pages beyond the source document are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionPlan {
    page_numbers: Vec<usize>,
}

impl ExtractionPlan {
    /// Build a plan from selected pages and the source document's page count.
    pub fn new<'a, I>(selected: I, source_page_count: usize) -> Self
    where
        I: IntoIterator<Item = &'a PageScore>,
    {
        let mut page_numbers: Vec<usize> = selected
            .into_iter()
            .map(|p| p.page_number)
            .filter(|&n| {
                let in_range = n >= 1 && n <= source_page_count;
                if !in_range {
                    log::warn!(
                        "Skipping page {} outside source document ({} pages)",
                        n,
                        source_page_count
                    );
                }
                in_range
            })
            .collect();
        page_numbers.sort_unstable();
        page_numbers.dedup();
        Self { page_numbers }
    }

    /// 1-indexed page numbers, ascending.
    pub fn page_numbers(&self) -> &[usize] {
        &self.page_numbers
    }

    /// 0-indexed page indices, ascending.
    pub fn page_indices(&self) -> Vec<usize> {
        self.page_numbers.iter().map(|n| n - 1).collect()
    }

    /// Number of pages to copy.
    pub fn len(&self) -> usize {
        self.page_numbers.len()
    }

    /// True when nothing would be copied.
    pub fn is_empty(&self) -> bool {
        self.page_numbers.is_empty()
    }
}
