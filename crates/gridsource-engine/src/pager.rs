//! Slices the candidate sequence into the requested page and formats the
//! visible-range summary.

use gridsource_types::PageSize;

/// Resolved paging parameters for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// 1-based page index.
    pub page_index: usize,
    pub page_size: PageSize,
}

impl PageBounds {
    /// Normalize raw request parameters: page 0 becomes 1, unset size
    /// becomes the default.
    pub fn resolve(page_index: usize, page_size: PageSize) -> Self {
        Self {
            page_index: if page_index == 0 { 1 } else { page_index },
            page_size: page_size.normalize(),
        }
    }

    /// Take this page out of the candidate sequence.
    pub fn slice<R>(&self, records: Vec<R>) -> Vec<R> {
        let size = self.page_size.limit();
        records
            .into_iter()
            .skip(self.page_index * size - size)
            .take(size)
            .collect()
    }

    /// Human-readable visible range within the total candidate count.
    ///
    /// Display bounds clamp down to `total_rows`, so an empty set reads
    /// `Results: 0-0 of 0` rather than overshooting.
    pub fn summary(&self, total_rows: usize) -> String {
        let size = self.page_size.limit();
        let mut start = self.page_index * size - size + 1;
        let mut end = start + size - 1;

        if start >= total_rows {
            start = total_rows;
        }
        if end >= total_rows {
            end = total_rows;
        }

        format!("Results: {}-{} of {}", start, end, total_rows)
    }
}
