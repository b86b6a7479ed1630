//! Offset bookkeeping for raw data browsing.

use std::ops::Range;

/// Rows shown per page of raw data
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    total: usize,
    page_size: usize,
    offset: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once the offset has reached or passed the row count.
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.total
    }

    /// Range of the next page; advances the offset by one page.
    /// An empty dataset still yields one (empty) page.
    pub fn next_page(&mut self) -> Option<Range<usize>> {
        if self.offset > 0 && self.is_exhausted() {
            return None;
        }
        let start = self.offset.min(self.total);
        let end = (self.offset + self.page_size).min(self.total);
        self.offset += self.page_size;
        Some(start..end)
    }
}
