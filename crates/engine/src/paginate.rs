//! Pagination stage: fixed-size windows over the sorted rows.

use std::fmt;

/// Number of pages for `total` rows; never less than 1.
pub fn max_page(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a requested 1-based page into `[1, max_page]`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, max_page(total, page_size))
}

/// The window of rows displayed for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current 1-based page, already clamped.
    pub page: usize,
    pub page_size: usize,
    /// Rows after filtering.
    pub total: usize,
    pub max_page: usize,
    /// Slice bounds into the sorted rows, `start..end`.
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Builds the window for `requested_page`, clamping out-of-range requests.
    pub fn new(requested_page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let max_page = max_page(total, page_size);
        let page = requested_page.clamp(1, max_page);
        let start = ((page - 1) * page_size).min(total);
        let end = (start + page_size).min(total);
        Self {
            page,
            page_size,
            total,
            max_page,
            start,
            end,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.max_page
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range_label(&self) -> RangeLabel {
        RangeLabel {
            first: (self.start + 1).min(self.total),
            last: (self.start + self.page_size).min(self.total),
            total: self.total,
        }
    }

    /// The rows of `rows` inside this window.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let end = self.end.min(rows.len());
        let start = self.start.min(end);
        &rows[start..end]
    }
}

/// "Showing first–last of total" summary for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLabel {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            write!(f, "Showing 0 of 0")
        } else {
            write!(f, "Showing {}–{} of {}", self.first, self.last, self.total)
        }
    }
}

/// Returns the requested page of `rows` and its window.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> (&[T], PageWindow) {
    let window = PageWindow::new(page, page_size, rows.len());
    (window.slice(rows), window)
}
