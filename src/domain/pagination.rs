//! Client-side pagination over an ordered result list.

use std::ops::Range;

/// Number of products shown per page.
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` items. Zero items means zero pages.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Index range of page `page` (1-based) over `len` items, clamped to bounds.
///
/// Page 0 and pages past the end yield an empty range.
pub fn page_window(len: usize, page: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(len);
    let end = page.saturating_mul(PAGE_SIZE).min(len);
    start..end
}

/// Visible slice of `items` for `page`.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    &items[page_window(items.len(), page)]
}

/// Pagination controls for a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNav {
    pub current: usize,
    pub total: usize,
    /// Target of the "Previous" control; `None` when disabled.
    pub previous: Option<usize>,
    /// Target of the "Next" control; `None` when disabled.
    pub next: Option<usize>,
}

impl PageNav {
    /// Controls for `len` items at `current`, or `None` when everything fits on one page.
    pub fn for_results(len: usize, current: usize) -> Option<PageNav> {
        if len <= PAGE_SIZE {
            return None;
        }
        let total = total_pages(len);
        Some(PageNav {
            current,
            total,
            previous: (current > 1).then(|| current - 1),
            next: (current < total).then(|| current + 1),
        })
    }

    /// Page numbers offered as direct links.
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        1..=self.total
    }
}
