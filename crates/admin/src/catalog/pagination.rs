//! Page slicing over an in-memory list.

use std::ops::Range;

/// Page sizes offered in the "show per page" select.
pub const ITEMS_PER_PAGE_OPTIONS: [usize; 4] = [25, 50, 75, 100];

/// Page size used when the `limit` query parameter is absent or invalid.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Pages shown on each side of the current page in the page links.
const WINDOW_RADIUS: usize = 2;

/// Position within a paginated list.
///
/// `current_page` is 1-based. Both `current_page` and `per_page` are clamped
/// to at least 1; a page past the end is allowed and yields no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    per_page: usize,
    total_items: usize,
}

/// An entry in the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

impl Pagination {
    #[must_use]
    pub fn new(current_page: usize, per_page: usize, total_items: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            per_page: per_page.max(1),
            total_items,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages; zero when there are no items.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Index range of the current page, clamped to the list.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.per_page)
            .min(self.total_items);
        let end = start.saturating_add(self.per_page).min(self.total_items);
        start..end
    }

    /// The items on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.range()).unwrap_or_default()
    }

    /// 1-based index of the first item shown, or 0 if the page is empty.
    #[must_use]
    pub fn first_item(&self) -> usize {
        let range = self.range();
        if range.is_empty() { 0 } else { range.start + 1 }
    }

    /// 1-based index of the last item shown, or 0 if the page is empty.
    #[must_use]
    pub fn last_item(&self) -> usize {
        let range = self.range();
        if range.is_empty() { 0 } else { range.end }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Page numbers to link to: first, last, and a window around the current
    /// page, with gaps where pages are skipped.
    #[must_use]
    pub fn links(&self) -> Vec<PageLink> {
        let total = self.total_pages();
        let low = self.current_page.saturating_sub(WINDOW_RADIUS).max(1);
        let high = self.current_page.saturating_add(WINDOW_RADIUS).min(total);

        let mut links = Vec::new();
        let mut last_shown = 0;
        for page in 1..=total {
            if page == 1 || page == total || (low..=high).contains(&page) {
                if page > last_shown + 1 {
                    links.push(PageLink::Gap);
                }
                links.push(PageLink::Page(page));
                last_shown = page;
            }
        }
        links
    }
}
