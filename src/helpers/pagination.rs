//! Pagination arithmetic for post listings

use serde::Serialize;
use std::ops::Range;

/// One entry of the page navigation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    /// A link to another page
    Page(usize),
    /// The page being displayed
    Current(usize),
    /// A gap between the window and the first or last page
    Ellipsis,
}

/// A resolved page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Current page, 1-based and always within `1..=total_pages`
    pub current: usize,
    /// Number of pages, at least 1
    pub total_pages: usize,
    pub per_page: usize,
    pub total_items: usize,
}

impl Pagination {
    /// Resolve a page for `total_items` items
    ///
    /// The requested page is clamped into range, so page 0 becomes the
    /// first page and a page past the end becomes the last one.
    pub fn new(total_items: usize, per_page: usize, requested_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page).max(1);
        let current = requested_page.clamp(1, total_pages);

        Self {
            current,
            total_pages,
            per_page,
            total_items,
        }
    }

    /// Parse an untrusted page parameter; anything but a positive integer is page 1
    pub fn parse_page(raw: Option<&str>) -> usize {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&page| page >= 1)
            .unwrap_or(1)
    }

    /// Index range of the current page's items
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.per_page).min(self.total_items);
        let end = (self.current * self.per_page).min(self.total_items);
        start..end
    }

    /// The current page's items
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn prev(&self) -> Option<usize> {
        self.has_prev().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.current + 1)
    }

    /// Page links around the current page
    ///
    /// Shows up to `mid_size` pages on each side of the current one. The
    /// first and last pages are always reachable, with an ellipsis when the
    /// window does not reach them.
    pub fn window(&self, mid_size: usize) -> Vec<PageLink> {
        let current = self.current;
        let total = self.total_pages;

        let start = current.saturating_sub(mid_size).max(1);
        let end = current.saturating_add(mid_size).min(total);

        let mut links = Vec::new();

        if start > 1 {
            links.push(PageLink::Page(1));
            if start > 2 {
                links.push(PageLink::Ellipsis);
            }
        }

        for page in start..=end {
            if page == current {
                links.push(PageLink::Current(page));
            } else {
                links.push(PageLink::Page(page));
            }
        }

        if end < total {
            if end < total - 1 {
                links.push(PageLink::Ellipsis);
            }
            links.push(PageLink::Page(total));
        }

        links
    }
}
