//! Page window arithmetic and the serializable page wrapper used by templates.

use serde::Serialize;

/// Number of items shown on a listing page unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;

/// Pagers with at most this many pages list every page number.
const FULL_PAGER_LIMIT: usize = 7;

/// One control rendered by the pager widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "number", rename_all = "lowercase")]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Pagination parameters driving a pager control.
///
/// `current_page` is always within `1..=max(total_pages, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    items_per_page: usize,
}

impl PageWindow {
    /// Builds a window for `total_items` split into pages of `items_per_page`,
    /// clamping `requested_page` into the valid range.
    ///
    /// A zero page size is treated as one item per page.
    pub fn new(total_items: usize, items_per_page: usize, requested_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = total_items.div_ceil(items_per_page);

        Self {
            current_page: requested_page.clamp(1, total_pages.max(1)),
            total_pages,
            total_items,
            items_per_page,
        }
    }

    /// Returns a window for the same page after the item count changed.
    pub fn with_total_items(self, total_items: usize) -> Self {
        Self::new(total_items, self.items_per_page, self.current_page)
    }

    /// Returns a window for the same page after the page size changed.
    pub fn with_items_per_page(self, items_per_page: usize) -> Self {
        Self::new(self.total_items, items_per_page, self.current_page)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// One-based `(start, end)` indexes of the items on the current page.
    ///
    /// An empty collection yields `(0, 0)`.
    pub fn range(&self) -> (usize, usize) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let start = (self.current_page - 1) * self.items_per_page + 1;
        let end = (self.current_page * self.items_per_page).min(self.total_items);
        (start, end)
    }

    /// Zero-based offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether a pager should be rendered at all.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Ordered page labels, collapsing long runs into ellipsis markers.
    pub fn labels(&self) -> Vec<PageLabel> {
        let total = self.total_pages;
        let current = self.current_page;

        if total <= FULL_PAGER_LIMIT {
            return (1..=total).map(PageLabel::Page).collect();
        }

        let mut labels = Vec::with_capacity(FULL_PAGER_LIMIT);
        if current <= 3 {
            labels.extend((1..=4).map(PageLabel::Page));
            labels.push(PageLabel::Ellipsis);
        } else if current >= total - 2 {
            labels.push(PageLabel::Page(1));
            labels.push(PageLabel::Ellipsis);
            labels.extend((total - 3..total).map(PageLabel::Page));
        } else {
            labels.push(PageLabel::Page(1));
            labels.push(PageLabel::Ellipsis);
            labels.extend((current - 1..=current + 1).map(PageLabel::Page));
            labels.push(PageLabel::Ellipsis);
        }
        labels.push(PageLabel::Page(total));

        labels
    }
}

/// A page of items together with everything the pager template needs.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageLabel>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub start: usize,
    pub end: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub visible: bool,
}

impl<T> Paginated<T> {
    /// Wraps an already sliced page of items.
    pub fn new(items: Vec<T>, window: PageWindow) -> Self {
        let (start, end) = window.range();

        Self {
            items,
            pages: window.labels(),
            page: window.current_page(),
            total_pages: window.total_pages(),
            total_items: window.total_items(),
            start,
            end,
            has_previous: window.has_previous(),
            has_next: window.has_next(),
            visible: window.is_visible(),
        }
    }

    /// Slices the requested page out of a complete list of items.
    pub fn from_items(all: Vec<T>, requested_page: usize, items_per_page: usize) -> Self {
        let window = PageWindow::new(all.len(), items_per_page, requested_page);
        let items = all
            .into_iter()
            .skip(window.offset())
            .take(window.items_per_page())
            .collect();

        Self::new(items, window)
    }
}
