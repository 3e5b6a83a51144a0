//! Pager state and visible page-number windows.
//!
//! [`PageWindow`] tracks the current page of a paginated product list and
//! computes the page numbers a pager control shows, with ellipsis markers
//! standing in for the skipped runs.
//!
//! # Example
//!
//! ```
//! use storefront::catalog::{PageSlot, PageWindow};
//!
//! let mut window = PageWindow::from_pages(10, 10);
//! window.change_page(5);
//! let labels: Vec<String> = window.visible_pages().iter().map(ToString::to_string).collect();
//! assert_eq!(labels, ["1", "…", "4", "5", "6", "…", "10"]);
//! ```

use std::fmt;

use super::error::CatalogError;
use crate::commerce::Metadata;

/// Number of page slots shown before the window collapses into ellipses.
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// Page sizes offered by the "items per page" selector.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 20, 50];

/// Items per page when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Side of the window an ellipsis marker sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EllipsisSide {
    /// Between page 1 and the inner run.
    Left,
    /// Between the inner run and the last page.
    Right,
}

/// One slot of a pager control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number.
    Page(u32),
    /// A gap marker.
    Ellipsis(EllipsisSide),
}

impl fmt::Display for PageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(number) => write!(f, "{number}"),
            Self::Ellipsis(_) => f.write_str("…"),
        }
    }
}

/// Computes the slots shown for `current_page` out of `total_pages`.
///
/// Small page counts are listed in full. Larger counts always show the first
/// and last page around a run centred on the current page; near either end
/// the run widens so four pages stay visible on that side. A `max_visible`
/// of zero behaves as one.
#[must_use]
pub fn compute_visible_pages(current_page: u32, total_pages: u32, max_visible: u32) -> Vec<PageSlot> {
    if total_pages <= max_visible.max(1) {
        return (1..=total_pages).map(PageSlot::Page).collect();
    }

    let mut start = current_page.saturating_sub(1).max(2);
    let mut end = current_page.saturating_add(1).min(total_pages - 1);
    if current_page <= 3 {
        end = 4;
    }
    if current_page >= total_pages.saturating_sub(2) {
        start = total_pages.saturating_sub(3);
    }
    // Only narrower-than-default windows can push the run past either end.
    end = end.min(total_pages - 1);
    start = start.max(2);

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Ellipsis(EllipsisSide::Left));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total_pages - 1 {
        slots.push(PageSlot::Ellipsis(EllipsisSide::Right));
    }
    slots.push(PageSlot::Page(total_pages));
    slots
}

/// Half-open index bounds `(start, end)` of the items on `current_page`.
///
/// `start` never exceeds `total_items`, so the bounds always describe a valid
/// (possibly empty) slice.
#[must_use]
pub fn slice_bounds(current_page: u32, items_per_page: u32, total_items: usize) -> (usize, usize) {
    let page_index = usize::try_from(current_page.saturating_sub(1)).unwrap_or(usize::MAX);
    let per_page = usize::try_from(items_per_page).unwrap_or(usize::MAX);
    let start = page_index.saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    (start, end)
}

/// Number of pages needed for `total_items` at `items_per_page`.
#[must_use]
pub const fn page_count(total_items: u32, items_per_page: u32) -> u32 {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Current pager position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page (1-based).
    current_page: u32,
    /// Items per page.
    items_per_page: u32,
    /// Total number of pages.
    total_pages: u32,
    /// Total number of items when the page count was derived from it.
    total_items: Option<u32>,
    /// Slots shown before collapsing into ellipses.
    max_visible: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::from_pages(0, DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PageWindow {
    /// Creates a window whose page count is derived from an item count.
    ///
    /// A zero page size falls back to [`DEFAULT_ITEMS_PER_PAGE`].
    #[must_use]
    pub const fn from_items(total_items: u32, items_per_page: u32) -> Self {
        let per_page = non_zero_or_default(items_per_page);
        Self {
            current_page: 1,
            items_per_page: per_page,
            total_pages: page_count(total_items, per_page),
            total_items: Some(total_items),
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }

    /// Creates a window from a page count reported by the backend.
    ///
    /// A zero page size falls back to [`DEFAULT_ITEMS_PER_PAGE`].
    #[must_use]
    pub const fn from_pages(total_pages: u32, items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            items_per_page: non_zero_or_default(items_per_page),
            total_pages,
            total_items: None,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }

    /// Creates a window from commerce listing metadata.
    #[must_use]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let mut window = Self::from_pages(metadata.number_of_pages, metadata.limit);
        window.change_page(metadata.current_page);
        window
    }

    /// Sets how many slots are shown before collapsing into ellipses.
    #[must_use]
    pub const fn with_max_visible(mut self, max_visible: u32) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Returns the current page (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns the total item count if the window was built from one.
    #[must_use]
    pub const fn total_items(&self) -> Option<u32> {
        self.total_items
    }

    /// Returns true if a page exists before the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns true if a page exists after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Moves to `requested` when it lies in `1..=total_pages`.
    ///
    /// Out-of-range requests are ignored. Returns the resulting current page.
    pub fn change_page(&mut self, requested: u32) -> u32 {
        self.try_change_page(requested).unwrap_or(self.current_page)
    }

    /// Moves to `requested`, reporting out-of-range requests.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PageOutOfRange`] when `requested` is zero or
    /// beyond the last page. The current page is left unchanged.
    pub fn try_change_page(&mut self, requested: u32) -> Result<u32, CatalogError> {
        if requested == 0 || requested > self.total_pages {
            return Err(CatalogError::PageOutOfRange {
                requested,
                total_pages: self.total_pages,
            });
        }
        self.current_page = requested;
        Ok(requested)
    }

    /// Moves to the previous page if there is one.
    pub fn previous(&mut self) -> u32 {
        self.change_page(self.current_page.saturating_sub(1))
    }

    /// Moves to the next page if there is one.
    pub fn next(&mut self) -> u32 {
        self.change_page(self.current_page.saturating_add(1))
    }

    /// Changes the page size and returns to the first page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPageSize`] for a zero page size; the
    /// window is left unchanged.
    pub fn set_items_per_page(&mut self, items_per_page: u32) -> Result<(), CatalogError> {
        if items_per_page == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        self.items_per_page = items_per_page;
        if let Some(total_items) = self.total_items {
            self.total_pages = page_count(total_items, items_per_page);
        }
        self.current_page = 1;
        Ok(())
    }

    /// Returns the pager slots for the current page.
    #[must_use]
    pub fn visible_pages(&self) -> Vec<PageSlot> {
        compute_visible_pages(self.current_page, self.total_pages, self.max_visible)
    }

    /// Returns the slice bounds of the current page within `total_items`.
    #[must_use]
    pub fn slice_bounds(&self, total_items: usize) -> (usize, usize) {
        slice_bounds(self.current_page, self.items_per_page, total_items)
    }

    /// Returns the items on the current page.
    #[must_use]
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.slice_bounds(items.len());
        items.get(start..end).unwrap_or_default()
    }

    /// Describes the visible range for a caption under the pager.
    #[must_use]
    pub fn summary(&self, total_items: usize) -> PageSummary {
        let (start, end) = self.slice_bounds(total_items);
        PageSummary {
            first_item: if end > start { start + 1 } else { 0 },
            last_item: end,
            total_items,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}

const fn non_zero_or_default(items_per_page: u32) -> u32 {
    if items_per_page == 0 {
        DEFAULT_ITEMS_PER_PAGE
    } else {
        items_per_page
    }
}

/// Caption values for the visible range of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    /// 1-based index of the first visible item, or 0 when the page is empty.
    pub first_item: usize,
    /// 1-based index of the last visible item.
    pub last_item: usize,
    /// Number of items overall.
    pub total_items: usize,
    /// Current page.
    pub current_page: u32,
    /// Number of pages.
    pub total_pages: u32,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} items (page {} of {})",
            self.first_item,
            self.last_item,
            self.total_items,
            self.current_page,
            self.total_pages.max(1)
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const LEFT: PageSlot = PageSlot::Ellipsis(EllipsisSide::Left);
    const RIGHT: PageSlot = PageSlot::Ellipsis(EllipsisSide::Right);

    const fn p(number: u32) -> PageSlot {
        PageSlot::Page(number)
    }

    #[rstest]
    fn small_page_counts_are_listed_in_full(#[values(0, 1, 2, 3, 4, 5)] total: u32) {
        for current in 1..=total.max(1) {
            let slots = compute_visible_pages(current, total, DEFAULT_MAX_VISIBLE);
            let expected: Vec<PageSlot> = (1..=total).map(PageSlot::Page).collect();
            assert_eq!(slots, expected, "current {current} of {total}");
        }
    }

    #[rstest]
    #[case::first(1, vec![p(1), p(2), p(3), p(4), RIGHT, p(10)])]
    #[case::third(3, vec![p(1), p(2), p(3), p(4), RIGHT, p(10)])]
    #[case::fourth(4, vec![p(1), LEFT, p(3), p(4), p(5), RIGHT, p(10)])]
    #[case::middle(5, vec![p(1), LEFT, p(4), p(5), p(6), RIGHT, p(10)])]
    #[case::eighth(8, vec![p(1), LEFT, p(7), p(8), p(9), p(10)])]
    #[case::last(10, vec![p(1), LEFT, p(7), p(8), p(9), p(10)])]
    fn large_page_counts_collapse_into_ellipses(
        #[case] current: u32,
        #[case] expected: Vec<PageSlot>,
    ) {
        assert_eq!(compute_visible_pages(current, 10, DEFAULT_MAX_VISIBLE), expected);
    }

    #[rstest]
    fn six_pages_mark_the_single_skipped_page() {
        assert_eq!(
            compute_visible_pages(1, 6, DEFAULT_MAX_VISIBLE),
            [p(1), p(2), p(3), p(4), RIGHT, p(6)]
        );
        assert_eq!(
            compute_visible_pages(6, 6, DEFAULT_MAX_VISIBLE),
            [p(1), LEFT, p(3), p(4), p(5), p(6)]
        );
    }

    #[rstest]
    fn narrow_windows_never_repeat_or_overshoot() {
        assert_eq!(compute_visible_pages(1, 4, 3), [p(1), p(2), p(3), p(4)]);
        assert_eq!(compute_visible_pages(4, 4, 3), [p(1), p(2), p(3), p(4)]);
        assert_eq!(compute_visible_pages(1, 1, 0), [p(1)]);
        assert_eq!(compute_visible_pages(1, 2, 0), [p(1), p(2)]);
        assert_eq!(
            PageWindow::from_pages(1, 10).with_max_visible(0).visible_pages(),
            [p(1)]
        );
    }

    #[rstest]
    #[case::zero(0)]
    #[case::past_end(11)]
    fn change_page_ignores_out_of_range(#[case] requested: u32) {
        let mut window = PageWindow::from_pages(10, 10);
        window.change_page(4);
        assert_eq!(window.change_page(requested), 4);
        assert_eq!(window.current_page(), 4);
    }

    #[rstest]
    fn try_change_page_reports_out_of_range() {
        let mut window = PageWindow::from_pages(3, 10);
        assert_eq!(
            window.try_change_page(4),
            Err(CatalogError::PageOutOfRange {
                requested: 4,
                total_pages: 3,
            })
        );
        assert_eq!(window.try_change_page(3), Ok(3));
    }

    #[rstest]
    fn previous_and_next_stop_at_the_edges() {
        let mut window = PageWindow::from_pages(2, 10);
        assert!(!window.has_previous());
        assert_eq!(window.previous(), 1);
        assert_eq!(window.next(), 2);
        assert!(!window.has_next());
        assert_eq!(window.next(), 2);
    }

    #[rstest]
    #[case::middle_page(3, 10, 25, (20, 25))]
    #[case::first_page(1, 10, 25, (0, 10))]
    #[case::past_the_end(5, 10, 25, (25, 25))]
    #[case::no_items(1, 10, 0, (0, 0))]
    fn slice_bounds_cover_the_page(
        #[case] current: u32,
        #[case] per_page: u32,
        #[case] total: usize,
        #[case] expected: (usize, usize),
    ) {
        assert_eq!(slice_bounds(current, per_page, total), expected);
    }

    #[rstest]
    fn items_derive_page_count() {
        let window = PageWindow::from_items(97, 10);
        assert_eq!(window.total_pages(), 10);
        assert_eq!(window.total_items(), Some(97));
        assert_eq!(PageWindow::from_items(0, 10).total_pages(), 0);
    }

    #[rstest]
    fn changing_page_size_returns_to_first_page() {
        let mut window = PageWindow::from_items(97, 10);
        window.change_page(7);
        window.set_items_per_page(20).expect("page size should be accepted");
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.total_pages(), 5);
        assert_eq!(window.set_items_per_page(0), Err(CatalogError::InvalidPageSize));
        assert_eq!(window.items_per_page(), 20);
    }

    #[rstest]
    fn page_of_returns_current_items() {
        let items: Vec<u32> = (1..=25).collect();
        let mut window = PageWindow::from_items(25, 10);
        window.change_page(3);
        assert_eq!(window.page_of(&items), [21, 22, 23, 24, 25]);
    }

    #[rstest]
    fn summary_describes_visible_range() {
        let mut window = PageWindow::from_items(97, 10);
        window.change_page(10);
        assert_eq!(
            window.summary(97).to_string(),
            "Showing 91 to 97 of 97 items (page 10 of 10)"
        );
        assert_eq!(
            PageWindow::from_items(0, 10).summary(0).to_string(),
            "Showing 0 to 0 of 0 items (page 1 of 1)"
        );
    }

    #[rstest]
    fn metadata_positions_the_window() {
        let metadata = Metadata {
            current_page: 2,
            number_of_pages: 4,
            limit: 40,
            next_page: Some(3),
        };
        let window = PageWindow::from_metadata(&metadata);
        assert_eq!(window.current_page(), 2);
        assert_eq!(window.total_pages(), 4);
        assert_eq!(window.items_per_page(), 40);
    }
}
