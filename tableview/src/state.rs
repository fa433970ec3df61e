//! Caller-owned view state

use super::FilterState;
use super::PageState;
use super::SortState;

/// The filter, sort, and page state owned by one table view.
///
/// The engine itself is stateless; each screen keeps a `TableState` and
/// passes it to [`view`](super::view) on every render. The mutators here
/// enforce the integration contract the engine expects from its callers:
/// changing a filter or the sort field resets the current page to 1, and
/// page navigation clamps to the available range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    filters: FilterState,
    sort: SortState,
    page: PageState,
}

impl TableState {
    /// Creates a default state: no filters, no sort, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default state with the given page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page: PageState::new(page_size),
            ..Self::default()
        }
    }

    /// Returns the active filters.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Returns the active sort.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Returns the active page state.
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Sets a column filter and returns to page 1.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.set(key, value);
        self.page.current = 1;
    }

    /// Clears a column filter and returns to page 1.
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.clear(key);
        self.page.current = 1;
    }

    /// Clears all filters and returns to page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.page.current = 1;
    }

    /// Cycles the sort on a column header click.
    ///
    /// A new field sorts ascending; clicking the active field flips the
    /// direction. Either way the view returns to page 1.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort.field.as_deref() == Some(field) {
            self.sort.ascending = !self.sort.ascending;
        } else {
            self.sort = SortState::asc(field);
        }
        self.page.current = 1;
    }

    /// Sets the sort explicitly and returns to page 1.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.page.current = 1;
    }

    /// Navigates to a page, clamped to `[1, total_pages]`.
    pub fn goto_page(&mut self, page: usize, total_pages: usize) {
        self.page.current = page.clamp(1, total_pages.max(1));
    }

    /// Advances one page, clamped to the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        self.goto_page(self.page.current + 1, total_pages);
    }

    /// Goes back one page, clamped to page 1.
    pub fn prev_page(&mut self) {
        self.page.current = self.page.current.saturating_sub(1).max(1);
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.page_size = page_size.max(1);
        self.page.current = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = TableState::with_page_size(10);
        state.goto_page(3, 5);
        assert_eq!(state.page().current, 3);

        state.set_filter("vendor", "con");
        assert_eq!(state.page().current, 1);

        state.goto_page(2, 5);
        state.clear_filter("vendor");
        assert_eq!(state.page().current, 1);
    }

    #[test]
    fn test_toggle_sort_flips_direction_and_resets_page() {
        let mut state = TableState::new();
        state.goto_page(4, 9);

        state.toggle_sort("total");
        assert_eq!(state.sort().field.as_deref(), Some("total"));
        assert!(state.sort().ascending);
        assert_eq!(state.page().current, 1);

        state.toggle_sort("total");
        assert!(!state.sort().ascending);

        state.toggle_sort("vendor");
        assert_eq!(state.sort().field.as_deref(), Some("vendor"));
        assert!(state.sort().ascending);
    }

    #[test]
    fn test_page_navigation_clamps() {
        let mut state = TableState::new();
        state.goto_page(99, 3);
        assert_eq!(state.page().current, 3);

        state.next_page(3);
        assert_eq!(state.page().current, 3);

        state.prev_page();
        state.prev_page();
        state.prev_page();
        assert_eq!(state.page().current, 1);

        state.goto_page(0, 3);
        assert_eq!(state.page().current, 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = TableState::with_page_size(10);
        state.goto_page(2, 3);
        state.set_page_size(25);
        assert_eq!(state.page().current, 1);
        assert_eq!(state.page().page_size, 25);
    }
}
