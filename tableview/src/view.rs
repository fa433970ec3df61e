//! Composite view pipeline

use super::Column;
use super::PageToken;
use super::Row;
use super::TableState;
use super::filter::filter_rows;
use super::pager::paginate;
use super::pager::pagination_range;
use super::sort::sort_rows;

/// The computed output of one table render: the visible page of rows plus
/// the pagination metadata for the page controls.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    rows: Vec<Row>,
    total_pages: usize,
    pager: Vec<PageToken>,
}

impl TableView {
    /// Returns the rows visible on the current page.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the view and returns the visible rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns the total page count, always at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the pager tokens for the page controls.
    pub fn pager(&self) -> &[PageToken] {
        &self.pager
    }
}

/// Computes the visible slice of rows for one render.
///
/// Applies filter, then sort, then pagination, in that fixed order. The
/// function is pure: it owns no state, mutates nothing, and returns the
/// same output for the same inputs every time, so callers are free to
/// re-invoke it on every state change.
///
/// Callers own the [`TableState`] and are expected to reset the current
/// page to 1 whenever a filter or the sort field changes; the `TableState`
/// mutators do this automatically.
pub fn view(rows: &[Row], columns: &[Column], state: &TableState) -> TableView {
    let filtered = filter_rows(rows, columns, state.filters());
    let sorted = sort_rows(&filtered, columns, state.sort());
    let paged = paginate(&sorted, state.page());

    let total_pages = paged.total_pages();
    let current = state.page().current.clamp(1, total_pages);
    log::trace!(
        "table view: {} rows in, {} visible, page {}/{}",
        rows.len(),
        sorted.len(),
        current,
        total_pages,
    );

    TableView {
        rows: paged.into_rows(),
        total_pages,
        pager: pagination_range(current, total_pages),
    }
}
