//! Queue and report screens
//!
//! Every table in the application — extraction queue, reconciliation queue,
//! documents page, admin dashboard, match detail — used to carry its own
//! filter/sort/paginate logic. They all render through the shared
//! [`tableview`] engine now: a screen defines its column set and a
//! typed-model → row projection, and [`TableScreen`] carries the state
//! plumbing every screen needs.

mod admin_dashboard;
mod documents_page;
mod extraction_queue;
mod match_view;
mod recon_queue;

pub use admin_dashboard::*;
pub use documents_page::*;
pub use extraction_queue::*;
pub use match_view::*;
pub use recon_queue::*;

use tableview::Column;
use tableview::Row;
use tableview::TableState;
use tableview::TableView;
use tableview::column_by_key;
use tableview::view;

/// Rows, columns, and view state for one table screen.
///
/// The rows are whatever the screen last fetched; the state is owned here
/// and mutated through methods that keep the engine's integration contract
/// (filter and sort changes return to page 1, page navigation clamps).
#[derive(Debug, Clone)]
pub struct TableScreen {
    rows: Vec<Row>,
    columns: Vec<Column>,
    state: TableState,
}

impl TableScreen {
    /// Creates a screen over the given rows and columns.
    pub fn new(rows: Vec<Row>, columns: Vec<Column>, page_size: usize) -> Self {
        Self {
            rows,
            columns,
            state: TableState::with_page_size(page_size),
        }
    }

    /// Computes the current page of rows and pagination metadata.
    pub fn view(&self) -> TableView {
        view(&self.rows, &self.columns, &self.state)
    }

    /// Returns the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the full (unfiltered) row collection.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the current view state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Replaces the rows after a fresh fetch, keeping filters and sort.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Sets a column filter and returns to page 1.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.state.set_filter(key, value);
    }

    /// Clears a column filter and returns to page 1.
    pub fn clear_filter(&mut self, key: &str) {
        self.state.clear_filter(key);
    }

    /// Cycles the sort on a column header click.
    pub fn toggle_sort(&mut self, key: &str) {
        self.state.toggle_sort(key);
    }

    /// Navigates to a page, clamped to the available range.
    pub fn goto_page(&mut self, page: usize) {
        let total = self.view().total_pages();
        self.state.goto_page(page, total);
    }

    /// Advances one page.
    pub fn next_page(&mut self) {
        let total = self.view().total_pages();
        self.state.next_page(total);
    }

    /// Goes back one page.
    pub fn prev_page(&mut self) {
        self.state.prev_page();
    }

    /// Returns the permissible values for a select-filter column.
    pub fn select_options(&self, key: &str) -> Vec<String> {
        column_by_key(&self.columns, key)
            .map(|column| column.select_options(&self.rows))
            .unwrap_or_default()
    }
}
