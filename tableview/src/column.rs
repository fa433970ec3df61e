//! Column definitions

use std::collections::BTreeSet;
use std::sync::Arc;

use super::Row;

/// Callback producing the distinct permissible values for a select filter.
pub type OptionsFn = Arc<dyn Fn(&[Row]) -> Vec<String> + Send + Sync>;

/// Callback rendering one cell: `(row, row_index, current_page) → text`.
pub type RenderFn = Arc<dyn Fn(&Row, usize, usize) -> String + Send + Sync>;

/// Comparison semantics for a column's filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// Case-insensitive substring containment.
    #[default]
    Text,
    /// Substring match over the stringified parsed number.
    Number,
    /// On-or-after calendar date comparison.
    Date,
    /// Case-insensitive exact equality against a fixed option set.
    Select,
}

/// Static metadata describing how one field is displayed, sorted, and
/// filtered.
///
/// Columns are defined once per view and passed to the engine on every
/// invocation. The `options` and `render` callbacks are metadata for the
/// presentation layer; the engine never invokes `render` while filtering,
/// sorting, or paginating.
///
/// # Example
///
/// ```
/// use tableview::Column;
///
/// let columns = vec![
///     Column::text("vendor", "Vendor").sortable().filterable(),
///     Column::date("invoice_date", "Invoice Date").sortable().filterable(),
///     Column::select("status", "Status").filterable(),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    key: String,
    header: String,
    sortable: bool,
    filterable: bool,
    filter: FilterKind,
    options: Option<OptionsFn>,
    render: Option<RenderFn>,
}

impl Column {
    fn new(key: impl Into<String>, header: impl Into<String>, filter: FilterKind) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            filterable: false,
            filter,
            options: None,
            render: None,
        }
    }

    /// Creates a text column.
    pub fn text(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(key, header, FilterKind::Text)
    }

    /// Creates a number column.
    pub fn number(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(key, header, FilterKind::Number)
    }

    /// Creates a date column.
    pub fn date(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(key, header, FilterKind::Date)
    }

    /// Creates a select column.
    pub fn select(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(key, header, FilterKind::Select)
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column as filterable.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Sets a custom callback producing the permissible select values.
    ///
    /// Without one, [`Column::select_options`] derives the distinct display
    /// values present in the data.
    pub fn with_options(
        mut self,
        options: impl Fn(&[Row]) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.options = Some(Arc::new(options));
        self
    }

    /// Sets a custom cell renderer.
    pub fn with_render(
        mut self,
        render: impl Fn(&Row, usize, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Returns the field key this column reads.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns `true` if the column is sortable.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Returns `true` if the column is filterable.
    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Returns the filter comparison semantics.
    pub fn filter_kind(&self) -> FilterKind {
        self.filter
    }

    /// Returns the permissible values for a select filter.
    ///
    /// Uses the custom `options` callback when set, otherwise the distinct
    /// non-empty display values found in `rows`, sorted.
    pub fn select_options(&self, rows: &[Row]) -> Vec<String> {
        if let Some(options) = &self.options {
            return options(rows);
        }
        let distinct: BTreeSet<String> = rows
            .iter()
            .map(|row| row.text(&self.key))
            .filter(|text| !text.is_empty())
            .collect();
        distinct.into_iter().collect()
    }

    /// Renders one cell for display.
    ///
    /// Applies the custom renderer when set, otherwise the raw field value's
    /// display text.
    pub fn render_cell(&self, row: &Row, row_index: usize, page: usize) -> String {
        match &self.render {
            Some(render) => render(row, row_index, page),
            None => row.text(&self.key),
        }
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("filter", &self.filter)
            .field("has_options", &self.options.is_some())
            .field("has_render", &self.render.is_some())
            .finish()
    }
}

/// Looks up a column definition by field key.
pub fn column_by_key<'a>(columns: &'a [Column], key: &str) -> Option<&'a Column> {
    columns.iter().find(|column| column.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_distinct_sorted() {
        let rows = vec![
            Row::new().set("status", "approved"),
            Row::new().set("status", "pending"),
            Row::new().set("status", "approved"),
            Row::new().set("status", ""),
        ];
        let column = Column::select("status", "Status");
        assert_eq!(column.select_options(&rows), vec!["approved", "pending"]);
    }

    #[test]
    fn test_custom_options_override() {
        let column = Column::select("status", "Status")
            .with_options(|_| vec!["open".to_string(), "closed".to_string()]);
        assert_eq!(column.select_options(&[]), vec!["open", "closed"]);
    }

    #[test]
    fn test_render_fallback_and_custom() {
        let row = Row::new().set("total", 1250.5);
        let plain = Column::number("total", "Total");
        assert_eq!(plain.render_cell(&row, 0, 1), "1250.5");

        let custom = Column::number("total", "Total")
            .with_render(|row, _, _| format!("${}", row.text("total")));
        assert_eq!(custom.render_cell(&row, 0, 1), "$1250.5");
    }
}
