//! Row filtering

use std::collections::HashMap;

use super::Column;
use super::FilterKind;
use super::Row;
use super::Value;
use super::column::column_by_key;
use super::value::parse_date;

/// The currently active per-column filter values.
///
/// Maps a column key to the raw filter input. An absent key or an empty
/// string means no filter is applied for that column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    values: HashMap<String, String>,
}

impl FilterState {
    /// Creates an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter value for a column.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Clears the filter for a column.
    pub fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Clears all filters.
    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// Returns the raw filter value for a column, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns `true` if the column has a non-empty filter value.
    pub fn is_active(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Iterates over the active (non-empty) filters.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

/// Filters rows by the logical AND of all active per-column filters.
///
/// Input order is preserved. The comparison semantics per column come from
/// its [`FilterKind`]; a filter keyed to an unknown column falls back to
/// text semantics. Malformed filter or cell values never exclude a row and
/// never error — the permissive fallback keeps a view rendering whatever
/// the data looks like.
pub fn filter_rows(rows: &[Row], columns: &[Column], filters: &FilterState) -> Vec<Row> {
    let active: Vec<(&str, &str, FilterKind)> = filters
        .active()
        .map(|(key, value)| {
            let kind = column_by_key(columns, key)
                .map(Column::filter_kind)
                .unwrap_or_default();
            (key, value, kind)
        })
        .collect();

    if active.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            active
                .iter()
                .all(|(key, value, kind)| cell_passes(row, key, value, *kind))
        })
        .cloned()
        .collect()
}

fn cell_passes(row: &Row, key: &str, needle: &str, kind: FilterKind) -> bool {
    match kind {
        FilterKind::Date => {
            // On-or-after; unparseable on either side is non-excluding.
            let (Some(wanted), Some(have)) = (
                parse_date(needle),
                row.get(key).and_then(Value::as_date),
            ) else {
                return true;
            };
            have >= wanted
        }
        FilterKind::Select => row.text(key).to_lowercase() == needle.to_lowercase(),
        FilterKind::Number => {
            // Substring match over the stringified parsed numbers. This
            // mirrors the partial-match behavior users see in the filter
            // box, not a numeric range.
            let (Some(wanted), Some(have)) = (
                needle.trim().parse::<f64>().ok(),
                row.get(key).and_then(Value::as_f64),
            ) else {
                return true;
            };
            have.to_string().contains(&wanted.to_string())
        }
        FilterKind::Text => row.text(key).to_lowercase().contains(&needle.to_lowercase()),
    }
}
