//! Row sorting

use std::cmp::Ordering;

use super::Column;
use super::FilterKind;
use super::Row;
use super::Value;
use super::column::column_by_key;

/// The currently active sort field and direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SortState {
    /// Field key to sort by; `None` leaves rows in input order.
    pub field: Option<String>,
    /// Ascending when `true`, descending otherwise.
    pub ascending: bool,
}

impl SortState {
    /// Creates an unsorted state.
    pub fn none() -> Self {
        Self {
            field: None,
            ascending: true,
        }
    }

    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ascending: true,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ascending: false,
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::none()
    }
}

/// Sorts rows by the active sort field.
///
/// The sort is stable: equal cells keep their relative input order, which
/// keeps pagination deterministic across re-renders. A column declared with
/// [`FilterKind::Date`] compares as parsed dates, with unparseable values
/// sorting after parseable ones regardless of direction. Otherwise cells
/// compare numerically when both sides parse as numbers, and as
/// case-insensitive strings when they don't. A field with no column
/// definition still sorts with the generic number/string fallback.
pub fn sort_rows(rows: &[Row], columns: &[Column], sort: &SortState) -> Vec<Row> {
    let Some(field) = sort.field.as_deref() else {
        return rows.to_vec();
    };

    let by_date = column_by_key(columns, field)
        .is_some_and(|column| column.filter_kind() == FilterKind::Date);

    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare_cells(a.get(field), b.get(field), by_date, sort.ascending));
    sorted
}

fn compare_cells(
    a: Option<&Value>,
    b: Option<&Value>,
    by_date: bool,
    ascending: bool,
) -> Ordering {
    if by_date {
        let da = a.and_then(Value::as_date);
        let db = b.and_then(Value::as_date);
        return match (da, db) {
            (Some(x), Some(y)) => directed(x.cmp(&y), ascending),
            // Unparseable dates go last in both directions.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
    }

    let na = a.and_then(Value::as_f64);
    let nb = b.and_then(Value::as_f64);
    if let (Some(x), Some(y)) = (na, nb) {
        return directed(x.partial_cmp(&y).unwrap_or(Ordering::Equal), ascending);
    }

    let sa = a.map(Value::display_text).unwrap_or_default().to_lowercase();
    let sb = b.map(Value::display_text).unwrap_or_default().to_lowercase();
    directed(sa.cmp(&sb), ascending)
}

fn directed(ord: Ordering, ascending: bool) -> Ordering {
    if ascending { ord } else { ord.reverse() }
}
