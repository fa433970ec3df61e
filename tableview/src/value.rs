//! Value enum for dynamic cell values

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value held in one cell of a [`Row`](super::Row).
///
/// Rows come straight out of backend JSON, so cells have no fixed schema:
/// a value can be null, a boolean, a number, a string (including date-like
/// strings), a proper date, or arbitrary nested JSON. The engine never
/// requires a particular variant; comparison semantics coerce lazily via
/// [`Value::as_f64`] and [`Value::as_date`] at the point of use.
///
/// # Example
///
/// ```
/// use tableview::Value;
///
/// let amount = Value::from(1234.50);
/// assert_eq!(amount.as_f64(), Some(1234.5));
///
/// // Date-like strings stay strings and parse on demand.
/// let date = Value::from("2024-07-10");
/// assert!(date.as_date().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty cell.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value. Date-like strings from the backend land here and are
    /// parsed lazily when a date comparison needs them.
    String(String),
    /// Calendar date (no time-of-day).
    Date(NaiveDate),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// Fallback for nested arrays/objects.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Decimal(_) => "decimal",
            Value::Json(_) => "json",
        }
    }

    /// Renders the value as the string a table cell would display.
    ///
    /// Null renders as the empty string; dates render as `YYYY-MM-DD`;
    /// nested JSON falls back to its compact serialization.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Date(d) => d.to_string(),
            Value::DateTime(dt) => dt.to_rfc3339(),
            Value::Decimal(d) => d.to_string(),
            Value::Json(j) => match j.as_str() {
                Some(s) => s.to_string(),
                None => j.to_string(),
            },
        }
    }

    /// Coerces the value to a floating-point number, if possible.
    ///
    /// Strings are parsed; anything unparseable yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Decimal(d) => d.to_f64(),
            Value::String(s) => s.trim().parse().ok(),
            Value::Json(j) => j.as_f64(),
            _ => None,
        }
    }

    /// Coerces the value to a calendar date, if possible.
    ///
    /// Time-of-day is dropped. Strings are parsed with [`parse_date`];
    /// anything unparseable yields `None`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            Value::DateTime(dt) => Some(dt.date_naive()),
            Value::String(s) => parse_date(s),
            _ => None,
        }
    }
}

/// Parses a date-like string into a calendar date.
///
/// Accepts RFC 3339 timestamps and the plain date formats the backend is
/// known to emit. Returns `None` for anything else; the caller treats that
/// as "not a date" rather than an error.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return Some(d);
        }
    }
    None
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        assert_eq!(parse_date("2024-07-10"), Some(expected));
        assert_eq!(parse_date("2024/07/10"), Some(expected));
        assert_eq!(parse_date("07/10/2024"), Some(expected));
        assert_eq!(parse_date("2024-07-10T08:30:00Z"), Some(expected));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_as_f64_coercions() {
        assert_eq!(Value::from(42i64).as_f64(), Some(42.0));
        assert_eq!(Value::from("1234.50").as_f64(), Some(1234.5));
        assert_eq!(Value::from(Decimal::new(1999, 2)).as_f64(), Some(19.99));
        assert_eq!(Value::from("n/a").as_f64(), None);
        assert_eq!(Value::Null.as_f64(), None);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Value::Null.display_text(), "");
        assert_eq!(Value::from(1234.5).display_text(), "1234.5");
        let d = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        assert_eq!(Value::from(d).display_text(), "2024-07-10");
    }

    #[test]
    fn test_from_json_primitives() {
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
        assert_eq!(Value::from(serde_json::json!(7)), Value::Int(7));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(
            Value::from(serde_json::json!("abc")),
            Value::String("abc".to_string())
        );
        assert!(matches!(
            Value::from(serde_json::json!([1, 2])),
            Value::Json(_)
        ));
    }
}
