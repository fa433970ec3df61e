//! Money type

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// A monetary amount represented as a decimal.
///
/// Which currency an amount is in lives on the owning record (e.g.,
/// [`Invoice::currency`](super::Invoice)); this wrapper only carries the
/// numeric value.
///
/// # Example
///
/// ```
/// use payables_lib::model::Money;
/// use rust_decimal::Decimal;
///
/// let total = Money::new(Decimal::new(123450, 2)); // 1234.50
/// assert_eq!(total.to_string(), "1234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new Money value.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Creates a Money value from an integer (whole units).
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::new(value, 0))
    }

    /// Returns `true` if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
