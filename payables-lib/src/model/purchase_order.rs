//! Purchase order models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Money;

/// A purchase order, surfaced read-only for match review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    /// The PO record ID.
    pub id: Uuid,
    /// PO number referenced by invoices.
    pub po_number: String,
    /// Vendor the order was placed with.
    pub vendor_name: String,
    /// Order date.
    pub order_date: NaiveDate,
    /// Ordered total.
    pub total: Money,
    /// Fulfillment status.
    pub status: PoStatus,
    /// Ordered lines.
    #[serde(default)]
    pub lines: Vec<PoLine>,
}

/// One ordered line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoLine {
    /// Line description.
    pub description: String,
    /// Ordered quantity.
    pub quantity: Decimal,
    /// Unit price.
    pub unit_price: Money,
}

/// Fulfillment status of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoStatus {
    /// Nothing received yet.
    Open,
    /// Some lines received.
    PartiallyReceived,
    /// Fully received.
    Closed,
    /// Cancelled before fulfillment.
    Cancelled,
}

impl PoStatus {
    /// Returns the wire/display name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PoStatus::Open => "open",
            PoStatus::PartiallyReceived => "partially_received",
            PoStatus::Closed => "closed",
            PoStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for PoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
