//! Goods receipt models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A goods receipt note, surfaced read-only for match review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsReceipt {
    /// The GRN record ID.
    pub id: Uuid,
    /// Receipt note number.
    pub grn_number: String,
    /// Purchase order the delivery was received against.
    pub po_number: String,
    /// Date the goods arrived.
    pub received_date: NaiveDate,
    /// Received lines.
    #[serde(default)]
    pub lines: Vec<GrnLine>,
}

/// One received line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrnLine {
    /// Line description.
    pub description: String,
    /// Quantity actually received.
    pub quantity_received: Decimal,
}
