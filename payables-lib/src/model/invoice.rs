//! Invoice models

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Money;

/// An invoice as extracted by OCR and reviewed in the extraction queue.
///
/// All fields come from the backend; OCR confidence and line items are
/// optional because older scans predate those extractor versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// The invoice record ID.
    pub id: Uuid,
    /// Vendor name as extracted/corrected.
    pub vendor_name: String,
    /// Vendor's invoice number.
    pub invoice_number: String,
    /// Invoice issue date, if extracted.
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    /// Payment due date, if extracted.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Net amount before tax.
    pub subtotal: Money,
    /// Tax amount.
    pub tax: Money,
    /// Gross amount.
    pub total: Money,
    /// Review/approval status.
    pub status: InvoiceStatus,
    /// Purchase order number the invoice references, if any.
    #[serde(default)]
    pub po_number: Option<String>,
    /// Extractor confidence in `[0, 1]`, if reported.
    #[serde(default)]
    pub ocr_confidence: Option<f64>,
    /// Extracted line items.
    #[serde(default)]
    pub line_items: Vec<InvoiceLine>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// One extracted invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    /// Line description.
    pub description: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Unit price.
    pub unit_price: Money,
    /// Extended amount.
    pub amount: Money,
    /// General-ledger code assigned during review, if any.
    #[serde(default)]
    pub gl_code: Option<String>,
}

/// Review/approval status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Waiting for a reviewer to pick it up.
    PendingReview,
    /// A reviewer is correcting the extracted fields.
    InReview,
    /// Approved for payment.
    Approved,
    /// Rejected during review.
    Rejected,
    /// Successfully matched against PO and receipt.
    Matched,
    /// Match discrepancies need manual resolution.
    Exception,
}

impl InvoiceStatus {
    /// All statuses, in queue display order.
    pub const ALL: [InvoiceStatus; 6] = [
        InvoiceStatus::PendingReview,
        InvoiceStatus::InReview,
        InvoiceStatus::Approved,
        InvoiceStatus::Rejected,
        InvoiceStatus::Matched,
        InvoiceStatus::Exception,
    ];

    /// Returns the wire/display name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::PendingReview => "pending_review",
            InvoiceStatus::InReview => "in_review",
            InvoiceStatus::Approved => "approved",
            InvoiceStatus::Rejected => "rejected",
            InvoiceStatus::Matched => "matched",
            InvoiceStatus::Exception => "exception",
        }
    }

    /// Returns `true` if the invoice still needs reviewer action.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            InvoiceStatus::PendingReview | InvoiceStatus::InReview | InvoiceStatus::Exception
        )
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Partial update for an invoice, sent as a PATCH body.
///
/// Only fields that were explicitly set serialize, so the backend treats
/// everything else as unchanged.
///
/// # Example
///
/// ```
/// use payables_lib::model::{InvoicePatch, Money};
/// use rust_decimal::Decimal;
///
/// let patch = InvoicePatch::new()
///     .vendor_name("Contoso Ltd")
///     .total(Money::new(Decimal::new(123450, 2)));
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtotal: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    po_number: Option<String>,
}

impl InvoicePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the corrected vendor name.
    pub fn vendor_name(mut self, value: impl Into<String>) -> Self {
        self.vendor_name = Some(value.into());
        self
    }

    /// Sets the corrected invoice number.
    pub fn invoice_number(mut self, value: impl Into<String>) -> Self {
        self.invoice_number = Some(value.into());
        self
    }

    /// Sets the corrected invoice date.
    pub fn invoice_date(mut self, value: NaiveDate) -> Self {
        self.invoice_date = Some(value);
        self
    }

    /// Sets the corrected due date.
    pub fn due_date(mut self, value: NaiveDate) -> Self {
        self.due_date = Some(value);
        self
    }

    /// Sets the corrected subtotal.
    pub fn subtotal(mut self, value: Money) -> Self {
        self.subtotal = Some(value);
        self
    }

    /// Sets the corrected tax amount.
    pub fn tax(mut self, value: Money) -> Self {
        self.tax = Some(value);
        self
    }

    /// Sets the corrected total.
    pub fn total(mut self, value: Money) -> Self {
        self.total = Some(value);
        self
    }

    /// Sets the status.
    pub fn status(mut self, value: InvoiceStatus) -> Self {
        self.status = Some(value);
        self
    }

    /// Sets the referenced purchase order number.
    pub fn po_number(mut self, value: impl Into<String>) -> Self {
        self.po_number = Some(value.into());
        self
    }

    /// Returns `true` if nothing was set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_deserializes_backend_payload() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "id": "7b1d8f4e-63a1-4e0f-9d28-5f1c3a9b0c11",
                "vendorName": "Contoso Ltd",
                "invoiceNumber": "INV-1001",
                "invoiceDate": "2024-07-10",
                "currency": "USD",
                "subtotal": "1100.00",
                "tax": "134.50",
                "total": "1234.50",
                "status": "pending_review",
                "ocrConfidence": 0.94,
                "lineItems": [
                    {
                        "description": "Toner",
                        "quantity": "2",
                        "unitPrice": "550.00",
                        "amount": "1100.00"
                    }
                ],
                "createdAt": "2024-07-11T08:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(invoice.vendor_name, "Contoso Ltd");
        assert_eq!(invoice.status, InvoiceStatus::PendingReview);
        assert_eq!(invoice.total.to_string(), "1234.50");
        assert_eq!(invoice.due_date, None);
        assert_eq!(invoice.line_items.len(), 1);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = InvoicePatch::new()
            .vendor_name("Contoso Ltd")
            .status(InvoiceStatus::Approved);

        let body = serde_json::to_value(&patch).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["vendorName"], "Contoso Ltd");
        assert_eq!(object["status"], "approved");
    }

    #[test]
    fn test_empty_patch() {
        assert!(InvoicePatch::new().is_empty());
        assert_eq!(
            serde_json::to_string(&InvoicePatch::new()).unwrap(),
            "{}"
        );
    }
}
