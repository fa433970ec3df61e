//! Uploaded document metadata

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Metadata for one uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    /// The document ID.
    pub id: Uuid,
    /// Original file name as uploaded.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// What the document is.
    pub kind: DocumentKind,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
    /// Who uploaded it, if known.
    #[serde(default)]
    pub uploaded_by: Option<String>,
}

/// Classification of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Scanned vendor invoice fed to OCR.
    InvoiceScan,
    /// Expense receipt attached to a reimbursement.
    Receipt,
    /// Any other supporting document.
    Supporting,
}

impl DocumentKind {
    /// All kinds, in display order.
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::InvoiceScan,
        DocumentKind::Receipt,
        DocumentKind::Supporting,
    ];

    /// Returns the wire/display name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::InvoiceScan => "invoice_scan",
            DocumentKind::Receipt => "receipt",
            DocumentKind::Supporting => "supporting",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
