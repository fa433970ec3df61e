//! Administrative configuration records

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::ExpenseCategory;
use super::Money;

/// A vendor as managed on the admin screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// The vendor record ID.
    pub id: Uuid,
    /// Legal name.
    pub name: String,
    /// Tax identifier, if on file.
    #[serde(default)]
    pub tax_id: Option<String>,
    /// Payment terms code (e.g., `"net30"`).
    pub payment_terms: String,
    /// Whether new invoices may reference this vendor.
    pub active: bool,
}

/// An approval routing rule for reimbursements.
///
/// Requests in `category` at or above `threshold` route to `approver_role`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRule {
    /// The rule ID.
    pub id: Uuid,
    /// Category the rule applies to.
    pub category: ExpenseCategory,
    /// Amount at which the rule kicks in.
    pub threshold: Money,
    /// Role that must approve.
    pub approver_role: String,
}
