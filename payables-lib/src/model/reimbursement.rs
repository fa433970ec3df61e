//! Reimbursement models

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Money;
use crate::error::FieldValidationError;
use crate::error::ValidationError;

/// An employee reimbursement request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reimbursement {
    /// The reimbursement record ID.
    pub id: Uuid,
    /// Employee who filed the expense.
    pub employee_name: String,
    /// Expense category.
    pub category: ExpenseCategory,
    /// What the expense was for.
    pub description: String,
    /// Claimed amount.
    pub amount: Money,
    /// Date the expense was incurred.
    pub expense_date: NaiveDate,
    /// Uploaded receipt document IDs.
    #[serde(default)]
    pub receipt_ids: Vec<Uuid>,
    /// Workflow status.
    pub status: ReimbursementStatus,
    /// When the request was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When the approval decision was made, if any.
    #[serde(default)]
    pub decided_at: Option<DateTime<Utc>>,
    /// Who decided, if decided.
    #[serde(default)]
    pub approver: Option<String>,
    /// Why the request was rejected, if rejected.
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// Workflow status of a reimbursement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReimbursementStatus {
    /// Saved but not yet submitted.
    Draft,
    /// Waiting for an approver.
    Submitted,
    /// Approved for payout.
    Approved,
    /// Rejected by an approver.
    Rejected,
    /// Paid out.
    Paid,
}

impl ReimbursementStatus {
    /// All statuses, in workflow order.
    pub const ALL: [ReimbursementStatus; 5] = [
        ReimbursementStatus::Draft,
        ReimbursementStatus::Submitted,
        ReimbursementStatus::Approved,
        ReimbursementStatus::Rejected,
        ReimbursementStatus::Paid,
    ];

    /// Returns the wire/display name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReimbursementStatus::Draft => "draft",
            ReimbursementStatus::Submitted => "submitted",
            ReimbursementStatus::Approved => "approved",
            ReimbursementStatus::Rejected => "rejected",
            ReimbursementStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for ReimbursementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expense category for reimbursement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Travel,
    Meals,
    Lodging,
    Supplies,
    Software,
    Other,
}

impl ExpenseCategory {
    /// All categories, in form display order.
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Travel,
        ExpenseCategory::Meals,
        ExpenseCategory::Lodging,
        ExpenseCategory::Supplies,
        ExpenseCategory::Software,
        ExpenseCategory::Other,
    ];

    /// Returns the wire/display name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Travel => "travel",
            ExpenseCategory::Meals => "meals",
            ExpenseCategory::Lodging => "lodging",
            ExpenseCategory::Supplies => "supplies",
            ExpenseCategory::Software => "software",
            ExpenseCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reimbursement request being submitted.
///
/// Validated client-side before it goes over the wire, so the form can show
/// per-field errors without a round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReimbursement {
    /// Employee filing the expense.
    pub employee_name: String,
    /// Expense category.
    pub category: ExpenseCategory,
    /// What the expense was for.
    pub description: String,
    /// Claimed amount.
    pub amount: Money,
    /// Date the expense was incurred.
    pub expense_date: NaiveDate,
    /// Uploaded receipt document IDs.
    pub receipt_ids: Vec<Uuid>,
}

impl NewReimbursement {
    /// Validates the submission.
    ///
    /// # Errors
    ///
    /// Returns every failed field at once so the form can highlight all of
    /// them in a single pass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.employee_name.trim().is_empty() {
            errors.push(FieldValidationError::new(
                "employeeName",
                "employee name is required",
            ));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldValidationError::new(
                "description",
                "description is required",
            ));
        }
        if self.amount.value().is_sign_negative() || self.amount.is_zero() {
            errors.push(FieldValidationError::new(
                "amount",
                "amount must be greater than zero",
            ));
        }
        if self.expense_date > Utc::now().date_naive() {
            errors.push(FieldValidationError::new(
                "expenseDate",
                "expense date cannot be in the future",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}
