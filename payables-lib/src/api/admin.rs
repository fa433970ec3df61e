//! Administrative configuration operations

use uuid::Uuid;

use crate::PayablesClient;
use crate::error::Error;
use crate::model::ApprovalRule;
use crate::model::Vendor;

impl PayablesClient {
    /// Lists all vendors.
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, Error> {
        self.get_json("admin/vendors").await
    }

    /// Creates or updates a vendor.
    pub async fn save_vendor(&self, vendor: &Vendor) -> Result<Vendor, Error> {
        self.post_json("admin/vendors", vendor).await
    }

    /// Deactivates a vendor so new invoices can no longer reference it.
    pub async fn deactivate_vendor(&self, id: Uuid) -> Result<Vendor, Error> {
        self.post_json(
            &format!("admin/vendors/{}/deactivate", id),
            &serde_json::json!({}),
        )
        .await
    }

    /// Lists the reimbursement approval routing rules.
    pub async fn list_approval_rules(&self) -> Result<Vec<ApprovalRule>, Error> {
        self.get_json("admin/approval-rules").await
    }

    /// Creates or updates an approval routing rule.
    pub async fn save_approval_rule(&self, rule: &ApprovalRule) -> Result<ApprovalRule, Error> {
        self.post_json("admin/approval-rules", rule).await
    }
}
