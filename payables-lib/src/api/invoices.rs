//! Invoice review operations

use uuid::Uuid;

use crate::PayablesClient;
use crate::error::Error;
use crate::model::Invoice;
use crate::model::InvoicePatch;
use crate::model::InvoiceStatus;

impl PayablesClient {
    /// Lists invoices, optionally narrowed to one status server-side.
    ///
    /// The queue screens fetch the full collection and do their own
    /// filtering and paging client-side; the status parameter exists for
    /// callers that only ever need one slice.
    pub async fn list_invoices(
        &self,
        status: Option<InvoiceStatus>,
    ) -> Result<Vec<Invoice>, Error> {
        let path = match status {
            Some(status) => format!("invoices?status={}", urlencoding::encode(status.as_str())),
            None => "invoices".to_string(),
        };
        self.get_json(&path).await
    }

    /// Fetches one invoice.
    pub async fn get_invoice(&self, id: Uuid) -> Result<Invoice, Error> {
        self.get_json(&format!("invoices/{}", id)).await
    }

    /// Applies reviewer corrections to an invoice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] for an empty patch rather than
    /// bothering the backend with a no-op.
    pub async fn update_invoice(&self, id: Uuid, patch: &InvoicePatch) -> Result<Invoice, Error> {
        if patch.is_empty() {
            return Err(Error::InvalidOperation(
                "invoice patch contains no changes".to_string(),
            ));
        }
        self.patch_json(&format!("invoices/{}", id), patch).await
    }

    /// Approves an invoice for payment.
    pub async fn approve_invoice(&self, id: Uuid) -> Result<Invoice, Error> {
        self.post_json(&format!("invoices/{}/approve", id), &serde_json::json!({}))
            .await
    }

    /// Rejects an invoice with a reason.
    pub async fn reject_invoice(&self, id: Uuid, reason: &str) -> Result<Invoice, Error> {
        self.post_json(
            &format!("invoices/{}/reject", id),
            &serde_json::json!({ "reason": reason }),
        )
        .await
    }
}
