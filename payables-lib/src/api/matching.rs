//! Three-way match operations
//!
//! The backend runs the comparison; these calls only fetch the result or
//! ask for a re-run against a different purchase order.

use uuid::Uuid;

use crate::PayablesClient;
use crate::error::Error;
use crate::model::GoodsReceipt;
use crate::model::MatchResult;
use crate::model::PurchaseOrder;

impl PayablesClient {
    /// Fetches the precomputed match result for an invoice.
    pub async fn match_result(&self, invoice_id: Uuid) -> Result<MatchResult, Error> {
        self.get_json(&format!("invoices/{}/match", invoice_id))
            .await
    }

    /// Links an invoice to a purchase order and returns the re-run match.
    pub async fn link_purchase_order(
        &self,
        invoice_id: Uuid,
        po_number: &str,
    ) -> Result<MatchResult, Error> {
        self.post_json(
            &format!("invoices/{}/match/link", invoice_id),
            &serde_json::json!({ "poNumber": po_number }),
        )
        .await
    }

    /// Fetches the purchase order a match drilled into.
    pub async fn get_purchase_order(&self, po_number: &str) -> Result<PurchaseOrder, Error> {
        self.get_json(&format!(
            "purchase-orders/{}",
            urlencoding::encode(po_number)
        ))
        .await
    }

    /// Fetches the goods receipt a match drilled into.
    pub async fn get_goods_receipt(&self, grn_number: &str) -> Result<GoodsReceipt, Error> {
        self.get_json(&format!(
            "goods-receipts/{}",
            urlencoding::encode(grn_number)
        ))
        .await
    }
}
