//! Reconciliation queue

use std::collections::HashMap;

use tableview::Column;
use tableview::Row;
use tableview::Value;
use uuid::Uuid;

use super::TableScreen;
use crate::model::Invoice;
use crate::model::MatchOutcome;
use crate::model::MatchResult;

/// The reconciliation queue: invoices with their three-way match outcome.
///
/// Joins the invoice collection with the precomputed match results the
/// backend shipped for them; an invoice without a result shows as
/// `not_found`.
#[derive(Debug, Clone)]
pub struct ReconQueue {
    table: TableScreen,
}

impl ReconQueue {
    /// Rows per page, matching the queue's pager.
    pub const PAGE_SIZE: usize = 10;

    /// Builds the queue from fetched invoices and their match results.
    pub fn new(invoices: &[Invoice], results: &[MatchResult]) -> Self {
        let by_invoice: HashMap<Uuid, &MatchResult> =
            results.iter().map(|r| (r.invoice_id, r)).collect();

        let rows = invoices
            .iter()
            .map(|invoice| recon_row(invoice, by_invoice.get(&invoice.id).copied()))
            .collect();

        Self {
            table: TableScreen::new(rows, Self::columns(), Self::PAGE_SIZE),
        }
    }

    /// Column definitions for the queue table.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::text("invoice_number", "Invoice #")
                .sortable()
                .filterable(),
            Column::text("vendor", "Vendor").sortable().filterable(),
            Column::text("po_number", "PO").sortable().filterable(),
            Column::text("grn_number", "GRN").filterable(),
            Column::number("total", "Total").sortable().filterable(),
            Column::select("outcome", "Match")
                .filterable()
                .with_options(|_| {
                    [
                        MatchOutcome::Matched,
                        MatchOutcome::PartialMatch,
                        MatchOutcome::Mismatch,
                        MatchOutcome::NotFound,
                    ]
                    .iter()
                    .map(|outcome| outcome.as_str().to_string())
                    .collect()
                }),
        ]
    }

    /// Returns the shared table screen.
    pub fn table(&self) -> &TableScreen {
        &self.table
    }

    /// Returns the shared table screen for state mutations.
    pub fn table_mut(&mut self) -> &mut TableScreen {
        &mut self.table
    }
}

fn recon_row(invoice: &Invoice, result: Option<&MatchResult>) -> Row {
    let outcome = result.map(|r| r.outcome).unwrap_or(MatchOutcome::NotFound);
    let po = result
        .and_then(|r| r.matched_po.clone())
        .or_else(|| invoice.po_number.clone());
    let grn = result.and_then(|r| r.matched_grn.clone());

    Row::new()
        .set("id", invoice.id.to_string())
        .set("invoice_number", invoice.invoice_number.clone())
        .set("vendor", invoice.vendor_name.clone())
        .set("po_number", Value::from(po))
        .set("grn_number", Value::from(grn))
        .set("total", invoice.total.value())
        .set("outcome", outcome.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Invoice>, Vec<MatchResult>) {
        let invoices: Vec<Invoice> = serde_json::from_str(
            r#"[
                {
                    "id": "11111111-1111-1111-1111-111111111111",
                    "vendorName": "Contoso Ltd",
                    "invoiceNumber": "INV-1001",
                    "currency": "USD",
                    "subtotal": "1100.00",
                    "tax": "134.50",
                    "total": "1234.50",
                    "status": "matched",
                    "poNumber": "PO-7701",
                    "createdAt": "2024-07-11T08:30:00Z"
                },
                {
                    "id": "22222222-2222-2222-2222-222222222222",
                    "vendorName": "Fabrikam Inc",
                    "invoiceNumber": "INV-1002",
                    "currency": "USD",
                    "subtotal": "80.00",
                    "tax": "8.00",
                    "total": "88.00",
                    "status": "exception",
                    "createdAt": "2024-06-22T10:00:00Z"
                }
            ]"#,
        )
        .unwrap();

        let results: Vec<MatchResult> = serde_json::from_str(
            r#"[
                {
                    "invoiceId": "11111111-1111-1111-1111-111111111111",
                    "outcome": "matched",
                    "matchedPo": "PO-7701",
                    "matchedGrn": "GRN-310",
                    "checks": []
                }
            ]"#,
        )
        .unwrap();

        (invoices, results)
    }

    #[test]
    fn test_join_fills_match_columns() {
        let (invoices, results) = fixture();
        let queue = ReconQueue::new(&invoices, &results);

        let table = queue.table().view();
        assert_eq!(table.rows()[0].text("grn_number"), "GRN-310");
        assert_eq!(table.rows()[0].text("outcome"), "matched");
    }

    #[test]
    fn test_missing_result_shows_not_found() {
        let (invoices, results) = fixture();
        let mut queue = ReconQueue::new(&invoices, &results);

        queue.table_mut().set_filter("outcome", "not_found");
        let table = queue.table().view();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].text("invoice_number"), "INV-1002");
        assert_eq!(table.rows()[0].text("grn_number"), "");
    }
}
