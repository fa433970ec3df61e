//! Invoice OCR review queue

use tableview::Column;
use tableview::Row;
use tableview::Value;

use super::TableScreen;
use crate::model::Invoice;
use crate::model::InvoiceStatus;

/// The extraction queue: invoices fresh out of OCR waiting for review.
#[derive(Debug, Clone)]
pub struct ExtractionQueue {
    table: TableScreen,
}

impl ExtractionQueue {
    /// Rows per page, matching the queue's pager.
    pub const PAGE_SIZE: usize = 10;

    /// Builds the queue from a fetched invoice collection.
    pub fn new(invoices: &[Invoice]) -> Self {
        let rows = invoices.iter().map(invoice_row).collect();
        Self {
            table: TableScreen::new(rows, Self::columns(), Self::PAGE_SIZE),
        }
    }

    /// Column definitions for the queue table.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::text("vendor", "Vendor").sortable().filterable(),
            Column::text("invoice_number", "Invoice #")
                .sortable()
                .filterable(),
            Column::date("invoice_date", "Invoice Date")
                .sortable()
                .filterable(),
            Column::date("due_date", "Due Date").sortable().filterable(),
            Column::number("total", "Total").sortable().filterable(),
            Column::number("confidence", "OCR %")
                .sortable()
                .with_render(|row, _, _| match row.get("confidence") {
                    Some(value) if !value.is_null() => {
                        format!("{}%", value.display_text())
                    }
                    _ => "—".to_string(),
                }),
            Column::select("status", "Status")
                .filterable()
                .with_options(|_| {
                    InvoiceStatus::ALL
                        .iter()
                        .map(|status| status.as_str().to_string())
                        .collect()
                }),
        ]
    }

    /// Replaces the invoice collection after a refetch.
    pub fn set_invoices(&mut self, invoices: &[Invoice]) {
        self.table.set_rows(invoices.iter().map(invoice_row).collect());
    }

    /// Returns the shared table screen.
    pub fn table(&self) -> &TableScreen {
        &self.table
    }

    /// Returns the shared table screen for state mutations.
    pub fn table_mut(&mut self) -> &mut TableScreen {
        &mut self.table
    }

    /// Returns how many invoices still need reviewer action.
    pub fn open_count(invoices: &[Invoice]) -> usize {
        invoices.iter().filter(|i| i.status.is_open()).count()
    }
}

fn invoice_row(invoice: &Invoice) -> Row {
    Row::new()
        .set("id", invoice.id.to_string())
        .set("vendor", invoice.vendor_name.clone())
        .set("invoice_number", invoice.invoice_number.clone())
        .set("invoice_date", Value::from(invoice.invoice_date))
        .set("due_date", Value::from(invoice.due_date))
        .set("total", invoice.total.value())
        .set(
            "confidence",
            Value::from(invoice.ocr_confidence.map(|c| (c * 100.0).round())),
        )
        .set("status", invoice.status.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoices() -> Vec<Invoice> {
        serde_json::from_str(
            r#"[
                {
                    "id": "11111111-1111-1111-1111-111111111111",
                    "vendorName": "Contoso Ltd",
                    "invoiceNumber": "INV-1001",
                    "invoiceDate": "2024-07-10",
                    "currency": "USD",
                    "subtotal": "1100.00",
                    "tax": "134.50",
                    "total": "1234.50",
                    "status": "pending_review",
                    "ocrConfidence": 0.94,
                    "createdAt": "2024-07-11T08:30:00Z"
                },
                {
                    "id": "22222222-2222-2222-2222-222222222222",
                    "vendorName": "Fabrikam Inc",
                    "invoiceNumber": "INV-1002",
                    "invoiceDate": "2024-06-21",
                    "currency": "USD",
                    "subtotal": "80.00",
                    "tax": "8.00",
                    "total": "88.00",
                    "status": "approved",
                    "createdAt": "2024-06-22T10:00:00Z"
                },
                {
                    "id": "33333333-3333-3333-3333-333333333333",
                    "vendorName": "Northwind",
                    "invoiceNumber": "INV-1003",
                    "currency": "USD",
                    "subtotal": "430.25",
                    "tax": "0.00",
                    "total": "430.25",
                    "status": "exception",
                    "createdAt": "2024-07-01T09:15:00Z"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_status_filter_uses_select_semantics() {
        let mut queue = ExtractionQueue::new(&invoices());
        queue.table_mut().set_filter("status", "APPROVED");

        let table = queue.table().view();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].text("invoice_number"), "INV-1002");
    }

    #[test]
    fn test_status_options_are_fixed_not_derived() {
        let queue = ExtractionQueue::new(&invoices());
        let options = queue.table().select_options("status");
        assert_eq!(options.len(), InvoiceStatus::ALL.len());
        assert!(options.contains(&"matched".to_string()));
    }

    #[test]
    fn test_sort_by_total_descending() {
        let mut queue = ExtractionQueue::new(&invoices());
        queue.table_mut().toggle_sort("total");
        queue.table_mut().toggle_sort("total");

        let table = queue.table().view();
        assert_eq!(table.rows()[0].text("invoice_number"), "INV-1001");
        assert_eq!(table.rows()[2].text("invoice_number"), "INV-1002");
    }

    #[test]
    fn test_confidence_renderer_handles_missing() {
        let queue = ExtractionQueue::new(&invoices());
        let columns = queue.table().columns();
        let confidence = columns.iter().find(|c| c.key() == "confidence").unwrap();

        assert_eq!(confidence.render_cell(&queue.table().rows()[0], 0, 1), "94%");
        assert_eq!(confidence.render_cell(&queue.table().rows()[1], 1, 1), "—");
    }

    #[test]
    fn test_open_count() {
        assert_eq!(ExtractionQueue::open_count(&invoices()), 2);
    }
}
