//! Uploaded documents page

use tableview::Column;
use tableview::Row;
use tableview::Value;

use super::TableScreen;
use crate::model::DocumentKind;
use crate::model::DocumentMeta;

/// The documents page: everything uploaded so far, newest first by default.
#[derive(Debug, Clone)]
pub struct DocumentsPage {
    table: TableScreen,
}

impl DocumentsPage {
    /// Rows per page.
    pub const PAGE_SIZE: usize = 25;

    /// Builds the page from fetched document metadata.
    pub fn new(documents: &[DocumentMeta]) -> Self {
        let rows = documents.iter().map(document_row).collect();
        let mut table = TableScreen::new(rows, Self::columns(), Self::PAGE_SIZE);
        table.toggle_sort("uploaded_at");
        table.toggle_sort("uploaded_at"); // newest first
        Self { table }
    }

    /// Column definitions for the documents table.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::text("file_name", "File").sortable().filterable(),
            Column::select("kind", "Kind").filterable().with_options(|_| {
                DocumentKind::ALL
                    .iter()
                    .map(|kind| kind.as_str().to_string())
                    .collect()
            }),
            Column::number("size_bytes", "Size")
                .sortable()
                .filterable()
                .with_render(|row, _, _| format_size(row.get("size_bytes"))),
            Column::date("uploaded_at", "Uploaded").sortable().filterable(),
            Column::text("uploaded_by", "By").filterable(),
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

fn document_row(document: &DocumentMeta) -> Row {
    Row::new()
        .set("id", document.id.to_string())
        .set("file_name", document.file_name.clone())
        .set("kind", document.kind.as_str())
        .set("size_bytes", document.size_bytes as i64)
        .set("uploaded_at", document.uploaded_at)
        .set("uploaded_by", Value::from(document.uploaded_by.clone()))
}

fn format_size(value: Option<&Value>) -> String {
    let bytes = value.and_then(Value::as_f64).unwrap_or(0.0);
    if bytes >= 1_048_576.0 {
        format!("{:.1} MB", bytes / 1_048_576.0)
    } else if bytes >= 1024.0 {
        format!("{:.1} KB", bytes / 1024.0)
    } else {
        format!("{} B", bytes as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documents() -> Vec<DocumentMeta> {
        serde_json::from_str(
            r#"[
                {
                    "id": "aaaaaaaa-1111-1111-1111-111111111111",
                    "fileName": "receipt-taxi.jpg",
                    "contentType": "image/jpeg",
                    "sizeBytes": 523431,
                    "kind": "receipt",
                    "uploadedAt": "2024-07-02T12:00:00Z",
                    "uploadedBy": "sam"
                },
                {
                    "id": "bbbbbbbb-2222-2222-2222-222222222222",
                    "fileName": "inv-contoso.pdf",
                    "contentType": "application/pdf",
                    "sizeBytes": 2411520,
                    "kind": "invoice_scan",
                    "uploadedAt": "2024-07-10T09:00:00Z"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_to_newest_first() {
        let page = DocumentsPage::new(&documents());
        let table = page.table().view();
        assert_eq!(table.rows()[0].text("file_name"), "inv-contoso.pdf");
    }

    #[test]
    fn test_kind_filter() {
        let mut page = DocumentsPage::new(&documents());
        page.table_mut().set_filter("kind", "receipt");
        let table = page.table().view();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].text("file_name"), "receipt-taxi.jpg");
    }

    #[test]
    fn test_size_renderer() {
        let page = DocumentsPage::new(&documents());
        let column = Column::number("size_bytes", "Size")
            .with_render(|row, _, _| format_size(row.get("size_bytes")));

        let row = Row::new().set("size_bytes", 523431i64);
        assert_eq!(column.render_cell(&row, 0, 1), "511.2 KB");
        let row = Row::new().set("size_bytes", 2411520i64);
        assert_eq!(column.render_cell(&row, 0, 1), "2.3 MB");
        let row = Row::new().set("size_bytes", 12i64);
        assert_eq!(column.render_cell(&row, 0, 1), "12 B");
        assert_eq!(page.table().rows().len(), 2);
    }
}
