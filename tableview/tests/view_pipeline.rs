//! End-to-end tests for the filter → sort → paginate pipeline, driven the
//! way a queue screen drives it: one row collection, one column set, one
//! mutable `TableState`.

use tableview::{Column, PageToken, Row, TableState, view};

fn invoice(vendor: &str, number: &str, date: &str, total: f64, status: &str) -> Row {
    Row::new()
        .set("vendor", vendor)
        .set("invoice_number", number)
        .set("invoice_date", date)
        .set("total", total)
        .set("status", status)
}

fn queue_rows() -> Vec<Row> {
    vec![
        invoice("Contoso Ltd", "INV-1001", "2024-07-10", 1234.50, "pending"),
        invoice("Fabrikam Inc", "INV-1002", "2024-07-02", 88.00, "approved"),
        invoice("Northwind", "INV-1003", "2024-06-21", 430.25, "pending"),
        invoice("Contoso Ltd", "INV-1004", "2024-07-15", 1234.50, "approved"),
        invoice("Adventure Works", "INV-1005", "not-scanned", 12.99, "pending"),
        invoice("Tailspin Toys", "INV-1006", "2024-05-30", 5600.00, "rejected"),
        invoice("Contoso Ltd", "INV-1007", "2024-07-20", 77.10, "pending"),
    ]
}

fn queue_columns() -> Vec<Column> {
    vec![
        Column::text("vendor", "Vendor").sortable().filterable(),
        Column::text("invoice_number", "Invoice #").sortable().filterable(),
        Column::date("invoice_date", "Invoice Date").sortable().filterable(),
        Column::number("total", "Total").sortable().filterable(),
        Column::select("status", "Status").filterable(),
    ]
}

#[test]
fn filter_sort_page_flow() {
    let rows = queue_rows();
    let columns = queue_columns();
    let mut state = TableState::with_page_size(2);

    // Status select narrows to the four pending invoices.
    state.set_filter("status", "PENDING");
    let table = view(&rows, &columns, &state);
    assert_eq!(table.total_pages(), 2);
    assert_eq!(table.rows().len(), 2);

    // Sorting by total resets to page 1 and orders ascending.
    state.goto_page(2, table.total_pages());
    state.toggle_sort("total");
    assert_eq!(state.page().current, 1);
    let table = view(&rows, &columns, &state);
    assert_eq!(table.rows()[0].text("invoice_number"), "INV-1005");
    assert_eq!(table.rows()[1].text("invoice_number"), "INV-1007");

    // Second click flips to descending.
    state.toggle_sort("total");
    let table = view(&rows, &columns, &state);
    assert_eq!(table.rows()[0].text("invoice_number"), "INV-1001");
}

#[test]
fn date_filter_keeps_unscanned_invoice_visible() {
    let rows = queue_rows();
    let columns = queue_columns();
    let mut state = TableState::with_page_size(25);

    state.set_filter("invoice_date", "2024-07-10");
    let table = view(&rows, &columns, &state);
    let numbers: Vec<String> = table
        .rows()
        .iter()
        .map(|row| row.text("invoice_number"))
        .collect();

    // On-or-after 2024-07-10, plus the unparseable "not-scanned" row which
    // a date filter never excludes.
    assert_eq!(numbers, vec!["INV-1001", "INV-1004", "INV-1005", "INV-1007"]);
}

#[test]
fn number_filter_is_substring_not_range() {
    let rows = queue_rows();
    let columns = queue_columns();
    let mut state = TableState::with_page_size(25);

    state.set_filter("total", "34");
    let table = view(&rows, &columns, &state);
    assert_eq!(table.rows().len(), 2);
    for row in table.rows() {
        assert_eq!(row.text("total"), "1234.5");
    }
}

#[test]
fn pager_tokens_follow_page_position() {
    let rows: Vec<Row> = (0..95).map(|i| Row::new().set("n", i as i64)).collect();
    let columns = vec![Column::number("n", "N").sortable()];
    let mut state = TableState::with_page_size(10);

    let table = view(&rows, &columns, &state);
    assert_eq!(table.total_pages(), 10);
    assert_eq!(
        table.pager(),
        &[
            PageToken::Page(1),
            PageToken::Page(2),
            PageToken::Page(3),
            PageToken::Page(4),
            PageToken::Ellipsis,
            PageToken::Page(10),
        ]
    );

    state.goto_page(6, 10);
    let table = view(&rows, &columns, &state);
    assert_eq!(
        table.pager(),
        &[
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(5),
            PageToken::Page(6),
            PageToken::Page(7),
            PageToken::Ellipsis,
            PageToken::Page(10),
        ]
    );

    // The last page holds the 5-row remainder.
    state.goto_page(10, 10);
    let table = view(&rows, &columns, &state);
    assert_eq!(table.rows().len(), 5);
}

#[test]
fn repeated_views_are_deep_equal() {
    let rows = queue_rows();
    let columns = queue_columns();
    let mut state = TableState::with_page_size(3);
    state.set_filter("vendor", "contoso");
    state.toggle_sort("invoice_date");

    let baseline = view(&rows, &columns, &state);
    for _ in 0..10 {
        assert_eq!(view(&rows, &columns, &state), baseline);
    }
}
