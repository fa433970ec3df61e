//! Match detail view

use tableview::Column;
use tableview::Row;
use tableview::Value;

use super::TableScreen;
use crate::model::CheckOutcome;
use crate::model::MatchCheck;
use crate::model::MatchOutcome;
use crate::model::MatchResult;
use crate::model::MatchStats;

/// The match detail screen for one invoice: the per-field comparison table
/// plus the outcome counts shown in the header.
///
/// Everything here is a rendering of the backend's precomputed payload.
#[derive(Debug, Clone)]
pub struct MatchView {
    outcome: MatchOutcome,
    stats: MatchStats,
    table: TableScreen,
}

impl MatchView {
    /// Rows per page for the checks table.
    pub const PAGE_SIZE: usize = 25;

    /// Builds the view from a fetched match result.
    pub fn new(result: &MatchResult) -> Self {
        let rows = result.checks.iter().map(check_row).collect();
        Self {
            outcome: result.outcome,
            stats: result.stats(),
            table: TableScreen::new(rows, Self::columns(), Self::PAGE_SIZE),
        }
    }

    /// Column definitions for the checks table.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::text("field", "Field").sortable().filterable(),
            Column::text("invoice_value", "Invoice").filterable(),
            Column::text("po_value", "Purchase Order").filterable(),
            Column::text("grn_value", "Goods Receipt").filterable(),
            Column::select("outcome", "Result")
                .filterable()
                .with_options(|_| {
                    [
                        CheckOutcome::Match,
                        CheckOutcome::Mismatch,
                        CheckOutcome::Missing,
                    ]
                    .iter()
                    .map(|outcome| outcome.as_str().to_string())
                    .collect()
                }),
        ]
    }

    /// Returns the overall match outcome.
    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Returns the header stats.
    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    /// Returns the checks table.
    pub fn table(&self) -> &TableScreen {
        &self.table
    }

    /// Returns the checks table for state mutations.
    pub fn table_mut(&mut self) -> &mut TableScreen {
        &mut self.table
    }
}

fn check_row(check: &MatchCheck) -> Row {
    Row::new()
        .set("field", check.field.clone())
        .set("invoice_value", check.invoice_value.clone())
        .set("po_value", Value::from(check.po_value.clone()))
        .set("grn_value", Value::from(check.grn_value.clone()))
        .set("outcome", check.outcome.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> MatchResult {
        serde_json::from_str(
            r#"{
                "invoiceId": "11111111-1111-1111-1111-111111111111",
                "outcome": "partial_match",
                "matchedPo": "PO-7701",
                "matchedGrn": "GRN-310",
                "checks": [
                    {"field": "vendor", "invoiceValue": "Contoso", "poValue": "Contoso", "outcome": "match"},
                    {"field": "total", "invoiceValue": "1234.50", "poValue": "1200.00", "outcome": "mismatch"},
                    {"field": "quantity", "invoiceValue": "2", "grnValue": "2", "outcome": "match"},
                    {"field": "unit_price", "invoiceValue": "550.00", "outcome": "missing"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_header_stats_mirror_payload() {
        let view = MatchView::new(&result());
        assert_eq!(view.outcome(), MatchOutcome::PartialMatch);

        let stats = view.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.matched, 2);
        assert_eq!(stats.mismatched, 1);
        assert_eq!(stats.missing, 1);
    }

    #[test]
    fn test_outcome_filter_narrows_checks() {
        let mut view = MatchView::new(&result());
        view.table_mut().set_filter("outcome", "mismatch");

        let table = view.table().view();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].text("field"), "total");
    }

    #[test]
    fn test_missing_sides_render_empty() {
        let view = MatchView::new(&result());
        let table = view.table().view();
        assert_eq!(table.rows()[3].text("po_value"), "");
        assert_eq!(table.rows()[3].text("grn_value"), "");
    }
}
