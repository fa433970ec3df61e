//! Administrative dashboard

use tableview::Column;
use tableview::Row;
use tableview::Value;

use super::TableScreen;
use crate::model::ApprovalRule;
use crate::model::Vendor;

/// The admin dashboard: vendor configuration and approval routing rules,
/// each rendered through its own table.
#[derive(Debug, Clone)]
pub struct AdminDashboard {
    vendors: TableScreen,
    rules: TableScreen,
    summary: AdminSummary,
}

/// Headline counts shown above the dashboard tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSummary {
    /// Vendors on file.
    pub vendor_count: usize,
    /// Vendors accepting new invoices.
    pub active_vendors: usize,
    /// Approval rules configured.
    pub rule_count: usize,
}

impl AdminDashboard {
    /// Rows per page for both tables.
    pub const PAGE_SIZE: usize = 10;

    /// Builds the dashboard from fetched configuration.
    pub fn new(vendors: &[Vendor], rules: &[ApprovalRule]) -> Self {
        let summary = AdminSummary {
            vendor_count: vendors.len(),
            active_vendors: vendors.iter().filter(|v| v.active).count(),
            rule_count: rules.len(),
        };

        Self {
            vendors: TableScreen::new(
                vendors.iter().map(vendor_row).collect(),
                Self::vendor_columns(),
                Self::PAGE_SIZE,
            ),
            rules: TableScreen::new(
                rules.iter().map(rule_row).collect(),
                Self::rule_columns(),
                Self::PAGE_SIZE,
            ),
            summary,
        }
    }

    /// Column definitions for the vendor table.
    pub fn vendor_columns() -> Vec<Column> {
        vec![
            Column::text("name", "Vendor").sortable().filterable(),
            Column::text("tax_id", "Tax ID").filterable(),
            Column::select("payment_terms", "Terms").filterable(),
            Column::select("active", "Active")
                .filterable()
                .with_options(|_| vec!["true".to_string(), "false".to_string()]),
        ]
    }

    /// Column definitions for the approval rule table.
    pub fn rule_columns() -> Vec<Column> {
        vec![
            Column::select("category", "Category").filterable(),
            Column::number("threshold", "Threshold").sortable().filterable(),
            Column::text("approver_role", "Approver Role").filterable(),
        ]
    }

    /// Returns the vendor table.
    pub fn vendors(&self) -> &TableScreen {
        &self.vendors
    }

    /// Returns the vendor table for state mutations.
    pub fn vendors_mut(&mut self) -> &mut TableScreen {
        &mut self.vendors
    }

    /// Returns the approval rule table.
    pub fn rules(&self) -> &TableScreen {
        &self.rules
    }

    /// Returns the approval rule table for state mutations.
    pub fn rules_mut(&mut self) -> &mut TableScreen {
        &mut self.rules
    }

    /// Returns the headline counts.
    pub fn summary(&self) -> AdminSummary {
        self.summary
    }
}

fn vendor_row(vendor: &Vendor) -> Row {
    Row::new()
        .set("id", vendor.id.to_string())
        .set("name", vendor.name.clone())
        .set("tax_id", Value::from(vendor.tax_id.clone()))
        .set("payment_terms", vendor.payment_terms.clone())
        .set("active", vendor.active.to_string())
}

fn rule_row(rule: &ApprovalRule) -> Row {
    Row::new()
        .set("id", rule.id.to_string())
        .set("category", rule.category.as_str())
        .set("threshold", rule.threshold.value())
        .set("approver_role", rule.approver_role.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Vendor>, Vec<ApprovalRule>) {
        let vendors: Vec<Vendor> = serde_json::from_str(
            r#"[
                {
                    "id": "11111111-1111-1111-1111-111111111111",
                    "name": "Contoso Ltd",
                    "taxId": "12-3456789",
                    "paymentTerms": "net30",
                    "active": true
                },
                {
                    "id": "22222222-2222-2222-2222-222222222222",
                    "name": "Fabrikam Inc",
                    "paymentTerms": "net60",
                    "active": false
                }
            ]"#,
        )
        .unwrap();

        let rules: Vec<ApprovalRule> = serde_json::from_str(
            r#"[
                {
                    "id": "33333333-3333-3333-3333-333333333333",
                    "category": "travel",
                    "threshold": "500.00",
                    "approverRole": "manager"
                }
            ]"#,
        )
        .unwrap();

        (vendors, rules)
    }

    #[test]
    fn test_summary_counts() {
        let (vendors, rules) = fixture();
        let dashboard = AdminDashboard::new(&vendors, &rules);

        let summary = dashboard.summary();
        assert_eq!(summary.vendor_count, 2);
        assert_eq!(summary.active_vendors, 1);
        assert_eq!(summary.rule_count, 1);
    }

    #[test]
    fn test_active_select_filter() {
        let (vendors, rules) = fixture();
        let mut dashboard = AdminDashboard::new(&vendors, &rules);

        dashboard.vendors_mut().set_filter("active", "false");
        let table = dashboard.vendors().view();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].text("name"), "Fabrikam Inc");
    }

    #[test]
    fn test_payment_terms_options_derived_from_data() {
        let (vendors, rules) = fixture();
        let dashboard = AdminDashboard::new(&vendors, &rules);
        assert_eq!(
            dashboard.vendors().select_options("payment_terms"),
            vec!["net30", "net60"]
        );
    }
}
