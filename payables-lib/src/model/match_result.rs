//! Three-way match payload

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The precomputed three-way match payload for one invoice.
///
/// The backend compares invoice, purchase order, and goods receipt and
/// ships the per-field comparison down; this client renders and summarizes
/// the payload but never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The invoice the match was run for.
    pub invoice_id: Uuid,
    /// Overall outcome.
    pub outcome: MatchOutcome,
    /// PO number the backend matched against, if found.
    #[serde(default)]
    pub matched_po: Option<String>,
    /// GRN number the backend matched against, if found.
    #[serde(default)]
    pub matched_grn: Option<String>,
    /// Per-field comparisons.
    #[serde(default)]
    pub checks: Vec<MatchCheck>,
}

impl MatchResult {
    /// Summarizes the per-field checks for the match detail header.
    pub fn stats(&self) -> MatchStats {
        let mut stats = MatchStats {
            total: self.checks.len(),
            ..MatchStats::default()
        };
        for check in &self.checks {
            match check.outcome {
                CheckOutcome::Match => stats.matched += 1,
                CheckOutcome::Mismatch => stats.mismatched += 1,
                CheckOutcome::Missing => stats.missing += 1,
            }
        }
        stats
    }
}

/// One field-level comparison across the three documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCheck {
    /// Compared field (e.g., `"total"`, `"vendor"`, `"quantity"`).
    pub field: String,
    /// The invoice-side value, as the backend formatted it.
    pub invoice_value: String,
    /// The PO-side value, if present.
    #[serde(default)]
    pub po_value: Option<String>,
    /// The GRN-side value, if present.
    #[serde(default)]
    pub grn_value: Option<String>,
    /// Outcome of this comparison.
    pub outcome: CheckOutcome,
}

/// Overall outcome of a three-way match run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// All checks agree.
    Matched,
    /// Some checks agree; discrepancies remain.
    PartialMatch,
    /// Material disagreement between documents.
    Mismatch,
    /// No PO or GRN could be located.
    NotFound,
}

impl MatchOutcome {
    /// Returns the wire/display name of the outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Matched => "matched",
            MatchOutcome::PartialMatch => "partial_match",
            MatchOutcome::Mismatch => "mismatch",
            MatchOutcome::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one field-level comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Values agree.
    Match,
    /// Values disagree.
    Mismatch,
    /// One side has no value to compare.
    Missing,
}

impl CheckOutcome {
    /// Returns the wire/display name of the outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckOutcome::Match => "match",
            CheckOutcome::Mismatch => "mismatch",
            CheckOutcome::Missing => "missing",
        }
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counts of field-level check outcomes, shown above the match table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Number of checks in total.
    pub total: usize,
    /// Checks that agreed.
    pub matched: usize,
    /// Checks that disagreed.
    pub mismatched: usize,
    /// Checks with a missing side.
    pub missing: usize,
}
