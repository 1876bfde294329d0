use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One cell of the cohort table: a single cohort in a single period.
///
/// Cells for periods before the cohort is hired stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CohortCell {
    /// Surviving employees (fractional, never rounded).
    pub headcount: f64,
    /// Headcount weighted by the cohort's ramp-up productivity.
    pub fte: f64,
    /// `fte * revenue_goal`.
    pub revenue: f64,
}

/// Totals across every cohort for one forecast period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregateRow {
    /// 0-based forecast period.
    pub period: usize,
    pub total_headcount: f64,
    pub total_fte: f64,
    pub total_revenue: f64,
}
