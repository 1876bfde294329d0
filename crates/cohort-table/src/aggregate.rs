use cohort_core::AggregateRow;
use serde::Serialize;

use crate::builder::CohortTable;

/// Totals per forecast period across every active cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateTable {
    rows: Vec<AggregateRow>,
}

impl AggregateTable {
    /// Sum each period's column of the cohort table. Cohorts not yet hired
    /// contribute zero cells, so no special-casing is needed.
    pub fn from_cohorts(table: &CohortTable) -> Self {
        let mut rows: Vec<AggregateRow> = (0..table.size())
            .map(|period| AggregateRow {
                period,
                ..AggregateRow::default()
            })
            .collect();

        for cohort_row in table.cells().rows() {
            for (row, cell) in rows.iter_mut().zip(cohort_row) {
                row.total_headcount += cell.headcount;
                row.total_fte += cell.fte;
                row.total_revenue += cell.revenue;
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    pub fn row(&self, period: usize) -> Option<&AggregateRow> {
        self.rows.get(period)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Revenue summed over the whole horizon.
    pub fn cumulative_revenue(&self) -> f64 {
        self.rows.iter().map(|r| r.total_revenue).sum()
    }
}
