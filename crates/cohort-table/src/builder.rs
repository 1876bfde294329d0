use cohort_core::{CohortCell, Grid};
use cohort_curves::{AttritionCurve, RampCurve};
use serde::Serialize;

use crate::normalize::NormalizedHires;

/// Headcount, FTE, and revenue for every cohort in every period.
///
/// Row `c` is the cohort hired in period `c`; it is zero before period `c`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CohortTable {
    cells: Grid<CohortCell>,
}

impl CohortTable {
    /// Build the table from normalized hires and the two curves.
    ///
    /// ```text
    /// age              = t - c
    /// headcount(c, t)  = hires[c] × survival(age)
    /// fte(c, t)        = headcount(c, t) × productivity(c, age)
    /// revenue(c, t)    = fte(c, t) × revenueGoal
    /// ```
    pub fn build(
        hires: &NormalizedHires,
        ramp: &RampCurve,
        attrition: &AttritionCurve,
        revenue_goal: f64,
    ) -> Self {
        let cells = Grid::from_active(hires.len(), |cohort, period| {
            let age = period - cohort;
            let headcount = hires.get(cohort) as f64 * attrition.survival(age);
            let fte = headcount * ramp.productivity_for(cohort, age);
            CohortCell {
                headcount,
                fte,
                revenue: fte * revenue_goal,
            }
        });
        Self { cells }
    }

    /// Number of cohorts, equal to the number of forecast periods.
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    pub fn cell(&self, cohort: usize, period: usize) -> Option<CohortCell> {
        self.cells.get(cohort, period)
    }

    pub fn cells(&self) -> &Grid<CohortCell> {
        &self.cells
    }

    pub fn headcount(&self) -> Grid<f64> {
        self.cells.map(|c| c.headcount)
    }

    pub fn fte(&self) -> Grid<f64> {
        self.cells.map(|c| c.fte)
    }

    pub fn revenue(&self) -> Grid<f64> {
        self.cells.map(|c| c.revenue)
    }
}

/// Per-cohort productivity fractions, zero before each cohort is hired.
pub fn productivity_grid(size: usize, ramp: &RampCurve) -> Grid<f64> {
    Grid::from_active(size, |cohort, period| {
        ramp.productivity_for(cohort, period - cohort)
    })
}

/// Per-cohort cumulative survival fractions, zero before each cohort is hired.
pub fn survival_grid(size: usize, attrition: &AttritionCurve) -> Grid<f64> {
    Grid::from_active(size, |cohort, period| attrition.survival(period - cohort))
}
