//! CohortProjection: validates a parameter set once and builds every table.

use cohort_core::{CohortResult, Grid, Parameters};
use cohort_curves::{AttritionCurve, RampCurve};
use serde::Serialize;
use tracing::{info, warn};

use crate::aggregate::AggregateTable;
use crate::builder::{self, CohortTable};
use crate::normalize::NormalizedHires;
use crate::rounding::Rounding;

/// Immutable result of a projection run.
///
/// Built in one pass: parameters → normalized hires → curves → cohort
/// table → aggregate totals. Re-run [`CohortProjection::build`] with new
/// parameters to get new tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortProjection {
    parameters: Parameters,
    hires: NormalizedHires,
    productivity: Grid<f64>,
    survival: Grid<f64>,
    cohorts: CohortTable,
    totals: AggregateTable,
}

impl CohortProjection {
    /// Validate `parameters` and compute every table.
    ///
    /// Fails with `InvalidParameter` before anything is computed.
    pub fn build(parameters: &Parameters) -> CohortResult<Self> {
        let span = crate::projection_span!(parameters.forecast_period, parameters.ramp_type);
        let _guard = span.enter();

        if let Err(e) = parameters.validate() {
            warn!(error = %e, "rejecting projection parameters");
            return Err(e);
        }

        let hires = NormalizedHires::new(&parameters.hires_per_year, parameters.forecast_period)?;
        let ramp = RampCurve::from_parameters(parameters);
        let attrition = AttritionCurve::from_parameters(parameters);

        let size = hires.len();
        let productivity = builder::productivity_grid(size, &ramp);
        let survival = builder::survival_grid(size, &attrition);
        let cohorts = CohortTable::build(&hires, &ramp, &attrition, parameters.revenue_goal);
        let totals = AggregateTable::from_cohorts(&cohorts);

        info!(
            periods = size,
            hires = hires.total(),
            final_revenue = totals.rows().last().map_or(0.0, |r| r.total_revenue),
            "projection built"
        );

        Ok(Self {
            parameters: parameters.clone(),
            hires,
            productivity,
            survival,
            cohorts,
            totals,
        })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn normalized_hires(&self) -> &NormalizedHires {
        &self.hires
    }

    /// Headcount, FTE, and revenue per cohort per period.
    pub fn cohort_table(&self) -> &CohortTable {
        &self.cohorts
    }

    /// Totals per period.
    pub fn aggregate_table(&self) -> &AggregateTable {
        &self.totals
    }

    /// Ramp-up productivity fraction per cohort per period.
    pub fn productivity_table(&self) -> &Grid<f64> {
        &self.productivity
    }

    /// Fraction of each cohort still employed per period.
    pub fn survival_table(&self) -> &Grid<f64> {
        &self.survival
    }

    /// Headcount rounded to whole employees, cell by cell.
    pub fn rounded_headcount(&self, rounding: Rounding) -> Grid<f64> {
        self.cohorts.headcount().map(|h| rounding.apply(h))
    }
}
