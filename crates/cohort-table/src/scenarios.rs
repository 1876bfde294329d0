//! Build many independent projections at once.

use cohort_core::{CohortResult, Parameters};
use rayon::prelude::*;
use tracing::info;

use crate::projection::CohortProjection;

/// Project every parameter set in parallel.
///
/// Results come back in input order; one invalid set does not affect the others.
pub fn project_all(scenarios: &[Parameters]) -> Vec<CohortResult<CohortProjection>> {
    let span = crate::scenarios_span!(scenarios.len());
    let _guard = span.enter();

    let results: Vec<_> = scenarios.par_iter().map(CohortProjection::build).collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        scenarios = scenarios.len(),
        failed, "scenario sweep complete"
    );
    results
}

/// Project every parameter set and keep only those that succeed, paired
/// with their input index.
pub fn project_valid(scenarios: &[Parameters]) -> Vec<(usize, CohortProjection)> {
    project_all(scenarios)
        .into_iter()
        .enumerate()
        .filter_map(|(i, r)| r.ok().map(|p| (i, p)))
        .collect()
}
