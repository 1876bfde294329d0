use cohort_core::config::defaults::DEFAULT_HIRES_PAD;
use cohort_core::{CohortError, CohortResult};
use serde::Serialize;
use tracing::debug;

/// Hires per cohort, reshaped to exactly one entry per forecast period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedHires(Vec<u64>);

impl NormalizedHires {
    /// Truncate or zero-pad `hires_per_year` to `forecast_period` entries.
    ///
    /// A length mismatch is not an error. A negative entry that survives
    /// truncation is.
    pub fn new(hires_per_year: &[i64], forecast_period: usize) -> CohortResult<Self> {
        let given = hires_per_year.len();
        if given > forecast_period {
            debug!(given, forecast_period, "truncating hires_per_year");
        } else if given < forecast_period {
            debug!(given, forecast_period, "padding hires_per_year with zeros");
        }

        let hires = hires_per_year
            .iter()
            .copied()
            .chain(std::iter::repeat(DEFAULT_HIRES_PAD))
            .take(forecast_period)
            .enumerate()
            .map(|(cohort, h)| {
                u64::try_from(h).map_err(|_| {
                    CohortError::invalid(
                        "hires_per_year",
                        format!("entry {cohort} is negative ({h})"),
                    )
                })
            })
            .collect::<CohortResult<Vec<_>>>()?;

        Ok(Self(hires))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size of cohort `cohort`; cohorts past the horizon have no hires.
    pub fn get(&self, cohort: usize) -> u64 {
        self.0.get(cohort).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Total hires over the horizon, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.0.iter().copied().fold(0u64, u64::saturating_add)
    }
}
