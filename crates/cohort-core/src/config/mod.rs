//! Parameter set for a single projection run.

pub mod defaults;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_SHIFT, MIN_SHIFT};
use crate::errors::{CohortError, CohortResult};
use crate::models::{CohortCell, RampType};

/// Immutable inputs to a cohort projection.
///
/// The four leading fields are required; everything else falls back to
/// [`defaults`] when omitted from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Parameters {
    /// Number of periods to project.
    pub forecast_period: usize,
    /// Periods it takes a new hire to reach full productivity.
    pub n_years: usize,
    /// Hires per cohort. Reshaped to `forecast_period` by truncation or zero-padding.
    pub hires_per_year: Vec<i64>,
    /// Revenue per fully productive person-period. Must be finite and
    /// non-negative; zero is accepted and yields an all-zero revenue table.
    pub revenue_goal: f64,
    /// Fraction of a cohort lost per period, in `[0, 1)`.
    #[serde(default = "default_annual_attrition")]
    pub annual_attrition: f64,
    #[serde(default)]
    pub ramp_type: RampType,
    /// Sigmoid steepness, in `[0, 1)`. Ignored for linear ramps.
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Sigmoid skew, in `[-10, 10]`. Positive values move the inflection later.
    #[serde(default = "default_shift")]
    pub shift: i32,
    /// The first cohort is on board for the whole first period.
    #[serde(default = "default_first_year_full_hire")]
    pub first_year_full_hire: bool,
    /// Apply attrition during a cohort's first period after hire.
    #[serde(default = "default_attrition_y0")]
    pub attrition_y0: bool,
}

fn default_annual_attrition() -> f64 {
    defaults::DEFAULT_ANNUAL_ATTRITION
}

fn default_beta() -> f64 {
    defaults::DEFAULT_BETA
}

fn default_shift() -> i32 {
    defaults::DEFAULT_SHIFT
}

fn default_first_year_full_hire() -> bool {
    defaults::DEFAULT_FIRST_YEAR_FULL_HIRE
}

fn default_attrition_y0() -> bool {
    defaults::DEFAULT_ATTRITION_Y0
}

impl Parameters {
    /// Create a parameter set with defaults for every optional field.
    pub fn new(
        forecast_period: usize,
        n_years: usize,
        hires_per_year: Vec<i64>,
        revenue_goal: f64,
    ) -> Self {
        Self {
            forecast_period,
            n_years,
            hires_per_year,
            revenue_goal,
            annual_attrition: defaults::DEFAULT_ANNUAL_ATTRITION,
            ramp_type: RampType::default(),
            beta: defaults::DEFAULT_BETA,
            shift: defaults::DEFAULT_SHIFT,
            first_year_full_hire: defaults::DEFAULT_FIRST_YEAR_FULL_HIRE,
            attrition_y0: defaults::DEFAULT_ATTRITION_Y0,
        }
    }

    pub fn with_attrition(mut self, annual_attrition: f64) -> Self {
        self.annual_attrition = annual_attrition;
        self
    }

    pub fn with_linear_ramp(mut self) -> Self {
        self.ramp_type = RampType::Linear;
        self
    }

    /// Switch to a sigmoid ramp with the given steepness and skew.
    pub fn with_sigmoid_ramp(mut self, beta: f64, shift: i32) -> Self {
        self.ramp_type = RampType::Sigmoid;
        self.beta = beta;
        self.shift = shift;
        self
    }

    pub fn with_first_year_full_hire(mut self, enabled: bool) -> Self {
        self.first_year_full_hire = enabled;
        self
    }

    pub fn with_attrition_y0(mut self, enabled: bool) -> Self {
        self.attrition_y0 = enabled;
        self
    }

    /// Load a parameter set from TOML. Does not validate.
    ///
    /// An unrecognized `ramp_type` is an `InvalidParameter`, not a
    /// configuration error.
    pub fn from_toml(toml_str: &str) -> CohortResult<Self> {
        let table: toml::Table = toml_str.parse()?;
        if let Some(toml::Value::String(ramp_type)) = table.get("ramp_type") {
            ramp_type.parse::<RampType>()?;
        }
        let params: Self = toml::Value::Table(table).try_into()?;
        Ok(params)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> CohortResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Whether a `forecast_period x forecast_period` table of cohort cells
    /// can be allocated without overflowing `isize::MAX` bytes.
    fn grid_fits_in_memory(forecast_period: usize) -> bool {
        forecast_period
            .checked_mul(forecast_period)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<CohortCell>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize)
    }

    /// Check every invariant, returning the first violation.
    ///
    /// `beta` and `shift` are only checked for sigmoid ramps.
    pub fn validate(&self) -> CohortResult<()> {
        if self.forecast_period < 1 {
            return Err(CohortError::invalid(
                "forecast_period",
                "must be at least 1",
            ));
        }
        if !Self::grid_fits_in_memory(self.forecast_period) {
            return Err(CohortError::invalid(
                "forecast_period",
                format!(
                    "{} periods is too large for a cohort table",
                    self.forecast_period
                ),
            ));
        }
        if self.n_years < 1 {
            return Err(CohortError::invalid("n_years", "must be at least 1"));
        }
        if let Some((cohort, hires)) = self
            .hires_per_year
            .iter()
            .enumerate()
            .find(|(_, hires)| **hires < 0)
        {
            return Err(CohortError::invalid(
                "hires_per_year",
                format!("entry {cohort} is negative ({hires})"),
            ));
        }
        if !self.revenue_goal.is_finite() || self.revenue_goal < 0.0 {
            return Err(CohortError::invalid(
                "revenue_goal",
                format!("must be a finite, non-negative number, got {}", self.revenue_goal),
            ));
        }
        if !(0.0..1.0).contains(&self.annual_attrition) {
            return Err(CohortError::invalid(
                "annual_attrition",
                format!("must be in [0, 1), got {}", self.annual_attrition),
            ));
        }
        if self.ramp_type == RampType::Sigmoid {
            if !(0.0..1.0).contains(&self.beta) {
                return Err(CohortError::invalid(
                    "beta",
                    format!("must be in [0, 1), got {}", self.beta),
                ));
            }
            if !(MIN_SHIFT..=MAX_SHIFT).contains(&self.shift) {
                return Err(CohortError::invalid(
                    "shift",
                    format!(
                        "must be in [{MIN_SHIFT}, {MAX_SHIFT}], got {}",
                        self.shift
                    ),
                ));
            }
        }
        Ok(())
    }
}
