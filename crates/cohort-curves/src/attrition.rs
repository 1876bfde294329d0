use cohort_core::Parameters;

/// Cumulative survival of a cohort under a constant annual attrition rate.
///
/// ```text
/// survival(age) = (1 - annualAttrition) ^ effectiveAge
/// effectiveAge  = age                 if attrition_y0
///               = max(age - 1, 0)     otherwise
/// ```
///
/// Output stays fractional; rounding to whole employees is the caller's call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttritionCurve {
    retention: f64,
    attrition_y0: bool,
}

impl AttritionCurve {
    pub fn new(annual_attrition: f64, attrition_y0: bool) -> Self {
        Self {
            retention: 1.0 - annual_attrition,
            attrition_y0,
        }
    }

    /// Assumes validated parameters.
    pub fn from_parameters(params: &Parameters) -> Self {
        Self::new(params.annual_attrition, params.attrition_y0)
    }

    /// Fraction of a cohort retained each period.
    pub fn retention(&self) -> f64 {
        self.retention
    }

    /// Number of attrition periods a cohort of `age` has been exposed to.
    pub fn effective_age(&self, age: usize) -> usize {
        if self.attrition_y0 {
            age
        } else {
            age.saturating_sub(1)
        }
    }

    /// Surviving fraction of the original cohort at `age`.
    pub fn survival(&self, age: usize) -> f64 {
        match self.effective_age(age) {
            0 => 1.0,
            n => self.retention.powi(i32::try_from(n).unwrap_or(i32::MAX)),
        }
    }
}
