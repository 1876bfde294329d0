use cohort_core::constants::ROUNDING_TOLERANCE;
use serde::{Deserialize, Serialize};

/// How fractional headcount becomes whole employees for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Any fraction of an employee counts as one.
    Ceil,
    /// Half an employee or more counts as one; less is zero, so a small
    /// cohort can attrite all the way to nobody.
    #[default]
    Nearest,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        let rounded = match self {
            Self::Ceil => (value - ROUNDING_TOLERANCE).ceil(),
            Self::Nearest => (value + ROUNDING_TOLERANCE).round(),
        };
        rounded.max(0.0)
    }
}
