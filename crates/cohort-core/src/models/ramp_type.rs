use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::errors::CohortError;

/// Shape of the productivity ramp-up curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RampType {
    /// Productivity grows by the same amount every period.
    #[default]
    Linear,
    /// S-curve: slow start, steep middle, slow finish.
    Sigmoid,
}

impl RampType {
    pub const ALL: [RampType; 2] = [RampType::Linear, RampType::Sigmoid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Sigmoid => "sigmoid",
        }
    }
}

impl fmt::Display for RampType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RampType {
    type Err = CohortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                CohortError::invalid(
                    "ramp_type",
                    format!("expected `linear` or `sigmoid`, got `{trimmed}`"),
                )
            })
    }
}

/// Accepts any casing, the same as [`FromStr`].
impl<'de> Deserialize<'de> for RampType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
