//! Error types shared by every cohort crate.

/// Result alias used across the workspace.
pub type CohortResult<T> = Result<T, CohortError>;

/// Errors raised while loading or validating a parameter set.
#[derive(Debug, thiserror::Error)]
pub enum CohortError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl CohortError {
    /// Shorthand for an [`CohortError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, if this is a validation failure.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(*name),
            Self::ConfigError(_) => None,
        }
    }
}

impl From<toml::de::Error> for CohortError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<toml::ser::Error> for CohortError {
    fn from(e: toml::ser::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}
