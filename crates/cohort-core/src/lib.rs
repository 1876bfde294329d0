//! # cohort-core
//!
//! Foundation crate for cohort ramp projections.
//! Defines the parameter set, its defaults and validation, the error type,
//! and the grid/row types every table is built from.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::Parameters;
pub use errors::{CohortError, CohortResult};
pub use models::{AggregateRow, CohortCell, Grid, RampType};
