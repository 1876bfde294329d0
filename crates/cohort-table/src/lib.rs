//! # cohort-table
//!
//! Multi-period revenue and workforce projection from a hiring plan.
//!
//! ## Pipeline
//!
//! | Stage | Output |
//! |-------|--------|
//! | Normalize | hires per cohort, exactly `forecast_period` long |
//! | Curves | ramp and survival fractions by cohort age |
//! | Build | `[cohort][period]` headcount, FTE, revenue |
//! | Aggregate | totals per period |
//!
//! Every stage is a pure function of the [`Parameters`](cohort_core::Parameters);
//! [`CohortProjection::build`] validates once up front and exposes the
//! resulting tables read-only.

pub mod aggregate;
pub mod builder;
pub mod normalize;
pub mod projection;
pub mod rounding;
pub mod scenarios;
pub mod spans;

pub use aggregate::AggregateTable;
pub use builder::CohortTable;
pub use normalize::NormalizedHires;
pub use projection::CohortProjection;
pub use rounding::Rounding;
