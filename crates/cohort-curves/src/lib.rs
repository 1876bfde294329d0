//! # cohort-curves
//!
//! Per-age curves applied to every hiring cohort.
//! Ramp: productivity fraction by age, linear or sigmoid.
//! Attrition: surviving fraction of the original cohort by age.
//!
//! Both curves are pure functions of age and the parameter set; they hold no
//! per-cohort state.

pub mod attrition;
pub mod ramp;

pub use attrition::AttritionCurve;
pub use ramp::{HireTiming, RampCurve, RampShape};
