/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tenure credited in a cohort's first period when hires land mid-period.
pub const MID_PERIOD_TENURE: f64 = 0.5;

/// Tenure credited in the first period when the first cohort is already on board.
pub const FULL_PERIOD_TENURE: f64 = 1.0;

/// The sigmoid ramp is evaluated over `[-SIGMOID_HALF_WIDTH, SIGMOID_HALF_WIDTH]`.
pub const SIGMOID_HALF_WIDTH: f64 = 10.0;

/// Allowed range for the sigmoid shift.
pub const MIN_SHIFT: i32 = -10;
pub const MAX_SHIFT: i32 = 10;

/// Slack applied before rounding headcount so float noise (10.000000000000002)
/// does not round up a whole employee.
pub const ROUNDING_TOLERANCE: f64 = 1e-9;
