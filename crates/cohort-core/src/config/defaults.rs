// Single source of truth for all default values.

// --- Attrition ---
pub const DEFAULT_ANNUAL_ATTRITION: f64 = 0.15;
pub const DEFAULT_ATTRITION_Y0: bool = false;

// --- Ramp ---
pub const DEFAULT_BETA: f64 = 0.3;
pub const DEFAULT_SHIFT: i32 = 3;

// --- Hiring ---
pub const DEFAULT_FIRST_YEAR_FULL_HIRE: bool = false;
pub const DEFAULT_HIRES_PAD: i64 = 0;
