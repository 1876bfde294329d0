//! Span definitions for projection runs.

/// Create a projection span.
#[macro_export]
macro_rules! projection_span {
    ($forecast_period:expr, $ramp_type:expr) => {
        tracing::info_span!(
            "cohort.projection",
            forecast_period = $forecast_period,
            ramp_type = %$ramp_type
        )
    };
}

/// Create a scenario sweep span.
#[macro_export]
macro_rules! scenarios_span {
    ($scenario_count:expr) => {
        tracing::info_span!("cohort.scenarios", scenario_count = $scenario_count)
    };
}

