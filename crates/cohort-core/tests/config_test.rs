use cohort_core::config::*;
use cohort_core::{CohortError, RampType};

fn base() -> Parameters {
    Parameters::new(5, 3, vec![10, 12, 15, 18, 20], 100_000.0)
}

#[test]
fn new_fills_documented_defaults() {
    let params = base();
    assert_eq!(params.annual_attrition, 0.15);
    assert_eq!(params.ramp_type, RampType::Linear);
    assert_eq!(params.beta, 0.3);
    assert_eq!(params.shift, 3);
    assert!(!params.first_year_full_hire);
    assert!(!params.attrition_y0);
    assert!(params.validate().is_ok());
}

#[test]
fn config_loads_minimal_toml_with_defaults() {
    let toml = r#"
forecast_period = 5
n_years = 3
hires_per_year = [10, 12, 15]
revenue_goal = 250000.0
"#;
    let params = Parameters::from_toml(toml).unwrap();
    assert_eq!(params.forecast_period, 5);
    assert_eq!(params.hires_per_year, vec![10, 12, 15]);
    assert_eq!(params.annual_attrition, defaults::DEFAULT_ANNUAL_ATTRITION);
    assert_eq!(params.ramp_type, RampType::Linear);
    assert_eq!(params.shift, defaults::DEFAULT_SHIFT);
}

#[test]
fn config_loads_overrides() {
    let toml = r#"
forecast_period = 8
n_years = 4
hires_per_year = [3]
revenue_goal = 1.0
annual_attrition = 0.1
ramp_type = "sigmoid"
beta = 0.5
shift = -2
first_year_full_hire = true
attrition_y0 = true
"#;
    let params = Parameters::from_toml(toml).unwrap();
    assert_eq!(params.ramp_type, RampType::Sigmoid);
    assert_eq!(params.beta, 0.5);
    assert_eq!(params.shift, -2);
    assert!(params.first_year_full_hire);
    assert!(params.attrition_y0);
    assert!(params.validate().is_ok());
}

#[test]
fn config_missing_required_field_is_config_error() {
    let err = Parameters::from_toml("forecast_period = 3\n").unwrap_err();
    assert!(matches!(err, CohortError::ConfigError(_)));
}

#[test]
fn config_unknown_ramp_type_is_invalid_parameter() {
    let toml = r#"
forecast_period = 3
n_years = 1
hires_per_year = [1]
revenue_goal = 1.0
ramp_type = "exponential"
"#;
    let err = Parameters::from_toml(toml).unwrap_err();
    assert_eq!(err.parameter(), Some("ramp_type"));
    assert!(err.to_string().contains("exponential"));
}

#[test]
fn config_ramp_type_ignores_case() {
    for (raw, expected) in [
        ("Sigmoid", RampType::Sigmoid),
        ("SIGMOID", RampType::Sigmoid),
        ("Linear", RampType::Linear),
    ] {
        let toml = format!(
            "forecast_period = 3\nn_years = 1\nhires_per_year = [1]\nrevenue_goal = 1.0\nramp_type = \"{raw}\"\n"
        );
        let params = Parameters::from_toml(&toml).unwrap();
        assert_eq!(params.ramp_type, expected, "{raw}");
    }
}

#[test]
fn forecast_period_too_large_to_allocate_is_rejected() {
    let err = Parameters::new(usize::MAX, 1, vec![1], 1.0)
        .validate()
        .unwrap_err();
    assert_eq!(err.parameter(), Some("forecast_period"));

    let err = Parameters::new(1 << 40, 1, vec![1], 1.0)
        .validate()
        .unwrap_err();
    assert_eq!(err.parameter(), Some("forecast_period"));
}

#[test]
fn config_toml_roundtrip_preserves_values() {
    let params = base().with_sigmoid_ramp(0.4, -3).with_attrition_y0(true);
    let toml_str = params.to_toml().unwrap();
    let back = Parameters::from_toml(&toml_str).unwrap();
    assert_eq!(back, params);
}

#[test]
fn zero_forecast_period_is_rejected() {
    let err = Parameters::new(0, 1, vec![10], 100.0).validate().unwrap_err();
    assert_eq!(err.parameter(), Some("forecast_period"));
}

#[test]
fn zero_ramp_length_is_rejected() {
    let err = Parameters::new(3, 0, vec![10], 100.0).validate().unwrap_err();
    assert_eq!(err.parameter(), Some("n_years"));
}

#[test]
fn negative_hires_are_rejected() {
    let err = Parameters::new(3, 1, vec![4, -1], 100.0)
        .validate()
        .unwrap_err();
    assert_eq!(err.parameter(), Some("hires_per_year"));
    assert!(err.to_string().contains("entry 1"));
}

#[test]
fn attrition_must_be_below_one() {
    for bad in [1.0, 1.5, -0.01, f64::NAN] {
        let err = base().with_attrition(bad).validate().unwrap_err();
        assert_eq!(err.parameter(), Some("annual_attrition"), "value {bad}");
    }
    assert!(base().with_attrition(0.0).validate().is_ok());
    assert!(base().with_attrition(0.99).validate().is_ok());
}

#[test]
fn revenue_goal_must_be_finite_and_non_negative() {
    for bad in [-1.0, f64::INFINITY, f64::NAN] {
        let mut params = base();
        params.revenue_goal = bad;
        assert_eq!(params.validate().unwrap_err().parameter(), Some("revenue_goal"));
    }
    let mut zero = base();
    zero.revenue_goal = 0.0;
    assert!(zero.validate().is_ok());
}

#[test]
fn sigmoid_bounds_are_checked_only_for_sigmoid() {
    let err = base().with_sigmoid_ramp(1.0, 0).validate().unwrap_err();
    assert_eq!(err.parameter(), Some("beta"));

    let err = base().with_sigmoid_ramp(0.3, 11).validate().unwrap_err();
    assert_eq!(err.parameter(), Some("shift"));

    let err = base().with_sigmoid_ramp(0.3, -11).validate().unwrap_err();
    assert_eq!(err.parameter(), Some("shift"));

    // Out-of-range sigmoid knobs are ignored by a linear ramp.
    let linear = base().with_sigmoid_ramp(5.0, 40).with_linear_ramp();
    assert!(linear.validate().is_ok());

    assert!(base().with_sigmoid_ramp(0.0, -10).validate().is_ok());
    assert!(base().with_sigmoid_ramp(0.99, 10).validate().is_ok());
}

mod properties {
    use cohort_core::Parameters;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn in_range_sigmoid_parameters_validate(
            forecast_period in 1usize..30,
            n_years in 1usize..15,
            hires in proptest::collection::vec(0i64..500, 0..40),
            attrition in 0.0f64..1.0,
            beta in 0.0f64..1.0,
            shift in -10i32..=10,
        ) {
            let params = Parameters::new(forecast_period, n_years, hires, 1_000.0)
                .with_attrition(attrition)
                .with_sigmoid_ramp(beta, shift);
            prop_assert!(params.validate().is_ok());
        }
    }
}
