//! TypeScript bindings for the public model types via ts-rs.
//!
//! Run with: cargo test -p cohort-core export_bindings
//! Generated files appear in cohort-core/bindings/*.ts

#[test]
fn export_bindings() {
    // The #[ts(export)] derives do the real work: they write the .ts files
    // when `cargo test` runs. The type_name calls below only keep every
    // exported type importable.
    use cohort_core::{AggregateRow, CohortCell, Parameters, RampType};

    let _ = std::any::type_name::<Parameters>();
    let _ = std::any::type_name::<RampType>();
    let _ = std::any::type_name::<CohortCell>();
    let _ = std::any::type_name::<AggregateRow>();
}

#[test]
fn model_rows_serialize_with_field_names() {
    let row = cohort_core::AggregateRow {
        period: 2,
        total_headcount: 10.0,
        total_fte: 7.5,
        total_revenue: 750.0,
    };
    let json = serde_json::to_value(row).unwrap();
    assert_eq!(json["period"], 2);
    assert_eq!(json["total_fte"], 7.5);

    let ramp = serde_json::to_value(cohort_core::RampType::Sigmoid).unwrap();
    assert_eq!(ramp, "sigmoid");

    let parsed: cohort_core::RampType = serde_json::from_str("\"Sigmoid\"").unwrap();
    assert_eq!(parsed, cohort_core::RampType::Sigmoid);
    assert!(serde_json::from_str::<cohort_core::RampType>("\"cubic\"").is_err());
}
