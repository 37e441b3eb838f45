use crate::common::*;

use includes_conformance::meta::{ALL_PROPERTIES, BuiltinMutation, MetaRunner, builtin_mutations};

#[test]
fn meta_oracle_trips_on_mutations() {
    init_test_logging();
    test_phase!("meta_oracle_trips_on_mutations");

    let runner = MetaRunner::new(DEFAULT_TEST_SEED).with_workers(Some(2));
    let report = runner.run(builtin_mutations()).expect("meta run");
    let failures = report.failures();
    assert!(
        failures.is_empty(),
        "meta oracle failures:\n{}",
        report.to_text()
    );
    assert_eq!(report.results().len(), builtin_mutations().len());

    test_complete!("meta_oracle_trips_on_mutations");
}

#[test]
fn meta_coverage_names_every_property() {
    init_test_logging();
    test_phase!("meta_coverage_names_every_property");

    let report = MetaRunner::new(DEFAULT_TEST_SEED)
        .with_rounds(1)
        .with_workers(Some(2))
        .run([
            BuiltinMutation::EmptyFirstAccepts,
            BuiltinMutation::EmptySecondRejects,
        ])
        .expect("meta run");
    let coverage = report.coverage();
    let names: Vec<&str> = coverage.entries().iter().map(|e| e.property).collect();
    assert_eq!(names, ALL_PROPERTIES);
    let missing = coverage.missing_properties();
    assert_eq!(missing, ["multiplicity", "run_partitioning"]);
    assert!(report.to_text().contains("multiplicity: <missing>"));

    test_complete!("meta_coverage_names_every_property");
}
