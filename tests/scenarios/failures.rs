//! Failure taxonomy of scenario runs.

use crate::common::{init_logging, scenario_in};
use search_harness::{run_scenario, ScenarioError};
use tempfile::TempDir;

#[test]
fn test_missing_reference_aborts_before_index_creation() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let config = scenario_in(&dir).with_reference_path(dir.path().join("missing.jsonld"));

    let err = run_scenario(&config).unwrap_err();

    assert!(matches!(err, ScenarioError::Load(_)));
    assert!(!dir.path().join("index.harness").exists());
}

#[test]
fn test_invalid_configuration() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let err = run_scenario(&scenario_in(&dir).with_count(0)).unwrap_err();
    assert!(matches!(err, ScenarioError::Configuration(_)));

    let err = run_scenario(&scenario_in(&dir).with_count(10)).unwrap_err();
    assert!(matches!(err, ScenarioError::Configuration(_)));
    assert!(!dir.path().join("index.harness").exists());
}

#[test]
fn test_wrong_expectation_is_an_assertion_failure() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let mut config = scenario_in(&dir).with_count(100);
    config.reference.value = "om:kelvin".to_string();

    let err = run_scenario(&config).unwrap_err();

    let report = match err {
        ScenarioError::Assertion(report) => report,
        other => panic!("expected assertion failure, got {other:?}"),
    };
    assert_eq!(report.checks, 2);
    assert_eq!(report.failed, 1);
    let mismatch = &report.mismatches[0];
    assert_eq!(mismatch.query, r"+properties.temperature.unit:om\:kelvin");
    assert_eq!(mismatch.expected_ids, vec!["tm1"]);
    assert!(mismatch.actual_ids.is_empty());
    assert_eq!(mismatch.actual_total, 0);
}
