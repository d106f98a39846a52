//! Per-document ingestion followed by immediate verification.

use crate::common::{init_logging, scenario_in};
use corpus_generator::Person;
use harness_populate::IngestMode;
use tempfile::TempDir;

#[test]
fn test_immediate_ingestion_finds_sample_and_reference() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let config = scenario_in(&dir).with_mode(IngestMode::Immediate);

    let report = search_harness::run_scenario(&config).unwrap();

    assert!(report.passed(), "{}", report.summary());
    assert_eq!(report.verification.checks, 2);
    assert_eq!(report.ingest_metrics.documents_submitted, 5001);
    assert_eq!(report.ingest_metrics.batches_committed, 0);
}

#[test]
fn test_sample_record_is_persisted() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let config = scenario_in(&dir);

    let report = search_harness::run_scenario(&config).unwrap();

    let path = report.sample_path.unwrap();
    assert_eq!(path, dir.path().join("jsonfiles").join("person_50.json"));
    let person: Person = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(person.id, 50);
    assert_eq!(person.name.first, "Walter");
    assert_eq!(person.name.last, "Campbell");
    assert_eq!(person.city, "Independence");
    assert_eq!(person.age, 34);
    assert_eq!(person.like, vec![349]);
}

#[test]
fn test_rerun_replaces_previous_index() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let config = scenario_in(&dir).with_count(200);

    search_harness::run_scenario(&config).unwrap();
    let report = search_harness::run_scenario(&config).unwrap();
    assert!(report.passed());
}
