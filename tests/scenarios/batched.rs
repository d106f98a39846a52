//! Single-batch ingestion.

use crate::common::{init_logging, scenario_in};
use harness_populate::IngestMode;
use tempfile::TempDir;

#[test]
fn test_batched_ingestion_finds_sample_and_reference() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let config = scenario_in(&dir).with_mode(IngestMode::Batched);

    let report = search_harness::run_scenario(&config).unwrap();

    assert!(report.passed(), "{}", report.summary());
    assert_eq!(report.ingest_metrics.documents_submitted, 5001);
    assert_eq!(report.ingest_metrics.batches_committed, 1);
}
