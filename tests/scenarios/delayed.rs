//! Verification after a settle delay.

use crate::common::{init_logging, scenario_in};
use harness_populate::IngestMode;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_short_delay_does_not_change_results() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let config = scenario_in(&dir)
        .with_mode(IngestMode::Immediate)
        .with_settle_delay(Some(Duration::from_millis(500)));

    let report = search_harness::run_scenario(&config).unwrap();

    assert!(report.passed(), "{}", report.summary());
    assert_eq!(report.settle_delay, Some(Duration::from_millis(500)));
    assert!(report.total_duration >= Duration::from_millis(500));
}

/// Full 60 second delay of the reference scenario.
#[test]
#[ignore = "sleeps for 60 seconds"]
fn test_sixty_second_delay() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let config = scenario_in(&dir).with_settle_delay(Some(Duration::from_secs(60)));

    let report = search_harness::run_scenario(&config).unwrap();
    assert!(report.passed(), "{}", report.summary());
}
