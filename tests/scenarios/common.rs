//! Shared helpers for scenario tests.

use search_harness::ScenarioConfig;
use tempfile::TempDir;

pub const REFERENCE_FIXTURE: &str = "tests/fixtures/thingmodel/tm1.jsonld";

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("search_harness=info,harness_populate=info,harness_verify=info")
        .try_init()
        .ok();
}

/// Default scenario with all on-disk state under `dir`.
pub fn scenario_in(dir: &TempDir) -> ScenarioConfig {
    ScenarioConfig::default()
        .with_index_location(dir.path().join("index.harness"))
        .with_sample_dir(Some(dir.path().join("jsonfiles")))
        .with_reference_path(REFERENCE_FIXTURE)
}
