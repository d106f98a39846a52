//! The bundled scenario file describes the default scenario.

use search_harness::ScenarioConfig;

#[test]
fn test_fixture_matches_defaults() {
    let config = ScenarioConfig::from_file("tests/fixtures/scenario.yaml").unwrap();
    assert_eq!(config, ScenarioConfig::default());
}
