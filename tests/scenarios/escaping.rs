//! Escaped field queries against the reference thing model.

use crate::common::{init_logging, REFERENCE_FIXTURE};
use harness_populate::{load_reference_document, IngestMode, IngestionDriver};
use harness_verify::{escape_query_text, FieldPath, QueryBuilder};
use search_index::{IndexConfig, SearchIndex, SearchRequest, TantivyIndex};

fn reference_index() -> TantivyIndex {
    let reference = load_reference_document(REFERENCE_FIXTURE).unwrap();
    let index = TantivyIndex::create(&IndexConfig::in_memory()).unwrap();
    IngestionDriver::new(&index, IngestMode::Immediate)
        .ingest([
            (reference.id.clone(), reference.body.clone()),
            (
                "decoy".to_string(),
                serde_json::json!({"properties": {"temperature": {"unit": "om:kelvin"}}}),
            ),
        ])
        .unwrap();
    index
}

fn ids(index: &TantivyIndex, query: &str) -> Vec<String> {
    index
        .search(&SearchRequest::new(query).with_limit(100))
        .unwrap()
        .ids()
}

#[test]
fn test_escaped_unit_query_returns_reference() {
    init_logging();
    let index = reference_index();
    let query = QueryBuilder::new()
        .must_match(
            &FieldPath::parse("properties.temperature.unit"),
            "om:degreeCelsius",
        )
        .build();

    assert_eq!(query, r"+properties.temperature.unit:om\:degreeCelsius");
    assert_eq!(ids(&index, &query), vec!["tm1"]);
}

#[test]
fn test_unescaped_unit_query_is_rejected() {
    init_logging();
    let index = reference_index();
    let result = index.search(&SearchRequest::new(
        "+properties.temperature.unit:om:degreeCelsius",
    ));

    match result {
        Err(_) => {}
        Ok(results) => assert!(!results.ids().contains(&"tm1".to_string())),
    }
}

#[test]
fn test_same_value_under_other_path_is_not_matched() {
    init_logging();
    let index = reference_index();
    // om:percent only appears under properties.humidity.unit.
    let query = format!(
        "+properties.temperature.unit:{}",
        escape_query_text("om:percent")
    );
    assert!(ids(&index, &query).is_empty());
}

#[test]
fn test_colon_and_at_keys() {
    init_logging();
    let index = reference_index();

    let optional = QueryBuilder::new()
        .must_match(&FieldPath::parse("tm:optional"), "/properties/humidity")
        .build();
    assert_eq!(ids(&index, &optional), vec!["tm1"]);

    let typed = QueryBuilder::new()
        .must_match(&FieldPath::parse("@type"), "tm:ThingModel")
        .build();
    assert_eq!(ids(&index, &typed), vec!["tm1"]);
}
