//! Immediate and batched ingestion must produce identical search results.

use crate::common::init_logging;
use corpus_generator::{generate_corpus, CorpusParams, Vocabulary};
use harness_populate::{person_document_id, IngestMode, IngestionDriver};
use harness_verify::person_query;
use search_index::{IndexConfig, SearchIndex, SearchRequest, TantivyIndex};

fn populated(mode: IngestMode, params: CorpusParams) -> TantivyIndex {
    let index = TantivyIndex::create(&IndexConfig::in_memory()).unwrap();
    let people = generate_corpus(Vocabulary::builtin(), params).unwrap();
    IngestionDriver::new(&index, mode)
        .ingest_people(people)
        .unwrap();
    index
}

fn sorted_ids(index: &TantivyIndex, query: &str) -> (u64, Vec<String>) {
    let results = index
        .search(&SearchRequest::new(query).with_limit(1000))
        .unwrap();
    let mut ids = results.ids();
    ids.sort();
    (results.total, ids)
}

#[test]
fn test_modes_return_identical_hits() {
    init_logging();
    let params = CorpusParams::new(123, 600, 500);
    let immediate = populated(IngestMode::Immediate, params);
    let batched = populated(IngestMode::Batched, params);

    let people = generate_corpus(Vocabulary::builtin(), params).unwrap();
    let mut queries: Vec<String> = people.iter().step_by(37).map(person_query).collect();
    queries.extend([
        "+city:Independence".to_string(),
        "+name.first:Walter".to_string(),
        "+age:34".to_string(),
        "+like:349".to_string(),
        "+Campbell -city:Independence".to_string(),
    ]);

    for query in &queries {
        assert_eq!(
            sorted_ids(&immediate, query),
            sorted_ids(&batched, query),
            "query {query}"
        );
    }

    let sample = &people[50];
    let (total, ids) = sorted_ids(&batched, &person_query(sample));
    assert_eq!(total, 1);
    assert_eq!(ids, vec![person_document_id(50)]);
}
