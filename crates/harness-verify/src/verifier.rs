//! Query verifier asserting exact hit identity and cardinality.

use crate::error::VerifyError;
use crate::query::{FieldPath, QueryBuilder};
use crate::report::{MismatchInfo, VerificationReport};
use corpus_generator::Person;
use search_index::{SearchIndex, SearchRequest};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Default page size; large enough for every expected match.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Runs queries against an index and records whether each returned exactly
/// the expected documents.
///
/// Hit order is ignored. A mismatch is recorded in the report rather than
/// returned as an error; search failures are returned immediately.
pub struct QueryVerifier<'a, I: SearchIndex> {
    index: &'a I,
    page_size: usize,
    report: VerificationReport,
    started: Instant,
}

impl<'a, I: SearchIndex> QueryVerifier<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self {
            index,
            page_size: DEFAULT_PAGE_SIZE,
            report: VerificationReport::default(),
            started: Instant::now(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Run `query` and check that exactly `expected_ids` match.
    ///
    /// Returns whether the check passed.
    pub fn expect_hits(&mut self, query: &str, expected_ids: &[&str]) -> Result<bool, VerifyError> {
        let request = SearchRequest::new(query).with_limit(self.page_size.max(expected_ids.len()));

        let query_start = Instant::now();
        let results = self
            .index
            .search(&request)
            .map_err(|source| VerifyError::Search {
                query: query.to_string(),
                source,
            })?;
        self.report.query_duration += query_start.elapsed();

        let mut actual_ids = results.ids();
        actual_ids.sort();
        let mut expected: Vec<String> = expected_ids.iter().map(|id| id.to_string()).collect();
        expected.sort();

        self.report.checks += 1;
        let matched = results.total == expected.len() as u64 && actual_ids == expected;
        if matched {
            self.report.passed += 1;
            debug!(query, hits = results.total, "query matched");
        } else {
            self.report.failed += 1;
            warn!(
                "Query {} returned {} hit(s) {:?}, expected {:?}",
                query, results.total, actual_ids, expected
            );
            self.report.mismatches.push(MismatchInfo {
                query: query.to_string(),
                expected_ids: expected,
                actual_ids,
                actual_total: results.total,
            });
        }
        Ok(matched)
    }

    /// `+name.first:<first> +<last> +city:<city>` must return only `id`.
    pub fn verify_person(&mut self, person: &Person, id: &str) -> Result<bool, VerifyError> {
        let query = person_query(person);
        self.expect_hits(&query, &[id])
    }

    /// `+<path>:<value>` must return only `id`.
    pub fn verify_field(
        &mut self,
        path: &FieldPath,
        value: &str,
        id: &str,
    ) -> Result<bool, VerifyError> {
        let query = QueryBuilder::new().must_match(path, value).build();
        self.expect_hits(&query, &[id])
    }

    pub fn report(&self) -> &VerificationReport {
        &self.report
    }

    /// Stop the clock and hand over the report.
    pub fn finish(mut self) -> VerificationReport {
        self.report.total_duration = self.started.elapsed();
        info!("{}", self.report.summary());
        self.report
    }
}

/// Query identifying one synthetic record.
pub fn person_query(person: &Person) -> String {
    QueryBuilder::new()
        .must_match(&FieldPath::parse("name.first"), &person.name.first)
        .must_contain(&person.name.last)
        .must_match(&FieldPath::parse("city"), &person.city)
        .build()
}
