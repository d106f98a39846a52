//! Request and result types shared by index implementations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One query against the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Query string (see the crate docs for the grammar).
    pub query: String,
    /// Number of top hits to skip.
    pub offset: usize,
    /// Maximum number of hits to return. `0` only counts.
    pub limit: usize,
    /// Attach a scoring explanation to every hit.
    pub explain: bool,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            offset: 0,
            limit: 10,
            explain: false,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub score: f32,
    pub explanation: Option<String>,
}

/// Hits for one page plus the total number of matching documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub total: u64,
}

impl SearchResults {
    /// Hit identifiers in rank order.
    pub fn ids(&self) -> Vec<String> {
        self.hits.iter().map(|hit| hit.id.clone()).collect()
    }
}

/// Documents staged for one atomic commit.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    entries: Vec<(String, Value)>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a document. A later entry with the same id wins.
    pub fn put(&mut self, id: impl Into<String>, document: Value) {
        self.entries.push((id.into(), document));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(id, doc)| (id.as_str(), doc))
    }

    pub fn into_entries(self) -> Vec<(String, Value)> {
        self.entries
    }
}
