//! SearchIndex trait definition.
//!
//! The harness only talks to an index through this trait. Creation is left to
//! each implementation since it needs backend-specific parameters.

use crate::error::IndexError;
use crate::types::{Batch, SearchRequest, SearchResults};
use serde_json::Value;

/// Trait for a document search index.
///
/// All methods take `&self`; implementations serialize writes internally.
/// Callers drive one operation at a time.
///
/// # Usage Pattern
///
/// ```ignore
/// fn ingest<I: SearchIndex>(index: &I, docs: &[(String, Value)]) -> Result<(), IndexError> {
///     let mut batch = index.new_batch();
///     for (id, doc) in docs {
///         batch.put(id.clone(), doc.clone());
///     }
///     index.commit(batch)
/// }
/// ```
pub trait SearchIndex {
    /// Submit one document, replacing any document with the same id.
    ///
    /// Whether the document is visible to the next `search` depends on the
    /// implementation's commit policy.
    fn put(&self, id: &str, document: &Value) -> Result<(), IndexError>;

    /// Start an empty batch.
    fn new_batch(&self) -> Batch {
        Batch::new()
    }

    /// Apply every document in `batch` atomically: all become visible or none.
    fn commit(&self, batch: Batch) -> Result<(), IndexError>;

    /// Run a query string.
    fn search(&self, request: &SearchRequest) -> Result<SearchResults, IndexError>;

    /// Number of searchable documents.
    fn doc_count(&self) -> Result<u64, IndexError>;

    /// Flush pending work and release the index.
    fn close(self) -> Result<(), IndexError>
    where
        Self: Sized;
}
