//! Search index contract for the harness and a tantivy implementation.
//!
//! The harness core only depends on [`SearchIndex`]. [`TantivyIndex`] is the
//! concrete collaborator used by the scenarios: it maps arbitrary JSON
//! documents onto path-scoped terms and understands a small query string
//! language:
//!
//! ```text
//! +name.first:Walter +Campbell +city:Independence
//! +properties.temperature.unit:om\:degreeCelsius
//! ```
//!
//! `+` requires a clause, `-` excludes it, a bare clause is optional. A clause
//! is either `path:value` (dotted path into the document) or a bare `value`
//! matched against every string leaf. Backslash escapes the next character.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod flatten;
pub mod query;
pub mod tantivy_index;
pub mod traits;
pub mod types;

pub use config::{
    destroy_location, CommitPolicy, IndexConfig, IndexMapping, StorageBackend,
    DEFAULT_WRITER_HEAP_BYTES,
};
pub use error::{IndexError, QuerySyntaxError};
pub use tantivy_index::TantivyIndex;
pub use traits::SearchIndex;
pub use types::{Batch, SearchHit, SearchRequest, SearchResults};
