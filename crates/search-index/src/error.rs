//! Error types for the search index.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`SearchIndex`](crate::SearchIndex) implementations.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Tantivy engine error.
    #[error("Tantivy error: {0}")]
    Tantivy(#[from] tantivy::TantivyError),

    /// Filesystem error at the index location.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The query string could not be parsed.
    #[error("Query syntax error: {0}")]
    Query(#[from] QuerySyntaxError),

    /// A document could not be prepared for indexing.
    #[error("Invalid document '{id}': {reason}")]
    InvalidDocument { id: String, reason: String },

    /// The writer lock was poisoned by a panicking thread.
    #[error("Index writer lock poisoned")]
    WriterPoisoned,
}

/// Malformed query strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuerySyntaxError {
    #[error("Empty query")]
    Empty,

    #[error("Unexpected '{ch}' at byte {position} in query '{query}'")]
    UnexpectedCharacter {
        query: String,
        ch: char,
        position: usize,
    },

    #[error("Dangling escape at end of query '{query}'")]
    TrailingEscape { query: String },

    #[error("Empty field path in clause '{clause}'")]
    EmptyField { clause: String },

    #[error("Empty value in clause '{clause}'")]
    EmptyValue { clause: String },

    #[error("Clause '{clause}' has no searchable terms")]
    NoTerms { clause: String },
}
