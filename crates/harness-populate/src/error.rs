//! Error types for loading and ingestion.

use search_index::IndexError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the reference document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read reference document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("Failed to parse reference document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The root value is not a JSON object.
    #[error("Reference document {path} is not a JSON object")]
    NotAnObject { path: PathBuf },
}

/// Errors raised while feeding documents into the index.
#[derive(Error, Debug)]
pub enum IngestError {
    /// A single immediate-mode put failed.
    #[error("Failed to index document '{id}': {source}")]
    Put {
        id: String,
        #[source]
        source: IndexError,
    },

    /// The batch commit failed; none of its documents are indexed.
    #[error("Batch commit of {documents} documents failed: {source}")]
    BatchCommit {
        documents: usize,
        #[source]
        source: IndexError,
    },

    /// A record could not be converted to a JSON document.
    #[error("Failed to serialize document '{id}': {source}")]
    Serialize {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}
