//! Error types for scenario runs.

use corpus_generator::GeneratorError;
use harness_populate::{IngestError, LoadError};
use harness_verify::{VerificationReport, VerifyError};
use search_index::IndexError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a scenario run.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// Invalid parameters; raised before anything is ingested.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The reference document could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// A put or the batch commit failed.
    #[error("Ingestion error: {0}")]
    Ingestion(#[from] IngestError),

    /// The index could not be created, cleared or closed.
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// A query could not be executed.
    #[error("Query error: {0}")]
    Query(VerifyError),

    /// Queries returned the wrong documents.
    #[error("Assertion failed: {}", .0.summary())]
    Assertion(Box<VerificationReport>),

    /// The sample record could not be written.
    #[error("Failed to persist sample record to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<VerifyError> for ScenarioError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::VerificationFailed(report) => ScenarioError::Assertion(report),
            other => ScenarioError::Query(other),
        }
    }
}

impl From<GeneratorError> for ScenarioError {
    fn from(err: GeneratorError) -> Self {
        ScenarioError::Configuration(err.to_string())
    }
}
