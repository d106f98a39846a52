//! Error types for query verification.

use crate::report::VerificationReport;
use search_index::IndexError;
use thiserror::Error;

/// Errors that can occur during verification.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The index rejected or failed the query.
    #[error("Search failed for query '{query}': {source}")]
    Search {
        query: String,
        #[source]
        source: IndexError,
    },

    /// At least one check returned the wrong hits.
    #[error("{}", .0.summary())]
    VerificationFailed(Box<VerificationReport>),
}
