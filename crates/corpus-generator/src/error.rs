//! Error types for corpus generation.

use thiserror::Error;

/// Errors raised before any record is generated.
///
/// Generation itself cannot fail once the inputs are valid, so every variant
/// here is a configuration problem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// One of the vocabulary tables has no entries.
    #[error("Vocabulary table '{0}' is empty")]
    EmptyVocabulary(&'static str),

    /// Corpus parameters are out of range.
    #[error("Invalid corpus parameters: {0}")]
    InvalidParams(String),
}
