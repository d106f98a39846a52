//! Ingestion side of the search harness.
//!
//! This crate provides:
//! - [`load_reference_document`]: loads the external JSON-LD document
//! - [`IngestionDriver`]: feeds documents into a [`search_index::SearchIndex`]
//!   one put at a time or as a single batch
//! - [`settle`]: the optional blocking delay before verification

pub mod args;
pub mod error;
pub mod populator;
pub mod reference;
pub mod settle;

pub use args::PopulateArgs;
pub use error::{IngestError, LoadError};
pub use populator::{
    person_document_id, person_entry, IngestMetrics, IngestMode, IngestionDriver, PERSON_ID_PREFIX,
};
pub use reference::{load_reference_document, ReferenceDocument, DEFAULT_REFERENCE_ID};
pub use settle::settle;
