//! Scenario integration tests.
//!
//! Each test runs the generate -> ingest -> (settle) -> verify workflow
//! against a fresh tantivy index in its own temporary directory:
//! 1. Generate the deterministic corpus (seed 123, 5000 records)
//! 2. Ingest it plus the reference thing model
//! 3. Query record 50 and the reference unit field
//! 4. Close the index

mod batched;
mod common;
mod config_file;
mod delayed;
mod equivalence;
mod escaping;
mod failures;
mod immediate;
