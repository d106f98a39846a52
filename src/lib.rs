//! Search Harness Library
//!
//! A correctness harness for a document search index. It synthesizes a
//! deterministic corpus, feeds it into an index through per-document or
//! batched ingestion, optionally waits, and verifies that field-scoped
//! boolean queries return exactly the expected documents.
//!
//! # Workspace crates
//!
//! - `corpus_generator` - seeded synthetic person records
//! - `search_index` - the `SearchIndex` contract and the tantivy adapter
//! - `harness_populate` - reference loading and the ingestion driver
//! - `harness_verify` - query construction and verification
//!
//! # CLI Usage
//!
//! ```bash
//! # Default scenario: seed 123, 5000 records, immediate ingestion
//! search-harness run
//!
//! # Batched ingestion with a settle delay, index kept in RAM
//! search-harness run --mode batched --settle-delay 60s --storage memory
//!
//! # Dump the corpus for inspection
//! search-harness generate --output corpus.jsonl
//! ```

pub mod config;
pub mod export;
pub mod scenario;

pub use export::{export_corpus, write_corpus};
pub use scenario::{run_scenario, ScenarioConfig, ScenarioError, ScenarioReport, ScenarioStatus};
