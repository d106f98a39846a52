//! CLI arguments for corpus generation and ingestion.

use crate::populator::IngestMode;
use clap::Args;
use std::path::PathBuf;

/// Arguments controlling what is generated and how it is ingested.
///
/// Every field is optional so values from a scenario file are only
/// overridden when given on the command line or in the environment.
#[derive(Args, Clone, Debug, Default)]
pub struct PopulateArgs {
    /// Random seed for deterministic generation (same seed = same corpus) [default: 123]
    #[arg(long, env = "HARNESS_SEED")]
    pub seed: Option<u64>,

    /// Number of synthetic records to generate [default: 5000]
    #[arg(long, env = "HARNESS_COUNT")]
    pub count: Option<u64>,

    /// Exclusive upper bound for liked record ids [default: 500]
    #[arg(long, env = "HARNESS_MAX_ID")]
    pub max_id: Option<u64>,

    /// Ingestion path: one put per document, or a single batch
    #[arg(long, value_enum, env = "HARNESS_MODE")]
    pub mode: Option<IngestMode>,

    /// Path to the reference JSON/JSON-LD document
    #[arg(long, env = "HARNESS_REFERENCE")]
    pub reference: Option<PathBuf>,
}
