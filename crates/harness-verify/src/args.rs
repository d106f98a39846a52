//! CLI argument definitions for the query verifier.

use clap::Args;

/// Arguments controlling which records are checked and how.
#[derive(Args, Clone, Debug, Default)]
pub struct VerifyArgs {
    /// Position of the synthetic record whose query is verified [default: 50]
    #[arg(long, env = "HARNESS_SAMPLE_INDEX")]
    pub sample_index: Option<u64>,

    /// Hits requested per query; must cover every expected match [default: 100]
    #[arg(long, env = "HARNESS_PAGE_SIZE")]
    pub page_size: Option<usize>,
}
