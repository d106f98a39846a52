//! Command-line interface for search-harness
//!
//! # Usage Examples
//!
//! ## Run a scenario
//! ```bash
//! # Reference scenario (seed 123, 5000 records, record 50 verified)
//! search-harness run
//!
//! # Batched ingestion followed by a 60 second settle delay
//! search-harness run --mode batched --settle-delay 60s
//!
//! # Scenario file with command-line overrides
//! search-harness run --config scenario.yaml --seed 7 --index-path /tmp/index.harness
//! ```
//!
//! ## Export the corpus
//! ```bash
//! search-harness generate --output corpus.jsonl --count 100
//! ```
//!
//! Every `run` flag also reads a `HARNESS_*` environment variable, e.g.
//! `HARNESS_MODE=batched` or `HARNESS_SETTLE_DELAY=2m`.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use corpus_generator::CorpusParams;
use harness_populate::PopulateArgs;
use harness_verify::VerifyArgs;
use search_harness::config::parse_duration;
use search_harness::{export_corpus, run_scenario, ScenarioConfig};
use search_index::StorageBackend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "search-harness")]
#[command(about = "Correctness harness for a document search index")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, ingest, optionally settle, then verify
    Run(RunArgs),

    /// Write the generated corpus as JSON Lines
    Generate {
        /// Output JSONL file
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Random seed
        #[arg(long, default_value = "123", env = "HARNESS_SEED")]
        seed: u64,

        /// Number of records
        #[arg(long, default_value = "5000", env = "HARNESS_COUNT")]
        count: u64,

        /// Exclusive upper bound for liked record ids
        #[arg(long, default_value = "500", env = "HARNESS_MAX_ID")]
        max_id: u64,
    },
}

#[derive(Args, Clone, Debug)]
struct RunArgs {
    /// Scenario YAML file; flags below override its values
    #[arg(long, short = 'c', env = "HARNESS_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    populate: PopulateArgs,

    #[command(flatten)]
    verify: VerifyArgs,

    /// Delay between ingestion and verification, e.g. "60s", "2m", "500ms"
    #[arg(long, env = "HARNESS_SETTLE_DELAY")]
    settle_delay: Option<String>,

    /// Index directory; removed and recreated on every run [default: index.harness]
    #[arg(long, env = "HARNESS_INDEX_PATH")]
    index_path: Option<PathBuf>,

    /// Index storage backend (disk or memory) [default: disk]
    #[arg(long, env = "HARNESS_STORAGE")]
    storage: Option<StorageBackend>,

    /// Directory for the JSON copy of the sample record [default: jsonfiles]
    #[arg(long, env = "HARNESS_SAMPLE_DIR")]
    sample_dir: Option<PathBuf>,
}

impl RunArgs {
    fn into_config(self) -> anyhow::Result<ScenarioConfig> {
        let mut config = match &self.config {
            Some(path) => ScenarioConfig::from_file(path)
                .with_context(|| format!("Failed to load scenario from {path:?}"))?,
            None => ScenarioConfig::default(),
        };

        if let Some(seed) = self.populate.seed {
            config = config.with_seed(seed);
        }
        if let Some(count) = self.populate.count {
            config = config.with_count(count);
        }
        if let Some(max_id) = self.populate.max_id {
            config = config.with_max_id(max_id);
        }
        if let Some(mode) = self.populate.mode {
            config = config.with_mode(mode);
        }
        if let Some(reference) = self.populate.reference {
            config = config.with_reference_path(reference);
        }
        if let Some(sample_index) = self.verify.sample_index {
            config = config.with_sample_index(sample_index);
        }
        if let Some(page_size) = self.verify.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(delay) = &self.settle_delay {
            let delay = parse_duration(delay)
                .with_context(|| format!("Invalid --settle-delay value: {delay}"))?;
            config = config.with_settle_delay(Some(delay));
        }
        if let Some(index_path) = self.index_path {
            config = config.with_index_location(index_path);
        }
        if let Some(storage) = self.storage {
            config = config.with_storage(storage);
        }
        if let Some(sample_dir) = self.sample_dir {
            config = config.with_sample_dir(Some(sample_dir));
        }
        Ok(config)
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = args.into_config()?;
            let report = run_scenario(&config).context("Scenario failed")?;
            println!("{}", report.summary());
        }
        Commands::Generate {
            output,
            seed,
            count,
            max_id,
        } => {
            let written = export_corpus(&output, CorpusParams::new(seed, count, max_id))?;
            println!("Wrote {written} records to {}", output.display());
        }
    }

    Ok(())
}
