//! Scenario configuration.

use crate::config::duration;
use crate::scenario::error::ScenarioError;
use corpus_generator::CorpusParams;
use harness_populate::{IngestMode, DEFAULT_REFERENCE_ID};
use harness_verify::DEFAULT_PAGE_SIZE;
use search_index::{IndexConfig, StorageBackend};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the reference document comes from and what is asserted about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// JSON/JSON-LD file to load.
    pub path: PathBuf,
    /// Identifier the document is indexed under.
    pub id: String,
    /// Dotted path queried after ingestion.
    pub field: String,
    /// Value expected at `field`.
    pub value: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("tests/fixtures/thingmodel/tm1.jsonld"),
            id: DEFAULT_REFERENCE_ID.to_string(),
            field: "properties.temperature.unit".to_string(),
            value: "om:degreeCelsius".to_string(),
        }
    }
}

/// Configuration for one scenario run.
///
/// Missing fields in YAML take the defaults below, which reproduce the
/// reference scenario: seed 123, 5000 records, likes below 500, record 50
/// verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Random seed for deterministic corpus generation.
    pub seed: u64,
    /// Number of synthetic records.
    pub count: u64,
    /// Exclusive upper bound for liked ids.
    pub max_id: u64,
    /// Ingestion path.
    pub mode: IngestMode,
    /// Blocking delay between ingestion and verification.
    #[serde(with = "duration::option")]
    pub settle_delay: Option<Duration>,
    /// Position of the record whose query is verified.
    pub sample_index: u64,
    /// Hits requested per query.
    pub page_size: usize,
    /// Index location and backend settings.
    pub index: IndexConfig,
    /// Directory receiving a JSON copy of the sample record; `None` skips it.
    pub sample_dir: Option<PathBuf>,
    pub reference: ReferenceConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 123,
            count: 5000,
            max_id: 500,
            mode: IngestMode::Immediate,
            settle_delay: None,
            sample_index: 50,
            page_size: DEFAULT_PAGE_SIZE,
            index: IndexConfig::new("index.harness"),
            sample_dir: Some(PathBuf::from("jsonfiles")),
            reference: ReferenceConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Parse a YAML scenario description.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ScenarioError::Configuration(format!("invalid scenario YAML: {e}")))
    }

    /// Load a YAML scenario file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            ScenarioError::Configuration(format!(
                "failed to read scenario file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of records.
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn with_max_id(mut self, max_id: u64) -> Self {
        self.max_id = max_id;
        self
    }

    /// Set the ingestion mode.
    pub fn with_mode(mut self, mode: IngestMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set or clear the settle delay.
    pub fn with_settle_delay(mut self, delay: Option<Duration>) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_sample_index(mut self, index: u64) -> Self {
        self.sample_index = index;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the on-disk index location.
    pub fn with_index_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.index.location = location.into();
        self
    }

    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.index.storage = storage;
        self
    }

    pub fn with_sample_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.sample_dir = dir;
        self
    }

    /// Set the reference document path.
    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference.path = path.into();
        self
    }

    /// Generator inputs.
    pub fn corpus_params(&self) -> CorpusParams {
        CorpusParams::new(self.seed, self.count, self.max_id)
    }

    /// Reject parameters that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.corpus_params().validate()?;
        if self.sample_index >= self.count {
            return Err(ScenarioError::Configuration(format!(
                "sample index {} is outside the corpus of {} records",
                self.sample_index, self.count
            )));
        }
        if self.page_size == 0 {
            return Err(ScenarioError::Configuration(
                "page size must be greater than zero".to_string(),
            ));
        }
        if self.reference.field.trim().is_empty() {
            return Err(ScenarioError::Configuration(
                "reference field must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Short description for reports.
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            seed: self.seed,
            count: self.count,
            max_id: self.max_id,
            mode: self.mode,
            storage: self.index.storage,
            index_location: self.index.location.clone(),
            sample_index: self.sample_index,
        }
    }
}

/// Summary of the configuration a report was produced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub seed: u64,
    pub count: u64,
    pub max_id: u64,
    pub mode: IngestMode,
    pub storage: StorageBackend,
    pub index_location: PathBuf,
    pub sample_index: u64,
}
