//! Index creation parameters.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default writer heap budget (50 MB).
pub const DEFAULT_WRITER_HEAP_BYTES: usize = 50_000_000;

/// Tokens longer than this many bytes are dropped by the analyzer.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 40;

/// Where index segments live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Segments on disk under the configured location.
    #[default]
    Disk,
    /// Segments in RAM; the location is ignored.
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disk" => Ok(StorageBackend::Disk),
            "memory" | "ram" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{other}' (expected disk or memory)")),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Disk => write!(f, "disk"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

/// When staged `put`s become searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Stage puts and commit them before the next read.
    #[default]
    OnRead,
    /// Commit after every put.
    PerDocument,
}

/// How documents are mapped onto index fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexMapping {
    /// Feed string leaves into the default field used by unscoped clauses.
    pub default_field: bool,
    /// Analyzer drops tokens longer than this many bytes.
    pub max_token_len: usize,
}

impl Default for IndexMapping {
    fn default() -> Self {
        Self {
            default_field: true,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

/// Everything needed to create an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    pub location: PathBuf,
    #[serde(default)]
    pub mapping: IndexMapping,
    #[serde(default)]
    pub storage: StorageBackend,
    #[serde(default)]
    pub commit_policy: CommitPolicy,
    #[serde(default = "default_writer_threads")]
    pub writer_threads: usize,
    #[serde(default = "default_writer_heap_bytes")]
    pub writer_heap_bytes: usize,
}

fn default_writer_threads() -> usize {
    1
}

fn default_writer_heap_bytes() -> usize {
    DEFAULT_WRITER_HEAP_BYTES
}

impl IndexConfig {
    /// Disk-backed index at `location` with default settings.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            mapping: IndexMapping::default(),
            storage: StorageBackend::Disk,
            commit_policy: CommitPolicy::OnRead,
            writer_threads: default_writer_threads(),
            writer_heap_bytes: default_writer_heap_bytes(),
        }
    }

    /// RAM-backed index.
    pub fn in_memory() -> Self {
        Self::new("").with_storage(StorageBackend::Memory)
    }

    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_commit_policy(mut self, commit_policy: CommitPolicy) -> Self {
        self.commit_policy = commit_policy;
        self
    }
}

/// Remove whatever exists at `path` so a fresh index can be created there.
///
/// A missing path is not an error.
pub fn destroy_location(path: &Path) -> Result<(), IndexError> {
    let io_err = |source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    };

    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {
            std::fs::remove_dir_all(path).map_err(io_err)?;
        }
        Ok(_) => {
            std::fs::remove_file(path).map_err(io_err)?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(io_err(e)),
    }

    info!("Removed previous index state at {}", path.display());
    Ok(())
}
