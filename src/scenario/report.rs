//! Scenario report types.

use crate::config::format_duration;
use crate::scenario::config::ConfigSummary;
use chrono::{DateTime, Utc};
use harness_populate::IngestMetrics;
use harness_verify::VerificationReport;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioStatus {
    Passed,
    Failed,
}

/// Result of one scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Unique id of this run, also attached to its log span.
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Test configuration summary.
    pub config_summary: ConfigSummary,
    /// Ingestion metrics, reference document included.
    pub ingest_metrics: IngestMetrics,
    /// Delay applied before verification.
    pub settle_delay: Option<Duration>,
    pub verification: VerificationReport,
    /// Where the sample record was written, if anywhere.
    pub sample_path: Option<PathBuf>,
    pub total_duration: Duration,
    pub status: ScenarioStatus,
}

impl ScenarioReport {
    /// Check if the run passed.
    pub fn passed(&self) -> bool {
        self.status == ScenarioStatus::Passed
    }

    /// Generate a summary string.
    pub fn summary(&self) -> String {
        let status_str = match self.status {
            ScenarioStatus::Passed => "PASSED",
            ScenarioStatus::Failed => "FAILED",
        };
        let settle = self
            .settle_delay
            .map(format_duration)
            .unwrap_or_else(|| "none".to_string());

        format!(
            "Scenario Report: {}\n\
             ================\n\
             Run: {} (started {})\n\
             Mode: {}\n\
             Storage: {} ({})\n\
             Seed: {}\n\
             Records: {} (max id {}, sample {})\n\
             Settle delay: {}\n\n\
             Ingestion: {} documents in {:?} ({:.2} docs/sec)\n\
             {}\n\
             Total: {:?}",
            status_str,
            self.run_id,
            self.started_at.to_rfc3339(),
            self.config_summary.mode,
            self.config_summary.storage,
            self.config_summary.index_location.display(),
            self.config_summary.seed,
            self.config_summary.count,
            self.config_summary.max_id,
            self.config_summary.sample_index,
            settle,
            self.ingest_metrics.documents_submitted,
            self.ingest_metrics.total_duration,
            self.ingest_metrics.docs_per_second(),
            self.verification.summary(),
            self.total_duration
        )
    }
}
