//! Ingestion driver: pushes documents into a [`SearchIndex`].

use crate::error::IngestError;
use corpus_generator::Person;
use search_index::SearchIndex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Prefix of synthetic record identifiers.
pub const PERSON_ID_PREFIX: &str = "person";

/// Progress is logged every this many documents.
const PROGRESS_INTERVAL: u64 = 1000;

/// Identifier of the synthetic record at position `k`.
pub fn person_document_id(k: u64) -> String {
    format!("{PERSON_ID_PREFIX}{k}")
}

/// `(id, document)` pair for a synthetic record.
pub fn person_entry(person: &Person) -> Result<(String, Value), IngestError> {
    let id = person_document_id(person.id);
    match person.to_document() {
        Ok(document) => Ok((id, document)),
        Err(source) => Err(IngestError::Serialize { id, source }),
    }
}

/// How documents reach the index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IngestMode {
    /// One `put` per document.
    #[default]
    Immediate,
    /// All documents in one batch, committed once.
    Batched,
}

impl std::fmt::Display for IngestMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestMode::Immediate => write!(f, "immediate"),
            IngestMode::Batched => write!(f, "batched"),
        }
    }
}

/// Metrics from an ingest operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestMetrics {
    /// Number of documents handed to the index.
    pub documents_submitted: u64,
    /// Number of batch commits issued.
    pub batches_committed: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent producing documents.
    pub generation_duration: Duration,
    /// Time spent in index calls.
    pub submit_duration: Duration,
}

impl IngestMetrics {
    /// Calculate documents per second.
    pub fn docs_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_submitted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Delivers an ordered sequence of `(id, document)` pairs to an index.
pub struct IngestionDriver<'a, I: SearchIndex> {
    index: &'a I,
    mode: IngestMode,
}

impl<'a, I: SearchIndex> IngestionDriver<'a, I> {
    pub fn new(index: &'a I, mode: IngestMode) -> Self {
        Self { index, mode }
    }

    /// Ingest prepared documents in order.
    pub fn ingest<D>(&self, documents: D) -> Result<IngestMetrics, IngestError>
    where
        D: IntoIterator<Item = (String, Value)>,
    {
        self.ingest_entries(documents.into_iter().map(Ok))
    }

    /// Ingest synthetic records under `person<k>` identifiers.
    ///
    /// Records are converted lazily, so time spent inside the iterator (for
    /// example a [`corpus_generator::CorpusGenerator`]) counts as generation
    /// time.
    pub fn ingest_people<P>(&self, people: P) -> Result<IngestMetrics, IngestError>
    where
        P: IntoIterator<Item = Person>,
    {
        self.ingest_entries(people.into_iter().map(|person| person_entry(&person)))
    }

    /// Ingest entries that may fail to materialize; the first error stops
    /// ingestion before anything further reaches the index.
    pub fn ingest_entries<D>(&self, documents: D) -> Result<IngestMetrics, IngestError>
    where
        D: IntoIterator<Item = Result<(String, Value), IngestError>>,
    {
        let mut documents = documents.into_iter();
        let start_time = Instant::now();
        let mut metrics = IngestMetrics::default();
        let mut batch = match self.mode {
            IngestMode::Batched => Some(self.index.new_batch()),
            IngestMode::Immediate => None,
        };

        info!("Ingesting documents in {} mode", self.mode);

        loop {
            let gen_start = Instant::now();
            let Some(next) = documents.next() else {
                break;
            };
            let (id, document) = next?;
            metrics.generation_duration += gen_start.elapsed();

            let submit_start = Instant::now();
            match batch.as_mut() {
                Some(batch) => batch.put(id, document),
                None => self
                    .index
                    .put(&id, &document)
                    .map_err(|source| IngestError::Put { id, source })?,
            }
            metrics.submit_duration += submit_start.elapsed();

            metrics.documents_submitted += 1;
            if metrics.documents_submitted % PROGRESS_INTERVAL == 0 {
                debug!("Submitted {} documents", metrics.documents_submitted);
            }
        }

        if let Some(batch) = batch {
            let documents = batch.len();
            let commit_start = Instant::now();
            self.index
                .commit(batch)
                .map_err(|source| IngestError::BatchCommit { documents, source })?;
            metrics.submit_duration += commit_start.elapsed();
            metrics.batches_committed += 1;
        }

        metrics.total_duration = start_time.elapsed();
        info!(
            "Ingestion complete: {} documents in {:?} ({:.2} docs/sec)",
            metrics.documents_submitted,
            metrics.total_duration,
            metrics.docs_per_second()
        );

        Ok(metrics)
    }
}
