//! One harness scenario: generate, ingest, settle, verify, close.

pub mod config;
pub mod error;
pub mod report;
pub mod sample;

pub use config::{ConfigSummary, ReferenceConfig, ScenarioConfig};
pub use error::ScenarioError;
pub use report::{ScenarioReport, ScenarioStatus};
pub use sample::persist_sample;

use chrono::Utc;
use corpus_generator::{CorpusGenerator, Person, Vocabulary};
use harness_populate::{
    load_reference_document, person_document_id, person_entry, settle, IngestMetrics,
    IngestionDriver, ReferenceDocument,
};
use harness_verify::{FieldPath, QueryVerifier, VerificationReport};
use search_index::{destroy_location, SearchIndex, StorageBackend, TantivyIndex};
use std::time::Instant;
use tracing::{info, info_span};
use uuid::Uuid;

/// Run one scenario end to end.
///
/// Configuration and reference loading errors abort before the index is
/// touched. A verification mismatch is returned as
/// [`ScenarioError::Assertion`] after the index has been closed.
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioReport, ScenarioError> {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    let start_time = Instant::now();

    let span = info_span!("scenario", %run_id, mode = %config.mode);
    let _guard = span.enter();

    config.validate()?;
    let reference = load_reference_document(&config.reference.path)?
        .with_id(config.reference.id.clone());
    let generator = CorpusGenerator::new(Vocabulary::builtin(), config.corpus_params())?;

    if config.index.storage == StorageBackend::Disk {
        destroy_location(&config.index.location)?;
    }
    let index = TantivyIndex::create(&config.index)?;

    let (ingest_metrics, sample) = populate(&index, config, generator, &reference)?;
    let sample = sample.ok_or_else(|| {
        ScenarioError::Configuration(format!(
            "sample record {} was not generated",
            config.sample_index
        ))
    })?;
    let sample_path = match &config.sample_dir {
        Some(dir) => Some(persist_sample(dir, &sample)?),
        None => None,
    };

    settle(config.settle_delay);

    let verification = verify(&index, config, &sample, &reference)?;
    index.close()?;

    let status = if verification.is_success() {
        ScenarioStatus::Passed
    } else {
        ScenarioStatus::Failed
    };
    let report = ScenarioReport {
        run_id,
        started_at,
        config_summary: config.summary(),
        ingest_metrics,
        settle_delay: config.settle_delay,
        verification,
        sample_path,
        total_duration: start_time.elapsed(),
        status,
    };

    info!("Scenario finished: {:?}", report.status);
    report.verification.clone().into_result()?;
    Ok(report)
}

/// Ingest the corpus followed by the reference document, keeping a copy of
/// the sample record.
fn populate<I: SearchIndex>(
    index: &I,
    config: &ScenarioConfig,
    generator: CorpusGenerator<'_>,
    reference: &ReferenceDocument,
) -> Result<(IngestMetrics, Option<Person>), ScenarioError> {
    let mut sample = None;
    let sample_index = config.sample_index;

    let documents = generator
        .inspect(|person| {
            if person.id == sample_index {
                sample = Some(person.clone());
            }
        })
        .map(|person| person_entry(&person))
        .chain(std::iter::once(Ok((
            reference.id.clone(),
            reference.body.clone(),
        ))));

    let metrics = IngestionDriver::new(index, config.mode).ingest_entries(documents)?;
    Ok((metrics, sample))
}

fn verify<I: SearchIndex>(
    index: &I,
    config: &ScenarioConfig,
    sample: &Person,
    reference: &ReferenceDocument,
) -> Result<VerificationReport, ScenarioError> {
    let mut verifier = QueryVerifier::new(index).with_page_size(config.page_size);
    verifier.verify_person(sample, &person_document_id(sample.id))?;
    verifier.verify_field(
        &FieldPath::parse(&config.reference.field),
        &config.reference.value,
        &reference.id,
    )?;
    Ok(verifier.finish())
}
