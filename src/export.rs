//! Writing a generated corpus as JSON Lines.

use anyhow::Context;
use corpus_generator::{CorpusGenerator, CorpusParams, Vocabulary};
use harness_populate::person_document_id;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

#[derive(Serialize)]
struct ExportLine<'a> {
    id: String,
    document: &'a corpus_generator::Person,
}

/// Write every record of the corpus to `writer`, one
/// `{"id": "person<k>", "document": {...}}` object per line.
///
/// Returns the number of records written.
pub fn write_corpus<W: Write>(writer: &mut W, params: CorpusParams) -> anyhow::Result<u64> {
    let generator = CorpusGenerator::new(Vocabulary::builtin(), params)?;
    let mut written = 0u64;
    for person in generator {
        let line = ExportLine {
            id: person_document_id(person.id),
            document: &person,
        };
        serde_json::to_writer(&mut *writer, &line)
            .with_context(|| format!("Failed to serialize record {}", person.id))?;
        writeln!(writer)?;
        written += 1;

        if written % 1000 == 0 {
            debug!("Written {} records", written);
        }
    }
    Ok(written)
}

/// Write the corpus to a JSONL file.
pub fn export_corpus(path: &Path, params: CorpusParams) -> anyhow::Result<u64> {
    info!(
        "Writing {} records (seed {}) to '{}'",
        params.count,
        params.seed,
        path.display()
    );
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let written = write_corpus(&mut writer, params)?;
    writer.flush()?;
    info!("Corpus export complete: {} records", written);
    Ok(written)
}
