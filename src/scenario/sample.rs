//! Persisting the sample record for manual inspection.

use crate::scenario::error::ScenarioError;
use corpus_generator::Person;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `person` as JSON to `<dir>/person_<id>.json`, creating `dir`.
pub fn persist_sample(dir: &Path, person: &Person) -> Result<PathBuf, ScenarioError> {
    let path = dir.join(format!("person_{}.json", person.id));
    let persist_err = |source| ScenarioError::Persist {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(persist_err)?;
    let json = serde_json::to_vec_pretty(person)
        .map_err(|e| persist_err(std::io::Error::other(e)))?;
    std::fs::write(&path, json).map_err(persist_err)?;

    debug!("Wrote sample record to {}", path.display());
    Ok(path)
}
