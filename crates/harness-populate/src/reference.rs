//! Loading the external reference document.

use crate::error::LoadError;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Identifier the reference document is indexed under unless overridden.
pub const DEFAULT_REFERENCE_ID: &str = "tm1";

/// A parsed semi-structured document with its own identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDocument {
    pub id: String,
    pub body: Value,
}

impl ReferenceDocument {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Value at a dotted path, if every segment exists.
    ///
    /// Segments are matched verbatim against object keys, so keys containing
    /// `:` or `@` work.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.body, |value, segment| value.get(segment))
    }
}

/// Read and parse a JSON or JSON-LD document.
pub fn load_reference_document(path: impl AsRef<Path>) -> Result<ReferenceDocument, LoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let body: Value = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if !body.is_object() {
        return Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        });
    }

    info!("Loaded reference document from {}", path.display());
    Ok(ReferenceDocument {
        id: DEFAULT_REFERENCE_ID.to_string(),
        body,
    })
}
