//! The synthetic person record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// First and last name of a [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

/// One synthetic record.
///
/// `comment` is a `BTreeMap` so that serializing the same record always yields
/// the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Position of the record in the corpus, starting at 0.
    pub id: u64,
    pub name: Name,
    pub age: u32,
    pub city: String,
    /// Ids of other records this one "likes"; may point past the corpus end.
    pub like: Vec<u64>,
    /// Name-to-city stress payload.
    pub comment: BTreeMap<String, String>,
}

impl Person {
    /// Serialize to a JSON document for indexing.
    pub fn to_document(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
