//! Static icon datasets.
//!
//! A dataset is the seed a registry is built from. Its document shape is a
//! JSON object keyed by icon name:
//!
//! ```json
//! {
//!   "book-1": { "svg": "<svg width=\"18\" height=\"18\" ...>...</svg>" },
//!   "search": { "svg": "<svg width=\"24\" height=\"24\" ...>...</svg>" }
//! }
//! ```
//!
//! Document order is preserved, and a key repeated later in the document
//! replaces the earlier value.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use glyphkit_core::logging::targets;

use crate::builtin::BUILTIN_ICONS;
use crate::error::{Error, Result};
use crate::types::IconRecord;

/// Per-icon payload in a dataset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconData {
    /// Raw vector markup.
    pub svg: String,
}

/// An ordered set of name → markup records used to seed a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconDataset {
    icons: IndexMap<String, IconData>,
}

impl IconDataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The dataset compiled into this crate.
    pub fn builtin() -> Self {
        BUILTIN_ICONS
            .iter()
            .map(|&(name, svg)| IconRecord::new(name, svg))
            .collect()
    }

    /// Decode a dataset from its JSON document form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        tracing::debug!(target: targets::LOADER, records = dataset.len(), "decoded icon dataset");
        Ok(dataset)
    }

    /// Read and decode a JSON dataset file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Encode the dataset as a pretty-printed JSON document.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add or replace a record.
    pub fn insert(&mut self, name: impl Into<String>, svg: impl Into<String>) {
        self.icons.insert(name.into(), IconData { svg: svg.into() });
    }

    /// Iterate `(name, markup)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.icons
            .iter()
            .map(|(name, data)| (name.as_str(), data.svg.as_str()))
    }

    /// Look up the markup for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.icons.get(name).map(|data| data.svg.as_str())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl FromIterator<IconRecord> for IconDataset {
    fn from_iter<I: IntoIterator<Item = IconRecord>>(iter: I) -> Self {
        let mut dataset = Self::new();
        for record in iter {
            dataset.insert(record.name, record.markup);
        }
        dataset
    }
}

impl Extend<IconRecord> for IconDataset {
    fn extend<I: IntoIterator<Item = IconRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record.name, record.markup);
        }
    }
}
