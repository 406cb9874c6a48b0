use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::workspace::WorkspaceResult;

/// A single registry entry binding a model to a datasource.
///
/// This mirrors one value of `server/model-config.json`. Fields other tools
/// write (notably `plural`, but also `options`, `$promise`, and the like)
/// are carried in `extra` so a whole-document rewrite never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Datasource name the model is attached to. The editor writes an empty
    /// string when no datasource was selected.
    #[serde(rename = "dataSource", default)]
    pub data_source: String,
    /// Whether the model is exposed over the REST API.
    #[serde(default)]
    pub public: bool,
    /// Plural form, when the entry carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    /// Any other fields on the entry, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RegistryEntry {
    /// Entry shape the editor writes on save: bound and public.
    pub fn new(data_source: impl Into<String>) -> Self {
        Self { data_source: data_source.into(), public: true, plural: None, extra: BTreeMap::new() }
    }
}

/// The model registry document (`server/model-config.json`).
///
/// A single JSON object mapping model names to entries, with one reserved
/// key: `_meta` holds arbitrary loader configuration and must round-trip
/// untouched without ever being listed as a model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    /// Reserved loader configuration, kept opaque.
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    /// Model entries keyed by model name.
    #[serde(flatten)]
    pub models: BTreeMap<String, RegistryEntry>,
}

impl Registry {
    /// Read and parse the registry file at `path`.
    pub fn load(path: &Path) -> WorkspaceResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the whole document back to `path` as pretty-printed JSON.
    ///
    /// The registry is always persisted as a whole-document overwrite.
    pub fn save(&self, path: &Path) -> WorkspaceResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Insert or replace the entry for `name`. Latest write wins.
    pub fn insert(&mut self, name: impl Into<String>, entry: RegistryEntry) {
        self.models.insert(name.into(), entry);
    }

    /// Remove the entry for `name`, returning it if it was present.
    ///
    /// Removing an unknown name is a silent no-op.
    pub fn remove(&mut self, name: &str) -> Option<RegistryEntry> {
        self.models.remove(name)
    }

    /// Whether a model named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Look up the entry for `name`.
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.models.get(name)
    }
}
