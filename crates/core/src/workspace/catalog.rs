use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::model::ModelDefinition;
use crate::workspace::{ApiLayout, Registry, WorkspaceResult};

/// One row of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelListing {
    pub name: String,
    pub plural: String,
}

/// Outcome of a model deletion.
///
/// Deletion is not transactional: the registry is rewritten first, then each
/// artifact file is removed if present. A mid-operation IO error can leave
/// partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    /// Whether a registry entry existed and was removed.
    pub removed_entry: bool,
    /// Whether `<name>.json` existed and was removed.
    pub removed_schema: bool,
    /// Whether `<name>.js` existed and was removed.
    pub removed_script: bool,
}

/// Loaded workspace handle bundling layout, registry, and datasource names.
///
/// This is the entry point frontends use: `from_root` validates the directory
/// structure and loads everything, so every later operation can assume a
/// well-formed workspace.
#[derive(Debug)]
pub struct ModelCatalog {
    layout: ApiLayout,
    registry: Registry,
    datasources: Vec<String>,
}

impl ModelCatalog {
    /// Validate the structure under `root` and load registry + datasources.
    ///
    /// Fails with `InvalidStructure` (naming every missing path) before any
    /// other work when the root is not a LoopBack API folder.
    pub fn from_root(root: impl AsRef<Path>) -> WorkspaceResult<Self> {
        let layout = ApiLayout::new(root);
        layout.validate()?;

        let registry = Registry::load(&layout.registry_path)?;
        let datasources = load_datasource_names(&layout)?;

        Ok(Self { layout, registry, datasources })
    }

    pub fn layout(&self) -> &ApiLayout {
        &self.layout
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Names of the datasources defined in `server/datasources.json`.
    pub fn datasources(&self) -> &[String] {
        &self.datasources
    }

    /// List registered models as `(name, plural)` rows, ordered by name.
    ///
    /// The reserved `_meta` key is never listed. The plural comes from the
    /// registry entry when present, otherwise from the model's schema file;
    /// a missing or unreadable schema yields an empty plural.
    pub fn list_models(&self) -> Vec<ModelListing> {
        self.registry
            .models
            .iter()
            .map(|(name, entry)| {
                let plural = match &entry.plural {
                    Some(plural) => plural.clone(),
                    None => self.schema_plural(name).unwrap_or_default(),
                };
                ModelListing { name: name.clone(), plural }
            })
            .collect()
    }

    /// Delete a model: drop its registry entry, then its artifact files.
    ///
    /// Unknown names and already-absent files are silent no-ops.
    pub fn delete_model(&mut self, name: &str) -> WorkspaceResult<DeleteOutcome> {
        let removed_entry = self.registry.remove(name).is_some();
        self.registry.save(&self.layout.registry_path)?;

        let removed_schema = remove_if_present(&self.layout.model_schema_path(name))?;
        let removed_script = remove_if_present(&self.layout.model_script_path(name))?;

        Ok(DeleteOutcome { removed_entry, removed_schema, removed_script })
    }

    /// Re-read registry and datasources from disk, picking up outside edits.
    pub fn refresh(&mut self) -> WorkspaceResult<()> {
        self.registry = Registry::load(&self.layout.registry_path)?;
        self.datasources = load_datasource_names(&self.layout)?;
        Ok(())
    }

    fn schema_plural(&self, name: &str) -> Option<String> {
        let path = self.layout.model_schema_path(name);
        ModelDefinition::load(&path).ok().map(|definition| definition.plural)
    }
}

/// Top-level keys of `datasources.json` are the datasource names.
fn load_datasource_names(layout: &ApiLayout) -> WorkspaceResult<Vec<String>> {
    let json = fs::read_to_string(&layout.datasources_path)?;
    let document: BTreeMap<String, serde_json::Value> = serde_json::from_str(&json)?;
    Ok(document.into_keys().collect())
}

fn remove_if_present(path: &Path) -> WorkspaceResult<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
