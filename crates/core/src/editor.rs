//! The model definition editor.
//!
//! Collects a model's fields into an in-memory draft and persists the whole
//! thing on save: schema JSON, stub script, and the registry entry. There is
//! no state machine beyond "unsaved draft" then "saved".

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::model::{script_stub, MethodSpec, ModelDefinition, PropertySpec, RelationSpec};
use crate::workspace::{ApiLayout, Registry, RegistryEntry, WorkspaceError, WorkspaceResult};

/// Paths a successful save produced, for frontend reporting.
#[derive(Debug, Clone, Serialize)]
pub struct SavedModel {
    pub name: String,
    pub plural: String,
    pub schema_path: PathBuf,
    pub script_path: PathBuf,
}

/// In-memory draft of one model plus its selected datasource.
///
/// Add operations are plain map inserts with no duplicate-key protection;
/// adding under an existing name replaces the earlier value.
#[derive(Debug)]
pub struct ModelEditor {
    layout: ApiLayout,
    definition: ModelDefinition,
    datasource: Option<String>,
}

impl ModelEditor {
    /// Start a fresh draft from the base template.
    pub fn create(layout: &ApiLayout) -> Self {
        Self { layout: layout.clone(), definition: ModelDefinition::new(""), datasource: None }
    }

    /// Open an existing model for editing.
    ///
    /// Loads `server/models/<name>.json` when it exists; a registered model
    /// whose schema file is gone starts over as a fresh draft carrying the
    /// name. The previously bound datasource is picked up from the registry
    /// so a plain re-save keeps the binding.
    pub fn open(layout: &ApiLayout, name: &str) -> WorkspaceResult<Self> {
        let schema_path = layout.model_schema_path(name);
        let definition = if schema_path.is_file() {
            ModelDefinition::load(&schema_path)?
        } else {
            ModelDefinition::new(name)
        };

        let registry = Registry::load(&layout.registry_path)?;
        let datasource = registry
            .get(name)
            .map(|entry| entry.data_source.clone())
            .filter(|source| !source.is_empty());

        Ok(Self { layout: layout.clone(), definition, datasource })
    }

    pub fn definition(&self) -> &ModelDefinition {
        &self.definition
    }

    pub fn datasource(&self) -> Option<&str> {
        self.datasource.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.definition.name = name.into();
    }

    pub fn set_datasource(&mut self, datasource: impl Into<String>) {
        self.datasource = Some(datasource.into());
    }

    /// Add (or replace) a typed property.
    pub fn add_property(&mut self, name: impl Into<String>, kind: impl Into<String>) {
        self.definition.properties.insert(name.into(), PropertySpec::new(kind));
    }

    /// Add (or replace) a relation.
    pub fn add_relation(&mut self, name: impl Into<String>, relation: RelationSpec) {
        self.definition.relations.insert(name.into(), relation);
    }

    /// Add (or replace) a custom remote method.
    pub fn add_method(&mut self, name: impl Into<String>, method: MethodSpec) {
        self.definition.methods.insert(name.into(), method);
    }

    /// Persist the draft: schema JSON, stub script, and the registry entry.
    ///
    /// The only enforced invariant is a non-empty (trimmed) model name; the
    /// plural is derived by naive suffixing (`name + "s"`). Writes happen in
    /// order with no rollback: a failure after the schema is written can
    /// leave the stub or registry behind (matching the original tool).
    pub fn save(&mut self) -> WorkspaceResult<SavedModel> {
        let name = self.definition.name.trim().to_string();
        if name.is_empty() {
            return Err(WorkspaceError::EmptyModelName);
        }

        let plural = format!("{name}s");
        self.definition.name = name.clone();
        self.definition.plural = plural.clone();

        fs::create_dir_all(&self.layout.models_dir)?;

        let schema_path = self.layout.model_schema_path(&name);
        self.definition.save(&schema_path)?;

        let script_path = self.layout.model_script_path(&name);
        fs::write(&script_path, script_stub(&name))?;

        // Re-read the registry at save time; only this model's entry changes.
        let mut registry = Registry::load(&self.layout.registry_path)?;
        registry.insert(&name, RegistryEntry::new(self.datasource.clone().unwrap_or_default()));
        registry.save(&self.layout.registry_path)?;

        Ok(SavedModel { name, plural, schema_path, script_path })
    }
}
