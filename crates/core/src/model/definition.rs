use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::workspace::WorkspaceResult;

/// A single typed field of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// LoopBack property type (e.g. "string", "number", "date").
    #[serde(rename = "type")]
    pub kind: String,
}

impl PropertySpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// A relation to another model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSpec {
    /// Relation type (e.g. "belongsTo", "hasMany").
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the related model.
    pub model: String,
    /// Foreign key column, when one was given.
    #[serde(rename = "foreignKey", default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
}

/// HTTP exposure of a remote method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRoute {
    /// Endpoint path (e.g. "/custom-endpoint").
    pub path: String,
    /// HTTP verb (e.g. "get", "post").
    pub verb: String,
}

/// Where a remote method argument is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSource {
    /// Argument source (e.g. "body", "query").
    pub source: String,
}

/// One accepted argument of a remote method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodArg {
    pub arg: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub http: ArgSource,
}

/// Return contract of a remote method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnSpec {
    pub arg: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub root: bool,
}

impl Default for ReturnSpec {
    /// LoopBack's conventional shape for a remote-method result.
    fn default() -> Self {
        Self { arg: "result".to_string(), kind: "object".to_string(), root: true }
    }
}

/// A custom remote method (endpoint) on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    pub http: HttpRoute,
    pub accepts: Vec<MethodArg>,
    pub returns: ReturnSpec,
    pub description: String,
}

impl MethodSpec {
    /// Build a method spec the way the editor does: given route and args,
    /// with the conventional return shape and a stock description.
    pub fn new(name: &str, http: HttpRoute, accepts: Vec<MethodArg>) -> Self {
        Self {
            http,
            accepts,
            returns: ReturnSpec::default(),
            description: format!("Custom method {name}"),
        }
    }
}

/// Model options block; only `validateUpsert` is ever set by this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOptions {
    #[serde(rename = "validateUpsert", default = "default_true")]
    pub validate_upsert: bool,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self { validate_upsert: true }
    }
}

/// The per-model schema document (`server/models/<name>.json`).
///
/// Field names and defaults match what LoopBack 3 expects; `validations` and
/// `acls` are carried opaquely since this tool never edits them. Every field
/// is optional on read with template-valued fallbacks, so hand-written
/// schemas that omit `plural` or `options` still open; `save` always writes
/// the full template shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub plural: String,
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(rename = "idInjection", default = "default_true")]
    pub id_injection: bool,
    #[serde(default)]
    pub options: ModelOptions,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySpec>,
    #[serde(default)]
    pub validations: Vec<serde_json::Value>,
    #[serde(default)]
    pub relations: BTreeMap<String, RelationSpec>,
    #[serde(default)]
    pub acls: Vec<serde_json::Value>,
    #[serde(default)]
    pub methods: BTreeMap<String, MethodSpec>,
}

fn default_base() -> String {
    "Model".to_string()
}

fn default_true() -> bool {
    true
}

impl ModelDefinition {
    /// Fresh definition from the base template, carrying `name`.
    ///
    /// The plural is left empty until save derives it.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plural: String::new(),
            base: "Model".to_string(),
            id_injection: true,
            options: ModelOptions::default(),
            properties: BTreeMap::new(),
            validations: Vec::new(),
            relations: BTreeMap::new(),
            acls: Vec::new(),
            methods: BTreeMap::new(),
        }
    }

    /// Read and parse a schema file.
    pub fn load(path: &Path) -> WorkspaceResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the schema file as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> WorkspaceResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
