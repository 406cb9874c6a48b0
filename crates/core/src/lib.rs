//! modeler-core
//!
//! Core library for managing the model layer of a LoopBack 3 application:
//! the model registry (`server/model-config.json`), per-model schema files
//! (`server/models/<name>.json`), and their companion stub scripts
//! (`server/models/<name>.js`).
//!
//! This crate defines the workspace layout, the registry document, model
//! definition types, stub generation, the catalog manager, and the
//! definition editor.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, future GUI, etc.).

pub mod editor;
pub mod model;
pub mod workspace;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
