//! API workspace integration: layout, registry document, and catalog.
//!
//! A LoopBack 3 application keeps its model layer in three places under the
//! API root:
//! - `server/model-config.json`: the registry mapping model names to their
//!   datasource bindings.
//! - `server/models/`: one `<name>.json` schema plus one `<name>.js` stub
//!   script per model.
//! - `server/datasources.json`: named backend connections; only the top-level
//!   keys matter to this tool.
//!
//! This module defines:
//! - `ApiLayout`: computed paths for the workspace files/directories.
//! - `Registry` / `RegistryEntry`: the typed registry document.
//! - `ModelCatalog`: a loaded workspace handle with list/delete/refresh.

use std::path::PathBuf;

use thiserror::Error;

mod catalog;
mod layout;
mod registry;

pub use catalog::{DeleteOutcome, ModelCatalog, ModelListing};
pub use layout::ApiLayout;
pub use registry::{Registry, RegistryEntry};

/// Error type for workspace operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The chosen root is not a LoopBack API folder.
    ///
    /// Carries every missing required path so the frontend can name them all
    /// in one message instead of failing piecemeal.
    #[error("invalid API folder; missing: {}", join_paths(.0))]
    InvalidStructure(Vec<PathBuf>),

    /// A model cannot be saved without a name.
    #[error("model name cannot be empty")]
    EmptyModelName,

    /// Underlying filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A workspace document failed to parse or serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for workspace operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
