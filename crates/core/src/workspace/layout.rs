use std::path::{Path, PathBuf};

use crate::workspace::{WorkspaceError, WorkspaceResult};

/// Logical layout of a LoopBack API workspace on disk.
///
/// This is derived from a chosen root path. It does *not* perform any IO
/// itself beyond `validate`; the CLI or other frontends are responsible for
/// actually creating files based on this layout.
#[derive(Debug, Clone)]
pub struct ApiLayout {
    /// Root directory of the API.
    pub root: PathBuf,
    /// Directory holding server-side configuration (server).
    pub server_dir: PathBuf,
    /// Path to the model registry file (server/model-config.json).
    pub registry_path: PathBuf,
    /// Directory holding per-model schemas and stubs (server/models).
    pub models_dir: PathBuf,
    /// Path to the datasource definitions file (server/datasources.json).
    pub datasources_path: PathBuf,
}

impl ApiLayout {
    /// Compute the layout for an API rooted at `root`.
    ///
    /// This does *not* touch the filesystem.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let server_dir = root.join("server");
        let registry_path = server_dir.join("model-config.json");
        let models_dir = server_dir.join("models");
        let datasources_path = server_dir.join("datasources.json");

        Self { root, server_dir, registry_path, models_dir, datasources_path }
    }

    /// Path of a model's schema file (`server/models/<name>.json`).
    pub fn model_schema_path(&self, name: &str) -> PathBuf {
        self.models_dir.join(format!("{name}.json"))
    }

    /// Path of a model's stub script (`server/models/<name>.js`).
    pub fn model_script_path(&self, name: &str) -> PathBuf {
        self.models_dir.join(format!("{name}.js"))
    }

    /// Check that the root actually holds a LoopBack API.
    ///
    /// Requires the registry file, the models directory, and the datasources
    /// file. Fails with `InvalidStructure` naming every missing path, so a
    /// frontend can report them all at once.
    pub fn validate(&self) -> WorkspaceResult<()> {
        let mut missing = Vec::new();
        if !self.registry_path.is_file() {
            missing.push(self.registry_path.clone());
        }
        if !self.models_dir.is_dir() {
            missing.push(self.models_dir.clone());
        }
        if !self.datasources_path.is_file() {
            missing.push(self.datasources_path.clone());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(WorkspaceError::InvalidStructure(missing))
        }
    }
}
