use std::path::Path;

use anyhow::{Context, Result};
use modeler_core::workspace::{ApiLayout, ModelCatalog};

use crate::canonicalize_or_current;

/// Resolve the root and load the catalog (validating the structure first).
pub fn load_catalog(root: &str) -> Result<(ApiLayout, ModelCatalog)> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ApiLayout::new(&root_path);
    let catalog = ModelCatalog::from_root(&root_path)
        .with_context(|| format!("Failed to open API workspace at {}", root_path.display()))?;
    Ok((layout, catalog))
}

/// Helper to print whether a required path exists.
pub fn print_path_status(label: &str, path: &Path) {
    let exists = path.exists();
    println!("- {label}: {} ({})", if exists { "OK" } else { "MISSING" }, path.display());
}
