use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use modeler_core::model::RelationSpec;

pub mod commands;

/// Canonicalize the root path if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // Try to canonicalize; if it fails (e.g., path does not yet exist),
        // join it with the current dir to get an absolute path.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Parse a `--property` flag value of the form `name:type`.
pub fn parse_property_arg(spec: &str) -> Result<(String, String)> {
    let mut parts = spec.splitn(2, ':');
    let name = parts.next().unwrap_or_default().trim();
    let kind = parts.next().unwrap_or_default().trim();
    if name.is_empty() || kind.is_empty() {
        bail!("Invalid property spec '{spec}'; expected name:type");
    }
    Ok((name.to_string(), kind.to_string()))
}

/// Parse a `--relation` flag value of the form `name:type:model[:foreignKey]`.
pub fn parse_relation_arg(spec: &str) -> Result<(String, RelationSpec)> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    if parts.len() < 3 || parts.len() > 4 || parts[..3].iter().any(|p| p.is_empty()) {
        bail!("Invalid relation spec '{spec}'; expected name:type:model[:foreignKey]");
    }

    let foreign_key = parts.get(3).filter(|fk| !fk.is_empty()).map(|fk| fk.to_string());
    let relation = RelationSpec {
        kind: parts[1].to_string(),
        model: parts[2].to_string(),
        foreign_key,
    };
    Ok((parts[0].to_string(), relation))
}
