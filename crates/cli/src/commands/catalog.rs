use anyhow::{Context, Result};
use modeler_core::workspace::{ApiLayout, ModelListing};
use serde::Serialize;

use crate::commands::{load_catalog, print_path_status, Prompter};
use crate::canonicalize_or_current;

/// Snapshot of a workspace for `info --json`.
#[derive(Serialize)]
pub struct WorkspaceInfo {
    pub root: String,
    pub registry_path: String,
    pub models_dir: String,
    pub datasources_path: String,
    pub datasources: Vec<String>,
    pub models: Vec<ModelListing>,
}

/// Validate the workspace structure and report key paths.
pub fn info_command(root: &str, json: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ApiLayout::new(&root_path);
    layout
        .validate()
        .with_context(|| format!("Invalid API folder at {}", root_path.display()))?;

    let (_, catalog) = load_catalog(root)?;

    if json {
        let info = WorkspaceInfo {
            root: layout.root.display().to_string(),
            registry_path: layout.registry_path.display().to_string(),
            models_dir: layout.models_dir.display().to_string(),
            datasources_path: layout.datasources_path.display().to_string(),
            datasources: catalog.datasources().to_vec(),
            models: catalog.list_models(),
        };
        let serialized =
            serde_json::to_string_pretty(&info).context("Failed to serialize workspace info")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("LoopBack API Workspace");
    println!("======================");
    println!("Root: {}", layout.root.display());
    println!();
    println!("Structure:");
    print_path_status("Registry (model-config.json)", &layout.registry_path);
    print_path_status("Models dir", &layout.models_dir);
    print_path_status("Datasources (datasources.json)", &layout.datasources_path);
    println!();

    let datasources = catalog.datasources();
    println!("Datasources ({}):", datasources.len());
    if datasources.is_empty() {
        println!("  (none)");
    }
    for name in datasources {
        println!("  - {name}");
    }
    println!();

    let models = catalog.list_models();
    println!("Models ({}):", models.len());
    if models.is_empty() {
        println!("  (none)");
    }
    for model in models {
        println!("  - {}", model.name);
    }

    Ok(())
}

/// List registered models as `(name, plural)` rows.
pub fn list_models_command(root: &str, json: bool) -> Result<()> {
    let (_, catalog) = load_catalog(root)?;
    let models = catalog.list_models();

    if json {
        let serialized =
            serde_json::to_string_pretty(&models).context("Failed to serialize model list")?;
        println!("{}", serialized);
    } else {
        println!("Models ({}):", models.len());
        if models.is_empty() {
            println!("  (none)");
            return Ok(());
        }
        for model in models {
            if model.plural.is_empty() {
                println!("  - {}", model.name);
            } else {
                println!("  - {} (plural: {})", model.name, model.plural);
            }
        }
    }

    Ok(())
}

/// List datasource names from `server/datasources.json`.
pub fn datasources_command(root: &str, json: bool) -> Result<()> {
    let (_, catalog) = load_catalog(root)?;
    let datasources = catalog.datasources();

    if json {
        let serialized = serde_json::to_string_pretty(&datasources)
            .context("Failed to serialize datasource list")?;
        println!("{}", serialized);
    } else {
        println!("Datasources ({}):", datasources.len());
        if datasources.is_empty() {
            println!("  (none)");
            return Ok(());
        }
        for name in datasources {
            println!("  - {name}");
        }
    }

    Ok(())
}

/// Delete a model's registry entry and on-disk files.
///
/// Asks for confirmation unless `assume_yes` is set. Unknown names and
/// already-missing files are silent no-ops, matching the registry contract.
pub fn delete_model_command(
    root: &str,
    name: &str,
    assume_yes: bool,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let (_, mut catalog) = load_catalog(root)?;

    if !assume_yes {
        let question = format!("Are you sure you want to delete the model '{name}'?");
        if !prompter.confirm(&question)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let outcome = catalog
        .delete_model(name)
        .with_context(|| format!("Failed to delete model '{name}'"))?;

    println!("Deleted model '{name}':");
    println!("  Registry entry: {}", removed_label(outcome.removed_entry));
    println!("  Schema file:    {}", removed_label(outcome.removed_schema));
    println!("  Stub script:    {}", removed_label(outcome.removed_script));

    Ok(())
}

fn removed_label(removed: bool) -> &'static str {
    if removed {
        "removed"
    } else {
        "not present"
    }
}
