use anyhow::Result;
use clap::{Parser, Subcommand};

use loopback_modeler::commands::{
    datasources_command, delete_model_command, edit_model_command, info_command,
    list_models_command, new_model_command, InquirePrompter,
};

/// LoopBack 3 model manager CLI.
///
/// This CLI is a thin wrapper around `modeler-core` (exposed in code as
/// `modeler_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "loopback-modeler",
    version,
    about = "Manage LoopBack 3 model definitions, stubs, and the model registry",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an API folder and report its structure and datasources.
    ///
    /// The folder must contain `server/model-config.json`, `server/models`,
    /// and `server/datasources.json`.
    Info {
        /// API root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List registered models (name and plural), excluding `_meta`.
    ListModels {
        /// API root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List datasource names defined in `server/datasources.json`.
    Datasources {
        /// API root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Create a new model and save its schema, stub script, and registry entry.
    NewModel {
        /// API root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Model name. Required unless `--interactive` is set.
        #[arg(long)]
        name: Option<String>,

        /// Datasource to bind the model to. Left empty when omitted.
        #[arg(long)]
        datasource: Option<String>,

        /// Add a property, as `name:type`. Repeatable.
        #[arg(long = "property")]
        properties: Vec<String>,

        /// Add a relation, as `name:type:model[:foreignKey]`. Repeatable.
        #[arg(long = "relation")]
        relations: Vec<String>,

        /// Run the interactive editor wizard before saving.
        #[arg(long, default_value_t = false)]
        interactive: bool,
    },

    /// Open an existing model, apply additions, and save it back.
    EditModel {
        /// API root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Name of the model to edit.
        #[arg(long)]
        name: String,

        /// Add a property, as `name:type`. Repeatable.
        #[arg(long = "property")]
        properties: Vec<String>,

        /// Add a relation, as `name:type:model[:foreignKey]`. Repeatable.
        #[arg(long = "relation")]
        relations: Vec<String>,

        /// Run the interactive editor wizard before saving.
        #[arg(long, default_value_t = false)]
        interactive: bool,
    },

    /// Delete a model: registry entry, schema file, and stub script.
    DeleteModel {
        /// API root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Name of the model to delete.
        #[arg(long)]
        name: String,

        /// Skip the confirmation prompt.
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut prompter = InquirePrompter;

    match cli.command {
        Command::Info { root, json } => info_command(&root, json)?,
        Command::ListModels { root, json } => list_models_command(&root, json)?,
        Command::Datasources { root, json } => datasources_command(&root, json)?,
        Command::NewModel { root, name, datasource, properties, relations, interactive } => {
            new_model_command(
                &root,
                name,
                datasource,
                &properties,
                &relations,
                interactive,
                &mut prompter,
            )?
        }
        Command::EditModel { root, name, properties, relations, interactive } => {
            edit_model_command(&root, &name, &properties, &relations, interactive, &mut prompter)?
        }
        Command::DeleteModel { root, name, yes } => {
            delete_model_command(&root, &name, yes, &mut prompter)?
        }
    }

    Ok(())
}
