use anyhow::{bail, Context, Result};
use modeler_core::editor::{ModelEditor, SavedModel};
use modeler_core::model::{ArgSource, HttpRoute, MethodArg, MethodSpec, RelationSpec};

use crate::commands::{load_catalog, Prompter};
use crate::{parse_property_arg, parse_relation_arg};

/// Create a new model and save it into the workspace.
///
/// Fields can come from flags (`--property name:type`, `--relation
/// name:type:model[:fk]`), from the interactive wizard, or both; flag values
/// are applied first so the wizard can extend them.
pub fn new_model_command(
    root: &str,
    name: Option<String>,
    datasource: Option<String>,
    properties: &[String],
    relations: &[String],
    interactive: bool,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let (layout, catalog) = load_catalog(root)?;
    let mut editor = ModelEditor::create(&layout);

    let name = match name {
        Some(name) => Some(name),
        None if interactive => prompter.input("Model name:")?,
        None => None,
    };
    match name {
        Some(name) => editor.set_name(name),
        None if interactive => bail!("Model name is required"),
        None => bail!("Model name is required (use --name or --interactive)"),
    }

    if let Some(datasource) = datasource {
        editor.set_datasource(datasource);
    }

    apply_field_flags(&mut editor, properties, relations)?;

    if interactive && !run_editor_wizard(&mut editor, catalog.datasources(), prompter)? {
        println!("Aborted.");
        return Ok(());
    }

    let saved = editor.save().context("Failed to save model")?;
    report_saved(&saved, editor.datasource());
    Ok(())
}

/// Open an existing model, apply additions, and save it back.
pub fn edit_model_command(
    root: &str,
    name: &str,
    properties: &[String],
    relations: &[String],
    interactive: bool,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let (layout, catalog) = load_catalog(root)?;
    let mut editor = ModelEditor::open(&layout, name)
        .with_context(|| format!("Failed to open model '{name}'"))?;

    apply_field_flags(&mut editor, properties, relations)?;

    if interactive && !run_editor_wizard(&mut editor, catalog.datasources(), prompter)? {
        println!("Aborted.");
        return Ok(());
    }

    let saved = editor.save().context("Failed to save model")?;
    report_saved(&saved, editor.datasource());
    Ok(())
}

/// Apply `--property` and `--relation` flag values to the draft.
fn apply_field_flags(
    editor: &mut ModelEditor,
    properties: &[String],
    relations: &[String],
) -> Result<()> {
    for spec in properties {
        let (name, kind) = parse_property_arg(spec)?;
        editor.add_property(name, kind);
    }
    for spec in relations {
        let (name, relation) = parse_relation_arg(spec)?;
        editor.add_relation(name, relation);
    }
    Ok(())
}

/// Menu loop mirroring the original editor window's actions.
///
/// Returns `true` when the user chose Save, `false` on Cancel.
pub fn run_editor_wizard(
    editor: &mut ModelEditor,
    datasources: &[String],
    prompter: &mut dyn Prompter,
) -> Result<bool> {
    const ADD_PROPERTY: &str = "Add property";
    const ADD_RELATION: &str = "Add relation";
    const ADD_METHOD: &str = "Add method";
    const SET_DATASOURCE: &str = "Set datasource";
    const SAVE: &str = "Save";
    const CANCEL: &str = "Cancel";

    loop {
        let choice = prompter.select(
            "Model editor:",
            &[ADD_PROPERTY, ADD_RELATION, ADD_METHOD, SET_DATASOURCE, SAVE, CANCEL],
        )?;

        match choice.as_str() {
            ADD_PROPERTY => {
                if let Some((name, kind)) = collect_property(prompter)? {
                    editor.add_property(name, kind);
                }
            }
            ADD_RELATION => {
                if let Some((name, relation)) = collect_relation(prompter)? {
                    editor.add_relation(name, relation);
                }
            }
            ADD_METHOD => {
                if let Some((name, method)) = collect_method(prompter)? {
                    editor.add_method(name, method);
                }
            }
            SET_DATASOURCE => {
                if datasources.is_empty() {
                    println!("No datasources defined in this workspace.");
                } else {
                    let options: Vec<&str> = datasources.iter().map(String::as_str).collect();
                    let selected = prompter.select("Datasource:", &options)?;
                    editor.set_datasource(selected);
                }
            }
            SAVE => return Ok(true),
            CANCEL => return Ok(false),
            _ => {}
        }
    }
}

/// Ask for a property; a blank name or type abandons the addition.
fn collect_property(prompter: &mut dyn Prompter) -> Result<Option<(String, String)>> {
    let Some(name) = prompter.input("Property name:")? else { return Ok(None) };
    let Some(kind) = prompter.input("Property type (e.g., string, number, date):")? else {
        return Ok(None);
    };
    Ok(Some((name, kind)))
}

/// Ask for a relation; a blank name, type, or model abandons the addition.
fn collect_relation(prompter: &mut dyn Prompter) -> Result<Option<(String, RelationSpec)>> {
    let Some(name) = prompter.input("Relation name:")? else { return Ok(None) };
    let Some(kind) = prompter.input("Relation type (e.g., belongsTo, hasMany):")? else {
        return Ok(None);
    };
    let Some(model) = prompter.input("Related model:")? else { return Ok(None) };
    let foreign_key = prompter.input("Foreign key:")?;

    Ok(Some((name, RelationSpec { kind, model, foreign_key })))
}

/// Ask for a remote method, including its argument list.
///
/// A blank method name, path, or verb abandons the addition. The argument
/// loop ends on a blank argument name.
fn collect_method(prompter: &mut dyn Prompter) -> Result<Option<(String, MethodSpec)>> {
    let Some(name) = prompter.input("Method name:")? else { return Ok(None) };
    let Some(path) = prompter.input("HTTP path (e.g., /custom-endpoint):")? else {
        return Ok(None);
    };
    let Some(verb) = prompter.input("HTTP verb (e.g., get, post):")? else { return Ok(None) };

    let mut accepts = Vec::new();
    loop {
        let Some(arg) = prompter.input("Argument name (leave blank to finish):")? else {
            break;
        };
        let kind = prompter.input("Argument type (e.g., string, object):")?.unwrap_or_default();
        let source = prompter.input("Argument source (e.g., body, query):")?.unwrap_or_default();
        accepts.push(MethodArg { arg, kind, http: ArgSource { source } });
    }

    let method = MethodSpec::new(&name, HttpRoute { path, verb }, accepts);
    Ok(Some((name, method)))
}

fn report_saved(saved: &SavedModel, datasource: Option<&str>) {
    println!("Saved model '{}':", saved.name);
    println!("  Plural: {}", saved.plural);
    println!("  Datasource: {}", datasource.unwrap_or("(none)"));
    println!("  Schema: {}", saved.schema_path.display());
    println!("  Stub:   {}", saved.script_path.display());
}
