/// Render the boilerplate stub script for a model.
///
/// The stub is a fixed template with the model name substituted; model
/// authors fill in remote method implementations by hand afterwards.
pub fn script_stub(model_name: &str) -> String {
    let mut contents = String::new();
    contents.push_str("'use strict';\n\n");
    contents.push_str(&format!("module.exports = function({model_name}) {{\n"));
    contents.push_str(&format!("    // Model name: {model_name}\n"));
    contents.push_str("};\n");
    contents
}
