//! Model definition types and stub script generation.
//!
//! A model is persisted as two files under `server/models/`:
//! - `<name>.json`: the schema document (`ModelDefinition`).
//! - `<name>.js`: a fixed boilerplate stub with the model name substituted.

mod definition;
mod stub;

pub use definition::{
    ArgSource, HttpRoute, MethodArg, MethodSpec, ModelDefinition, ModelOptions, PropertySpec,
    RelationSpec, ReturnSpec,
};
pub use stub::script_stub;
