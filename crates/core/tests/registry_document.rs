use std::fs;

use modeler_core::workspace::{Registry, RegistryEntry};
use tempfile::tempdir;

const SAMPLE: &str = r#"{
  "_meta": {
    "sources": ["loopback/common/models", "../common/models"]
  },
  "User": {
    "dataSource": "db",
    "public": false
  },
  "Order": {
    "dataSource": "mysql",
    "public": true,
    "plural": "Orders"
  }
}"#;

#[test]
fn load_parses_entries_and_reserved_meta() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("model-config.json");
    fs::write(&path, SAMPLE).expect("write registry");

    let registry = Registry::load(&path).expect("load registry");

    assert!(registry.meta.is_some());
    assert_eq!(registry.models.len(), 2);
    assert_eq!(registry.get("User").expect("User").data_source, "db");
    assert!(!registry.get("User").expect("User").public);
    assert_eq!(registry.get("Order").expect("Order").plural.as_deref(), Some("Orders"));
    assert!(!registry.contains("_meta"));
}

#[test]
fn save_round_trips_meta_and_entries() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("model-config.json");
    fs::write(&path, SAMPLE).expect("write registry");

    let registry = Registry::load(&path).expect("load registry");
    let out_path = dir.path().join("copy.json");
    registry.save(&out_path).expect("save registry");

    let reloaded = Registry::load(&out_path).expect("reload registry");
    assert_eq!(reloaded.meta, registry.meta);
    assert_eq!(reloaded.models, registry.models);

    // The reserved key must survive as-is in the written document.
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).expect("read copy")).expect("json");
    assert_eq!(raw["_meta"]["sources"][0], "loopback/common/models");
}

#[test]
fn insert_is_last_write_wins() {
    let mut registry = Registry::default();
    registry.insert("Foo", RegistryEntry::new("db"));
    registry.insert("Foo", RegistryEntry::new("mysql"));

    assert_eq!(registry.models.len(), 1);
    assert_eq!(registry.get("Foo").expect("Foo").data_source, "mysql");
}

#[test]
fn remove_unknown_name_is_a_no_op() {
    let mut registry = Registry::default();
    registry.insert("Foo", RegistryEntry::new("db"));

    assert!(registry.remove("Bar").is_none());
    assert_eq!(registry.models.len(), 1);

    let removed = registry.remove("Foo").expect("Foo was present");
    assert_eq!(removed.data_source, "db");
    assert!(registry.models.is_empty());
}

#[test]
fn entry_foreign_fields_survive_a_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("model-config.json");
    fs::write(
        &path,
        r#"{
          "Keep": {
            "dataSource": "db",
            "public": true,
            "options": { "remoting": { "sharedMethods": { "*": false } } },
            "$promise": false
          }
        }"#,
    )
    .expect("write registry");

    let registry = Registry::load(&path).expect("load registry");
    let entry = registry.get("Keep").expect("Keep");
    assert_eq!(entry.extra["options"]["remoting"]["sharedMethods"]["*"], false);

    registry.save(&path).expect("save registry");
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(raw["Keep"]["options"]["remoting"]["sharedMethods"]["*"], false);
    assert_eq!(raw["Keep"]["$promise"], false);
}

#[test]
fn entry_defaults_tolerate_sparse_documents() {
    // Entries written by other tools may omit fields entirely.
    let registry: Registry = serde_json::from_str(r#"{ "Bare": {} }"#).expect("parse");
    let entry = registry.get("Bare").expect("Bare");
    assert_eq!(entry.data_source, "");
    assert!(!entry.public);
    assert!(entry.plural.is_none());
}
