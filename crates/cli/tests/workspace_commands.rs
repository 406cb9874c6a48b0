use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use modeler_core::workspace::ApiLayout;
use predicates::prelude::*;
use tempfile::tempdir;

/// Lay down a minimal valid API workspace under `root`.
fn scaffold_api(root: &Path) -> ApiLayout {
    let layout = ApiLayout::new(root);
    fs::create_dir_all(&layout.models_dir).expect("models dir");
    fs::write(&layout.registry_path, r#"{ "_meta": { "sources": [] } }"#).expect("registry");
    fs::write(&layout.datasources_path, r#"{ "db": { "connector": "memory" } }"#)
        .expect("datasources");
    layout
}

#[test]
fn info_reports_structure_and_datasources() {
    let dir = tempdir().expect("tempdir");
    scaffold_api(dir.path());

    cargo_bin_cmd!("loopback-modeler")
        .arg("info")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry (model-config.json): OK"))
        .stdout(predicate::str::contains("- db"));
}

#[test]
fn info_json_snapshot_carries_paths_and_names() {
    let dir = tempdir().expect("tempdir");
    scaffold_api(dir.path());

    let output = cargo_bin_cmd!("loopback-modeler")
        .arg("info")
        .arg("--root")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let body: serde_json::Value = serde_json::from_slice(&output).expect("info json");
    assert!(body["registry_path"].as_str().expect("registry_path").ends_with("model-config.json"));
    assert_eq!(body["datasources"], serde_json::json!(["db"]));
    assert_eq!(body["models"], serde_json::json!([]));
}

#[test]
fn info_fails_on_invalid_structure() {
    let dir = tempdir().expect("tempdir");

    cargo_bin_cmd!("loopback-modeler")
        .arg("info")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API folder"));
}

#[test]
fn list_models_is_empty_on_fresh_workspace() {
    let dir = tempdir().expect("tempdir");
    scaffold_api(dir.path());

    cargo_bin_cmd!("loopback-modeler")
        .arg("list-models")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Models (0):"))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn list_models_json_excludes_the_meta_key() {
    let dir = tempdir().expect("tempdir");
    let layout = scaffold_api(dir.path());
    fs::write(
        &layout.registry_path,
        r#"{
          "_meta": { "sources": [] },
          "Order": { "dataSource": "db", "public": true, "plural": "Orders" }
        }"#,
    )
    .expect("registry");

    let output = cargo_bin_cmd!("loopback-modeler")
        .arg("list-models")
        .arg("--root")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let body: serde_json::Value = serde_json::from_slice(&output).expect("list json");
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Order");
    assert_eq!(rows[0]["plural"], "Orders");
}

#[test]
fn datasources_lists_top_level_keys() {
    let dir = tempdir().expect("tempdir");
    let layout = scaffold_api(dir.path());
    fs::write(&layout.datasources_path, r#"{ "db": {}, "mysql": {} }"#).expect("datasources");

    let output = cargo_bin_cmd!("loopback-modeler")
        .arg("datasources")
        .arg("--root")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let body: serde_json::Value = serde_json::from_slice(&output).expect("datasources json");
    assert_eq!(body, serde_json::json!(["db", "mysql"]));
}

#[test]
fn commands_fail_cleanly_when_registry_is_corrupt() {
    let dir = tempdir().expect("tempdir");
    let layout = scaffold_api(dir.path());
    fs::write(&layout.registry_path, "not-json").expect("corrupt registry");

    cargo_bin_cmd!("loopback-modeler")
        .arg("list-models")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open API workspace"));
}
