use std::fs;

use loopback_modeler::{canonicalize_or_current, parse_property_arg, parse_relation_arg};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_returns_cwd_for_dot() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let result = canonicalize_or_current(".").expect("canonicalize").canonicalize().expect("canon");
    let expected = tmp.path().canonicalize().expect("canon tmp");
    assert_eq!(result, expected);

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn canonicalize_or_current_resolves_existing_relative_path() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let result = canonicalize_or_current("nested").expect("canonicalize nested");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn parse_property_arg_splits_name_and_type() {
    let (name, kind) = parse_property_arg("title:string").expect("parse");
    assert_eq!(name, "title");
    assert_eq!(kind, "string");

    let (name, kind) = parse_property_arg(" createdAt : date ").expect("parse with spaces");
    assert_eq!(name, "createdAt");
    assert_eq!(kind, "date");
}

#[test]
fn parse_property_arg_rejects_malformed_specs() {
    assert!(parse_property_arg("title").is_err());
    assert!(parse_property_arg(":string").is_err());
    assert!(parse_property_arg("title:").is_err());
}

#[test]
fn parse_relation_arg_accepts_optional_foreign_key() {
    let (name, relation) = parse_relation_arg("owner:belongsTo:User:ownerId").expect("parse");
    assert_eq!(name, "owner");
    assert_eq!(relation.kind, "belongsTo");
    assert_eq!(relation.model, "User");
    assert_eq!(relation.foreign_key.as_deref(), Some("ownerId"));

    let (_, relation) = parse_relation_arg("orders:hasMany:Order").expect("parse without fk");
    assert!(relation.foreign_key.is_none());
}

#[test]
fn parse_relation_arg_rejects_malformed_specs() {
    assert!(parse_relation_arg("owner:belongsTo").is_err());
    assert!(parse_relation_arg("owner::User").is_err());
    assert!(parse_relation_arg("a:b:c:d:e").is_err());
}
