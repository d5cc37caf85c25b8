//! End-to-end tests: manifest loading, collection, and both renderers
//!
//! These tests drive the same path the CLI does - deserialize a manifest,
//! collect field rows, write the artifacts - and check the written files
//! are real zip containers.

use schemadoc_core::{
    collect_rows, collect_rows_filtered, generate, render, Backend, GenerateOptions, OutputMode,
    Registry,
};
use std::fs;
use std::path::Path;

fn users_manifest_json() -> &'static str {
    r#"{
        "models": [
            {
                "name": "accounts.User",
                "db_table": "users",
                "fields": [
                    {"name": "id", "type": "integer", "primary_key": true, "unique": true},
                    {"name": "email", "type": "char", "null": true,
                     "attrs": {"max_length": 254}}
                ]
            },
            {
                "name": "accounts.Session",
                "fields": [
                    {"name": "key", "type": "char", "primary_key": true,
                     "attrs": {"max_length": 40}},
                    {"name": "expires_at", "type": "datetime"}
                ]
            }
        ]
    }"#
}

fn users_registry(dir: &Path) -> Registry {
    let manifest = dir.join("models.json");
    fs::write(&manifest, users_manifest_json()).unwrap();
    Registry::from_file(&manifest).expect("manifest should load")
}

#[test]
fn users_example_produces_two_rows_under_users() {
    let dir = tempfile::tempdir().unwrap();
    let registry = users_registry(dir.path());

    let rows = collect_rows(&registry, Backend::Mysql).unwrap();
    let users: Vec<_> = rows.iter().filter(|r| r.table == "users").collect();
    assert_eq!(users.len(), 2);

    let id = users[0];
    assert_eq!(id.name, "id");
    assert!(id.primary_key);
    assert!(id.unique);
    assert!(!id.nullable);
    assert_eq!(id.type_label, "integer");

    let email = users[1];
    assert_eq!(email.name, "email");
    assert!(!email.primary_key);
    assert!(!email.unique);
    assert!(email.nullable);
    assert_eq!(email.type_label, "varchar(254)");
}

#[test]
fn yaml_manifest_loads_like_json() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("models.yaml");
    fs::write(
        &manifest,
        r#"
models:
  - name: accounts.User
    db_table: users
    fields:
      - name: id
        type: integer
        primary_key: true
"#,
    )
    .unwrap();

    let registry = Registry::from_file(&manifest).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.models()[0].table_name(), "users");
}

#[test]
fn missing_manifest_propagates_io_error() {
    let err = Registry::from_file(Path::new("no/such/manifest.json")).unwrap_err();
    assert!(err.to_string().contains("IO error"));
}

#[test]
fn summary_order_matches_detail_order() {
    let dir = tempfile::tempdir().unwrap();
    let registry = users_registry(dir.path());

    let rows = collect_rows(&registry, Backend::Mysql).unwrap();
    // registration order is users then accounts_session; the rendered
    // table list sorts and de-duplicates
    assert_eq!(rows[0].table, "users");
    assert_eq!(render::table_names(&rows), ["accounts_session", "users"]);
}

#[test]
fn generate_writes_document_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let registry = users_registry(dir.path());

    let out = dir.path().join("schema.docx");
    let options = GenerateOptions {
        output: Some(out.clone()),
        ..GenerateOptions::default()
    };
    let written = generate(&registry, &options).unwrap();
    assert_eq!(written, out);

    // .docx files are zip containers
    let bytes = fs::read(&written).unwrap();
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn generate_spreadsheet_mode() {
    let dir = tempfile::tempdir().unwrap();
    let registry = users_registry(dir.path());

    let out = dir.path().join("schema.xlsx");
    let options = GenerateOptions {
        backend: Backend::Sqlite,
        mode: OutputMode::from_arg("xlsx"),
        output: Some(out.clone()),
    };
    let written = generate(&registry, &options).unwrap();

    let bytes = fs::read(&written).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn empty_model_set_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let registry = users_registry(dir.path());

    let rows = collect_rows_filtered(&registry, Backend::Mysql, |_| false).unwrap();
    assert!(rows.is_empty());

    let doc = dir.path().join("empty.docx");
    render::docx::write_document(&rows, &doc).unwrap();
    assert!(doc.exists());

    let sheet = dir.path().join("empty.xlsx");
    render::xlsx::write_workbook(&rows, &sheet).unwrap();
    assert!(sheet.exists());
}
