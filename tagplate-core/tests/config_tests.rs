//! Config loading error-message and resolution tests.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use std::path::Path;
use tagplate_core::{ConfigError, EngineConfig};

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_missing_config_returns_not_found() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("tagplate.yaml");
    let err = EngineConfig::load_at(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("tagplate.yaml"));
}

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("tagplate.yaml");
    file.write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let err = EngineConfig::load_at(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("tagplate.yaml"), "must contain file path, got: {err}");
}

#[test]
fn load_unknown_shape_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("tagplate.yaml");
    file.write_str("- this is a list, not a mapping\n").expect("write");

    let err = EngineConfig::load_at(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Resolution
// ---------------------------------------------------------------------------

#[test]
fn document_root_resolves_to_templates_subdir() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("tagplate.yaml");
    file.write_str("document_root: /srv/www\nseparator: \" | \"\n")
        .expect("write");
    file.assert(predicate::path::exists());

    let cfg = EngineConfig::load_at(file.path()).expect("load");
    let root = cfg.template_root().expect("root");
    assert_eq!(root.dir(), Path::new("/srv/www/templates"));
    assert_eq!(cfg.separator(), " | ");
}

#[test]
fn empty_config_file_loads_defaults() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("tagplate.yaml");
    file.write_str("\n").expect("write");

    let cfg = EngineConfig::load_at(file.path()).expect("load");
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.separator(), "\n");
}
