//! Value-file loading tests.
//!
//! Each `#[case]` is isolated — no shared state.

use rstest::rstest;
use std::fs;
use tagplate_core::{values, ConfigError};
use tempfile::TempDir;

fn write_values(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("values.yaml");
    fs::write(&path, body).expect("write values");
    path
}

#[rstest]
#[case("title: Home\n", "title", "Home")]
#[case("count: 3\n", "count", "3")]
#[case("show: true\n", "show", "true")]
#[case("empty: ~\n", "empty", "")]
#[case("zero: \"0\"\n", "zero", "0")]
#[case("url: \"http://example.com\"\n", "url", "http://example.com")]
fn scalar_values_load_as_strings(#[case] body: &str, #[case] key: &str, #[case] expected: &str) {
    let dir = TempDir::new().expect("tempdir");
    let path = write_values(&dir, body);
    let loaded = values::load_values_at(&path).expect("load");
    assert_eq!(loaded.get(key).map(String::as_str), Some(expected));
}

#[test]
fn nested_value_is_rejected_with_key() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_values(&dir, "menu:\n  - a\n  - b\n");
    let err = values::load_values_at(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key } if key == "menu"), "got: {err}");
}

#[test]
fn missing_values_file_returns_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let err = values::load_values_at(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }), "got: {err}");
}

#[test]
fn empty_values_file_is_empty_map() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_values(&dir, "");
    assert!(values::load_values_at(&path).expect("load").is_empty());
}
