//! Unit tests for config loading.

#![allow(clippy::unwrap_used)]

use super::Config;

fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("paritex.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn empty_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "");

    let config = Config::load(&path).unwrap();

    assert!(config.scan.threads.is_none());
    assert!(config.scan.redo_empty.is_none());
    assert!(config.scan.ocr_languages.is_none());
}

#[test]
fn scan_section_is_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "[scan]\nthreads = 4\nredo_empty = true\nmax_depth = 2\nocr_languages = \"fra+nld\"\n",
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.scan.threads, Some(4));
    assert_eq!(config.scan.redo_empty, Some(true));
    assert_eq!(config.scan.max_depth, Some(2));
    assert_eq!(config.scan.ocr_languages.as_deref(), Some("fra+nld"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[scan]\nthread = 4\n");

    assert!(Config::load(&path).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(Config::load(&dir.path().join("paritex.toml")).is_err());
}
