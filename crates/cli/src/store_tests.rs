//! Unit tests for the result store.

#![allow(clippy::unwrap_used)]

use super::ResultStore;
use crate::test_utils::outcome;

fn store_in(dir: &tempfile::TempDir) -> ResultStore {
    ResultStore::load_or_init(dir.path().join("output.csv")).unwrap()
}

#[test]
fn starts_empty_without_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(store.rows().is_empty());
    // Created lazily: loading alone must not touch the disk.
    assert!(!store.path().exists());
}

#[test]
fn upsert_persists_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);

    store.upsert(outcome("a.pdf", &["118.01", "218"], false)).unwrap();

    assert!(store.path().exists());
    let content = std::fs::read_to_string(store.path()).unwrap();
    assert!(content.starts_with(
        "Document Name,Sector Codes,Number of Codes,Processing Time,Used OCR Only"
    ));
    assert!(content.contains("a.pdf,118.01; 218,2,2026-08-28 12:00:00,false"));
}

#[test]
fn upsert_is_last_write_wins_per_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);

    store.upsert(outcome("a.pdf", &[], false)).unwrap();
    store.upsert(outcome("a.pdf", &["310"], true)).unwrap();

    assert_eq!(store.rows().len(), 1);
    assert_eq!(store.rows()[0].sector_codes, "310");
    assert_eq!(store.rows()[0].number_of_codes, 1);
    assert!(store.rows()[0].used_ocr_only);
}

#[test]
fn upsert_of_identical_outcome_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);

    store.upsert(outcome("a.pdf", &["118"], false)).unwrap();
    let before = store.rows().to_vec();
    store.upsert(outcome("a.pdf", &["118"], false)).unwrap();

    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn distinct_documents_keep_their_own_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);

    store.upsert(outcome("a.pdf", &["118"], false)).unwrap();
    store.upsert(outcome("b.pdf", &["218"], true)).unwrap();

    assert_eq!(store.rows().len(), 2);
}

#[test]
fn rows_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store.upsert(outcome("a.pdf", &["118.01"], true)).unwrap();
    drop(store);

    let reloaded = store_in(&dir);
    assert_eq!(reloaded.rows().len(), 1);
    assert_eq!(reloaded.rows()[0].document_name, "a.pdf");
    assert_eq!(reloaded.rows()[0].sector_codes, "118.01");
    assert!(reloaded.rows()[0].used_ocr_only);
}

#[test]
fn reload_then_upsert_replaces_prior_run_row() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store.upsert(outcome("a.pdf", &["118"], false)).unwrap();
    drop(store);

    let mut store = store_in(&dir);
    store.upsert(outcome("a.pdf", &["118", "218"], true)).unwrap();

    assert_eq!(store.rows().len(), 1);
    assert_eq!(store.rows()[0].number_of_codes, 2);
}

#[test]
fn empty_outcome_serializes_with_zero_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);

    store.upsert(outcome("a.pdf", &[], false)).unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("a.pdf,,0,2026-08-28 12:00:00,false"));
}
