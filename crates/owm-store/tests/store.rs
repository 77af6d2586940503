//! Integration tests for the directory-backed save store.

use owm_model::{CharacterClass, SaveRecord};
use owm_rawdata::TOTAL_LEN;
use owm_store::{SaveStore, StoreError};

#[test]
fn create_load_delete_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let record = SaveRecord::new("Brennan", CharacterClass::Fighter, 1_690_000_001.0);
    let file_name = store.create(&record).unwrap();
    assert_eq!(file_name, "1690000001000.rawdata");

    let loaded = store.load(&file_name).unwrap();
    assert_eq!(loaded, record);

    store.delete(&file_name).unwrap();
    assert!(store.load(&file_name).is_err());
}

#[test]
fn save_refreshes_modification_and_rewrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let mut record = SaveRecord::new("Brennan", CharacterClass::Fighter, 100.0);
    let file_name = store.create(&record).unwrap();

    record.experience = 500;
    store.save(&file_name, &mut record, 250.0).unwrap();
    assert_eq!(record.modification_date, 250.0);

    let loaded = store.load(&file_name).unwrap();
    assert_eq!(loaded.experience, 500);
    assert_eq!(loaded.modification_date, 250.0);
    assert_eq!(loaded.creation_date, 100.0);
}

#[test]
fn list_reports_valid_and_invalid_saves() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let record = SaveRecord::new("Brennan", CharacterClass::Fighter, 200.0);
    store.create(&record).unwrap();

    // A file with the right extension but a torn buffer.
    std::fs::write(dir.path().join("999.rawdata"), vec![0u8; TOTAL_LEN / 2]).unwrap();
    // An unrelated file the store must ignore.
    std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();

    let summaries = store.list().unwrap();
    assert_eq!(summaries.len(), 2);

    let valid = summaries
        .iter()
        .find(|summary| summary.is_valid())
        .expect("one valid save");
    assert_eq!(valid.persona_name.as_deref(), Some("Brennan"));
    assert_eq!(valid.character_class, Some(CharacterClass::Fighter));

    let invalid = summaries
        .iter()
        .find(|summary| !summary.is_valid())
        .expect("one invalid save");
    assert_eq!(invalid.file_name, "999.rawdata");
    assert_eq!(invalid.persona_name, None);
}

#[test]
fn list_of_missing_root_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path().join("never-created"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn load_rejects_foreign_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());
    assert!(matches!(
        store.load("../../etc/passwd"),
        Err(StoreError::InvalidFileName { .. })
    ));
}
