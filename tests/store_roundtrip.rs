use purplex_faq_rust::services::local::LocalFileStore;
use purplex_faq_rust::services::{
    load_records, load_settings, save_records, save_settings, seed_records, FaqSettings,
    KeyValueStore, RECORDS_KEY,
};
use std::path::PathBuf;
use std::{env, fs};
use uuid::Uuid;

struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        Self(env::temp_dir().join(format!("faq-store-{}", Uuid::new_v4())))
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.0).ok();
    }
}

#[test]
fn empty_directory_falls_open_to_seed_data() {
    let dir = TempDir::new();
    let store = LocalFileStore::open(&dir.0);
    assert_eq!(load_records(&store).len(), 4);
    assert_eq!(load_settings(&store), FaqSettings::default());
}

#[test]
fn records_roundtrip_through_files() {
    let dir = TempDir::new();
    let store = LocalFileStore::open(&dir.0);
    let records = seed_records();
    save_records(&store, &records).unwrap();
    assert_eq!(load_records(&store), records);
    assert!(dir.0.join("faq-records.json").exists());
}

#[test]
fn corrupt_file_falls_open_to_seed_data() {
    let dir = TempDir::new();
    let store = LocalFileStore::open(&dir.0);
    store.set_item(RECORDS_KEY, "][ not json").unwrap();
    assert_eq!(load_records(&store).len(), 4);
}

#[test]
fn settings_roundtrip_through_files() {
    let dir = TempDir::new();
    let store = LocalFileStore::open(&dir.0);
    let settings = FaqSettings {
        allow_submissions: false,
        enable_voting: true,
        ai_assist: true,
        default_tags: "policies, billing".into(),
    };
    save_settings(&store, &settings).unwrap();
    assert_eq!(load_settings(&store), settings);
}

#[test]
fn save_overwrites_prior_contents() {
    let dir = TempDir::new();
    let store = LocalFileStore::open(&dir.0);
    let mut records = seed_records();
    save_records(&store, &records).unwrap();
    records.truncate(1);
    save_records(&store, &records).unwrap();
    assert_eq!(load_records(&store).len(), 1);
}
