use crate::services::{FaqError, KeyValueStore, ServiceResult};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Store configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct LocalStoreConfig {
    pub data_dir: PathBuf,
}

impl LocalStoreConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var("FAQ_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".faq-data"));
        Self { data_dir }
    }
}

/// File-backed key-value store: each key persists as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    dir: PathBuf,
}

impl LocalFileStore {
    pub fn new(config: &LocalStoreConfig) -> Self {
        Self {
            dir: config.data_dir.clone(),
        }
    }

    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for LocalFileStore {
    fn get_item(&self, key: &str) -> ServiceResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(FaqError::Storage(error.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> ServiceResult<()> {
        fs::create_dir_all(&self.dir).map_err(|error| FaqError::Storage(error.to_string()))?;
        fs::write(self.key_path(key), value).map_err(|error| FaqError::Storage(error.to_string()))
    }
}
