use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

pub mod local;

pub type ServiceResult<T> = Result<T, FaqError>;

#[derive(Debug, Error)]
pub enum FaqError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("validation error: {0}")]
    Validation(String),
}

/// Storage keys for the persisted collection and the settings object.
pub const RECORDS_KEY: &str = "faq-records";
pub const SETTINGS_KEY: &str = "faq-settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqStatus {
    Pending,
    Draft,
    Published,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqRecord {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub views: u64,
    pub helpful: u64,
    pub status: FaqStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqSettings {
    pub allow_submissions: bool,
    pub enable_voting: bool,
    pub ai_assist: bool,
    pub default_tags: String,
}

impl Default for FaqSettings {
    fn default() -> Self {
        Self {
            allow_submissions: true,
            enable_voting: true,
            ai_assist: false,
            default_tags: String::new(),
        }
    }
}

/// Key-value persistence with local-storage semantics: string keys, string
/// payloads, last write wins.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> ServiceResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> ServiceResult<()>;
}

/// Returns the persisted collection, or the seed set when nothing usable is
/// stored. Never surfaces an error; a broken payload falls open to defaults.
pub fn load_records<S: KeyValueStore>(store: &S) -> Vec<FaqRecord> {
    match store.get_item(RECORDS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(%error, "stored FAQ collection unreadable, seeding defaults");
                seed_records()
            }
        },
        Ok(None) => seed_records(),
        Err(error) => {
            tracing::warn!(%error, "FAQ store unavailable, seeding defaults");
            seed_records()
        }
    }
}

pub fn save_records<S: KeyValueStore>(store: &S, records: &[FaqRecord]) -> ServiceResult<()> {
    let raw =
        serde_json::to_string(records).map_err(|error| FaqError::Serialization(error.to_string()))?;
    store.set_item(RECORDS_KEY, &raw)
}

pub fn load_settings<S: KeyValueStore>(store: &S) -> FaqSettings {
    match store.get_item(SETTINGS_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        Ok(None) => FaqSettings::default(),
        Err(error) => {
            tracing::warn!(%error, "FAQ settings unavailable, using defaults");
            FaqSettings::default()
        }
    }
}

pub fn save_settings<S: KeyValueStore>(store: &S, settings: &FaqSettings) -> ServiceResult<()> {
    let raw = serde_json::to_string(settings)
        .map_err(|error| FaqError::Serialization(error.to_string()))?;
    store.set_item(SETTINGS_KEY, &raw)
}

/// The collection a fresh install starts with.
pub fn seed_records() -> Vec<FaqRecord> {
    vec![
        FaqRecord {
            id: Uuid::new_v4(),
            question: "What is your sick child policy?".into(),
            answer: "Children who are ill must stay home to prevent the spread of illness.".into(),
            tags: vec!["policies".into()],
            views: 54,
            helpful: 41,
            status: FaqStatus::Published,
            created_at: Utc::now() - Duration::days(10),
        },
        FaqRecord {
            id: Uuid::new_v4(),
            question: "What educational approach do you use?".into(),
            answer: "We combine play-based learning with structured activities.".into(),
            tags: vec!["curriculum".into()],
            views: 27,
            helpful: 18,
            status: FaqStatus::Published,
            created_at: Utc::now() - Duration::days(7),
        },
        FaqRecord {
            id: Uuid::new_v4(),
            question: "Do you provide meals?".into(),
            answer: "Healthy snacks are provided daily; lunches are optional.".into(),
            tags: vec!["food".into()],
            views: 9,
            helpful: 7,
            status: FaqStatus::Draft,
            created_at: Utc::now() - Duration::days(2),
        },
        FaqRecord {
            id: Uuid::new_v4(),
            question: "Do you offer part-time care?".into(),
            answer: "Yes, 2-3 days per week options are available.".into(),
            tags: vec!["enrollment".into()],
            views: 0,
            helpful: 0,
            status: FaqStatus::Pending,
            created_at: Utc::now() - Duration::days(1),
        },
    ]
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_item(&self, key: &str) -> ServiceResult<Option<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> ServiceResult<()> {
        let mut state = self.state.lock().unwrap();
        state.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
