use crate::faq_ops::{matches_query, parse_tags};
use crate::services::{
    load_records, load_settings, save_records, FaqError, FaqRecord, FaqStatus, KeyValueStore,
    ServiceResult,
};
use chrono::Utc;
use uuid::Uuid;

/// Public help center operations, gated by the admin settings. Unlike the
/// admin controller this holds no collection in memory; each call reads the
/// store, applies the change, and writes it back.
pub struct HelpCenter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HelpCenter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Published records matching the search text, most recent first.
    pub fn published(&self, query: &str) -> Vec<FaqRecord> {
        let query = query.to_lowercase();
        load_records(&self.store)
            .into_iter()
            .filter(|record| record.status == FaqStatus::Published)
            .filter(|record| matches_query(record, &query))
            .collect()
    }

    /// Counts a page view on a record. An unknown identifier is ignored.
    pub fn record_view(&self, id: Uuid) -> ServiceResult<()> {
        let mut records = load_records(&self.store);
        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            record.views = record.views.saturating_add(1);
        }
        save_records(&self.store, &records)
    }

    /// Counts a helpful vote on a record, if voting is enabled.
    pub fn vote_helpful(&self, id: Uuid) -> ServiceResult<()> {
        if !load_settings(&self.store).enable_voting {
            return Err(FaqError::Validation("voting_disabled".into()));
        }
        let mut records = load_records(&self.store);
        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            record.helpful = record.helpful.saturating_add(1);
        }
        save_records(&self.store, &records)
    }

    /// Files a visitor question into the inbox as a pending record carrying
    /// the configured default tags, if submissions are enabled.
    pub fn submit_question(&self, question: &str) -> ServiceResult<Uuid> {
        let settings = load_settings(&self.store);
        if !settings.allow_submissions {
            return Err(FaqError::Validation("submissions_disabled".into()));
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(FaqError::Validation("question_required".into()));
        }

        let record = FaqRecord {
            id: Uuid::new_v4(),
            question: question.to_string(),
            answer: String::new(),
            tags: parse_tags(&settings.default_tags),
            views: 0,
            helpful: 0,
            status: FaqStatus::Pending,
            created_at: Utc::now(),
        };
        let id = record.id;
        let mut records = load_records(&self.store);
        records.insert(0, record);
        save_records(&self.store, &records)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{save_settings, seed_records, FaqSettings, InMemoryStore};

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        save_records(&store, &seed_records()).unwrap();
        store
    }

    #[test]
    fn published_hides_drafts_and_pending() {
        let help = HelpCenter::new(seeded_store());
        let records = help.published("");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.status == FaqStatus::Published));
    }

    #[test]
    fn record_view_increments_one_record() {
        let help = HelpCenter::new(seeded_store());
        let target = help.published("")[0].clone();
        help.record_view(target.id).unwrap();
        let after = help.published("");
        assert_eq!(
            after.iter().find(|r| r.id == target.id).unwrap().views,
            target.views + 1
        );
        assert_eq!(
            after.iter().filter(|r| r.views != target.views + 1).count(),
            1
        );
    }

    #[test]
    fn record_view_unknown_id_is_noop() {
        let help = HelpCenter::new(seeded_store());
        let before = help.published("");
        help.record_view(Uuid::new_v4()).unwrap();
        assert_eq!(help.published(""), before);
    }

    #[test]
    fn voting_respects_settings() {
        let store = seeded_store();
        let settings = FaqSettings {
            enable_voting: false,
            ..Default::default()
        };
        save_settings(&store, &settings).unwrap();
        let help = HelpCenter::new(store);
        let id = help.published("")[0].id;
        assert!(help.vote_helpful(id).is_err());
    }

    #[test]
    fn vote_increments_helpful_count() {
        let help = HelpCenter::new(seeded_store());
        let target = help.published("")[0].clone();
        help.vote_helpful(target.id).unwrap();
        let after = help.published("");
        assert_eq!(
            after.iter().find(|r| r.id == target.id).unwrap().helpful,
            target.helpful + 1
        );
    }

    #[test]
    fn submission_lands_pending_with_default_tags() {
        let store = InMemoryStore::new();
        let settings = FaqSettings {
            default_tags: "general, new".into(),
            ..Default::default()
        };
        save_settings(&store, &settings).unwrap();
        let help = HelpCenter::new(store.clone());
        let id = help.submit_question("  Do you allow pets?  ").unwrap();

        let records = load_records(&store);
        let record = records.iter().find(|r| r.id == id).unwrap();
        assert_eq!(records[0].id, id);
        assert_eq!(record.question, "Do you allow pets?");
        assert_eq!(record.status, FaqStatus::Pending);
        assert_eq!(record.tags, vec!["general", "new"]);
    }

    #[test]
    fn submission_respects_settings() {
        let store = InMemoryStore::new();
        let settings = FaqSettings {
            allow_submissions: false,
            ..Default::default()
        };
        save_settings(&store, &settings).unwrap();
        let help = HelpCenter::new(store);
        assert!(help.submit_question("Anything?").is_err());
    }
}
