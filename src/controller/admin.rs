use crate::analytics::{self, FaqTotals};
use crate::faq_ops::{apply_edit, build_faq, matches_query, EditOptions, FaqOptions};
use crate::services::{
    load_records, load_settings, save_records, save_settings, FaqRecord, FaqSettings, FaqStatus,
    KeyValueStore, ServiceResult,
};
use tracing::debug;
use uuid::Uuid;

/// The admin screen's active view. Published, Draft, and Inbox narrow the
/// list to one status; Analytics and Settings show the whole collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminView {
    Published,
    Draft,
    Inbox,
    Analytics,
    Settings,
}

impl AdminView {
    pub fn status_filter(self) -> Option<FaqStatus> {
        match self {
            AdminView::Published => Some(FaqStatus::Published),
            AdminView::Draft => Some(FaqStatus::Draft),
            AdminView::Inbox => Some(FaqStatus::Pending),
            AdminView::Analytics | AdminView::Settings => None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum AdminCommand {
    Create(FaqOptions),
    Edit(EditOptions),
    Delete { id: Uuid },
    Move { id: Uuid, to: FaqStatus },
}

/// Owns the FAQ collection for the session. Every mutation writes the full
/// collection back to the store; the store is only read again at startup.
pub struct AdminFaqController<S: KeyValueStore> {
    store: S,
    records: Vec<FaqRecord>,
    settings: FaqSettings,
    query: String,
    view: AdminView,
}

impl<S: KeyValueStore> AdminFaqController<S> {
    pub fn new(store: S) -> Self {
        let records = load_records(&store);
        let settings = load_settings(&store);
        Self {
            store,
            records,
            settings,
            query: String::new(),
            view: AdminView::Published,
        }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn settings(&self) -> &FaqSettings {
        &self.settings
    }

    pub fn view(&self) -> AdminView {
        self.view
    }

    pub fn set_view(&mut self, view: AdminView) {
        self.view = view;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records passing the active view's status predicate and the search
    /// query, in collection order (most recent first).
    pub fn filtered(&self) -> Vec<&FaqRecord> {
        let query = self.query.to_lowercase();
        self.records
            .iter()
            .filter(|record| match self.view.status_filter() {
                Some(status) => record.status == status,
                None => true,
            })
            .filter(|record| matches_query(record, &query))
            .collect()
    }

    pub fn totals(&self) -> FaqTotals {
        FaqTotals::from_records(&self.records)
    }

    pub fn top_questions(&self) -> Vec<&FaqRecord> {
        analytics::top_questions(&self.records)
    }

    pub fn apply(&mut self, command: AdminCommand) -> ServiceResult<()> {
        match command {
            AdminCommand::Create(options) => self.create(&options).map(|_| ()),
            AdminCommand::Edit(options) => self.edit(&options),
            AdminCommand::Delete { id } => self.delete(id),
            AdminCommand::Move { id, to } => self.move_status(id, to),
        }
    }

    /// Creates a record from dialog input and prepends it, keeping the
    /// collection most-recent-first.
    pub fn create(&mut self, options: &FaqOptions) -> ServiceResult<Uuid> {
        let record = build_faq(options)?;
        let id = record.id;
        self.records.insert(0, record);
        self.persist()?;
        debug!(%id, "faq created");
        Ok(id)
    }

    /// Replaces the editable fields of a record; an unknown identifier is
    /// ignored.
    pub fn edit(&mut self, options: &EditOptions) -> ServiceResult<()> {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == options.id) {
            apply_edit(record, options);
            debug!(id = %options.id, "faq edited");
        }
        self.persist()
    }

    pub fn delete(&mut self, id: Uuid) -> ServiceResult<()> {
        self.records.retain(|record| record.id != id);
        self.persist()
    }

    /// Moves a record to the target status. Any status may move to any
    /// other; an unknown identifier is ignored.
    pub fn move_status(&mut self, id: Uuid, to: FaqStatus) -> ServiceResult<()> {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.status = to;
            debug!(%id, ?to, "faq moved");
        }
        self.persist()
    }

    pub fn update_settings(&mut self, settings: FaqSettings) -> ServiceResult<()> {
        self.settings = settings;
        save_settings(&self.store, &self.settings)
    }

    fn persist(&self) -> ServiceResult<()> {
        save_records(&self.store, &self.records)
    }
}
