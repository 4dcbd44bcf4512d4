use crate::services::{FaqRecord, FaqStatus};

/// Dashboard aggregates. `helpful_rate` is the percentage of helpful votes
/// across all published views combined, not a per-record average.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqTotals {
    pub total: usize,
    pub views: u64,
    pub helpful_rate: u64,
}

impl FaqTotals {
    pub fn from_records(records: &[FaqRecord]) -> Self {
        let mut views = 0u64;
        let mut helpful = 0u64;
        let mut published = 0usize;
        for record in records.iter().filter(|r| r.status == FaqStatus::Published) {
            views += record.views;
            helpful += record.helpful;
            published += 1;
        }
        let helpful_rate = if published == 0 {
            0
        } else {
            (helpful as f64 / views.max(1) as f64 * 100.0).round() as u64
        };
        Self {
            total: records.len(),
            views,
            helpful_rate,
        }
    }
}

/// Top five published records by view count. Ties keep collection order;
/// the sort is stable.
pub fn top_questions(records: &[FaqRecord]) -> Vec<&FaqRecord> {
    let mut published: Vec<&FaqRecord> = records
        .iter()
        .filter(|record| record.status == FaqStatus::Published)
        .collect();
    published.sort_by(|a, b| b.views.cmp(&a.views));
    published.truncate(5);
    published
}
