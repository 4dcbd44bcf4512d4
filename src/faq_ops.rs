use crate::services::{FaqError, FaqRecord, FaqStatus, ServiceResult};
use chrono::Utc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct FaqOptions {
    pub question: String,
    pub answer: String,
    pub tags: String,
    pub status: FaqStatus,
}

impl Default for FaqOptions {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            tags: String::new(),
            status: FaqStatus::Draft,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EditOptions {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub tags: String,
}

/// Splits comma-separated tag text, trimming whitespace and dropping empty
/// segments: `"a, b ,, c"` becomes `["a", "b", "c"]`.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds a fresh record from dialog input: trimmed text, parsed tags, zero
/// counters, new identifier, current timestamp.
pub fn build_faq(options: &FaqOptions) -> ServiceResult<FaqRecord> {
    let question = options.question.trim();
    if question.is_empty() {
        return Err(FaqError::Validation("question_required".into()));
    }
    let answer = options.answer.trim();
    if answer.is_empty() {
        return Err(FaqError::Validation("answer_required".into()));
    }

    Ok(FaqRecord {
        id: Uuid::new_v4(),
        question: question.to_string(),
        answer: answer.to_string(),
        tags: parse_tags(&options.tags),
        views: 0,
        helpful: 0,
        status: options.status,
        created_at: Utc::now(),
    })
}

/// Replaces a record's editable fields; identifier, counters, status, and
/// timestamp stay untouched.
pub fn apply_edit(record: &mut FaqRecord, options: &EditOptions) {
    record.question = options.question.trim().to_string();
    record.answer = options.answer.trim().to_string();
    record.tags = parse_tags(&options.tags);
}

/// Case-insensitive substring match over question, answer, and tags. The
/// query must already be lowercased; an empty query matches everything.
pub fn matches_query(record: &FaqRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.question.to_lowercase().contains(query)
        || record.answer.to_lowercase().contains(query)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}
