use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::assistant::model::ExchangeRecord;
use business::domain::session::model::SessionContext;

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    /// Session identifier to use in every other call
    pub id: String,
    /// When the session was opened
    pub created_at: DateTime<Utc>,
}

impl From<&SessionContext> for SessionResponse {
    fn from(session: &SessionContext) -> Self {
        Self {
            id: session.id().as_str().to_string(),
            created_at: session.created_at(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TranscriptEntryResponse {
    /// Position in display order, starting at 1 for the most recent exchange
    pub index: u32,
    /// Question exactly as submitted
    pub question: String,
    /// Model answer
    pub answer: String,
    /// When the question was answered
    pub asked_at: DateTime<Utc>,
}

impl TranscriptEntryResponse {
    /// Numbers records that are already in newest-first order.
    pub fn numbered(records: Vec<ExchangeRecord>) -> Vec<Self> {
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Self {
                index: i as u32 + 1,
                question: record.question().to_string(),
                answer: record.answer().to_string(),
                asked_at: record.asked_at(),
            })
            .collect()
    }
}
