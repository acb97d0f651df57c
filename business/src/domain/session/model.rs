use chrono::{DateTime, Utc};

use crate::domain::assistant::model::{ExchangeRecord, Tone, Transcript};
use crate::domain::connection::model::ConnectionState;
use crate::domain::shared::value_objects::SessionId;

/// Everything one session owns. Nothing here is shared with other sessions.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: SessionId,
    credential_override: Option<String>,
    connection: ConnectionState,
    transcript: Transcript,
    tone: Tone,
    created_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            credential_override: None,
            connection: ConnectionState::Unconfigured,
            transcript: Transcript::new(),
            tone: Tone::default(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn credential_override(&self) -> Option<&str> {
        self.credential_override.as_deref()
    }

    /// Stores the raw value typed into the masked field. Trimming happens at resolve time.
    pub fn set_credential_override(&mut self, value: Option<String>) {
        self.credential_override = value;
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn set_connection(&mut self, state: ConnectionState) {
        self.connection = state;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn record_exchange(&mut self, record: ExchangeRecord) {
        self.transcript.append(record);
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn select_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::connection::model::ConnectionStateKind;

    #[test]
    fn should_start_unconfigured_with_empty_transcript() {
        let session = SessionContext::new(SessionId::new("s-1"));

        assert_eq!(session.connection().kind(), ConnectionStateKind::Unconfigured);
        assert!(session.transcript().is_empty());
        assert!(session.credential_override().is_none());
        assert_eq!(session.tone(), Tone::StepList);
    }

    #[test]
    fn should_append_exchanges_in_order() {
        let mut session = SessionContext::new(SessionId::new("s-1"));
        session.record_exchange(ExchangeRecord::new("first", "1"));
        session.record_exchange(ExchangeRecord::new("second", "2"));

        let questions: Vec<&str> = session
            .transcript()
            .chronological()
            .iter()
            .map(|r| r.question())
            .collect();
        assert_eq!(questions, vec!["first", "second"]);
    }
}
