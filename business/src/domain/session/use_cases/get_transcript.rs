use async_trait::async_trait;

use crate::domain::assistant::model::ExchangeRecord;
use crate::domain::session::errors::SessionError;
use crate::domain::shared::value_objects::SessionId;

pub struct GetTranscriptParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetTranscriptUseCase: Send + Sync {
    /// Returns the session's exchanges, newest first.
    async fn execute(&self, params: GetTranscriptParams)
    -> Result<Vec<ExchangeRecord>, SessionError>;
}
