use async_trait::async_trait;

use crate::domain::assistant::errors::ExchangeError;
use crate::domain::assistant::model::{ExchangeRecord, Tone};
use crate::domain::shared::value_objects::SessionId;

pub struct AskQuestionParams {
    pub session_id: SessionId,
    pub question: String,
    /// `None` keeps the tone the session last selected.
    pub tone: Option<Tone>,
}

#[async_trait]
pub trait AskQuestionUseCase: Send + Sync {
    async fn execute(&self, params: AskQuestionParams) -> Result<ExchangeRecord, ExchangeError>;
}
