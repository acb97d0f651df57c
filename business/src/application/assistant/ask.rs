use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::errors::ExchangeError;
use crate::domain::assistant::model::ExchangeRecord;
use crate::domain::assistant::prompt::build_prompt;
use crate::domain::assistant::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::repository::SessionRepository;

pub struct AskQuestionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AskQuestionUseCase for AskQuestionUseCaseImpl {
    async fn execute(&self, params: AskQuestionParams) -> Result<ExchangeRecord, ExchangeError> {
        let session = self
            .repository
            .get(&params.session_id)
            .await
            .map_err(SessionError::from)?;
        let mut session = session.lock().await;
        let tone = match params.tone {
            Some(tone) => {
                session.select_tone(tone);
                tone
            }
            None => session.tone(),
        };

        if params.question.trim().is_empty() {
            return Err(ExchangeError::EmptyQuestion);
        }

        let client = session
            .connection()
            .handle()
            .ok_or_else(|| ExchangeError::NotConfigured(session.connection().message()))?;

        self.logger.info(&format!(
            "Sending question for session {} (tone: {})",
            params.session_id, tone
        ));

        let prompt = build_prompt(tone, &params.question);
        let answer = match client.complete(&prompt).await {
            Ok(answer) => answer,
            Err(err) => {
                self.logger.error(&format!(
                    "Completion failed for session {}: {}",
                    params.session_id, err
                ));
                return Err(ExchangeError::CompletionFailed(err.to_string()));
            }
        };

        let record = ExchangeRecord::new(params.question, answer);
        session.record_exchange(record.clone());

        self.logger.info(&format!(
            "Exchange recorded for session {} ({} total)",
            params.session_id,
            session.transcript().len()
        ));
        Ok(record)
    }
}
