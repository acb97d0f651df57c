use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::model::ExchangeRecord;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::get_transcript::{
    GetTranscriptParams, GetTranscriptUseCase,
};

pub struct GetTranscriptUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTranscriptUseCase for GetTranscriptUseCaseImpl {
    async fn execute(
        &self,
        params: GetTranscriptParams,
    ) -> Result<Vec<ExchangeRecord>, SessionError> {
        let session = self.repository.get(&params.session_id).await?;
        let session = session.lock().await;

        self.logger.debug(&format!(
            "Fetched {} exchanges for session {}",
            session.transcript().len(),
            params.session_id
        ));
        Ok(session.transcript().newest_first().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::session::model::SessionContext;
    use crate::domain::session::repository::SharedSession;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;
    use tokio::sync::Mutex;

    mock! {
        pub SessionRepo {}

        #[async_trait]
        impl SessionRepository for SessionRepo {
            async fn create(&self, session: SessionContext) -> Result<SharedSession, RepositoryError>;
            async fn get(&self, id: &SessionId) -> Result<SharedSession, RepositoryError>;
            async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_exchanges_newest_first() {
        let mut context = SessionContext::new(SessionId::new("s-1"));
        context.record_exchange(ExchangeRecord::new("A", "a"));
        context.record_exchange(ExchangeRecord::new("B", "b"));
        context.record_exchange(ExchangeRecord::new("C", "c"));
        let session: SharedSession = Arc::new(Mutex::new(context));

        let mut repo = MockSessionRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Arc::clone(&session)));

        let use_case = GetTranscriptUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let records = use_case
            .execute(GetTranscriptParams {
                session_id: SessionId::new("s-1"),
            })
            .await
            .unwrap();

        let questions: Vec<&str> = records.iter().map(|r| r.question()).collect();
        assert_eq!(questions, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn should_return_empty_for_new_session() {
        let session: SharedSession = Arc::new(Mutex::new(SessionContext::new(SessionId::new("s-1"))));

        let mut repo = MockSessionRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Arc::clone(&session)));

        let use_case = GetTranscriptUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let records = use_case
            .execute(GetTranscriptParams {
                session_id: SessionId::new("s-1"),
            })
            .await
            .unwrap();

        assert!(records.is_empty());
    }
}
