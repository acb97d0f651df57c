use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::end::{EndSessionParams, EndSessionUseCase};

pub struct EndSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EndSessionUseCase for EndSessionUseCaseImpl {
    async fn execute(&self, params: EndSessionParams) -> Result<(), SessionError> {
        self.repository.delete(&params.session_id).await?;

        self.logger
            .info(&format!("Session ended: {}", params.session_id));
        Ok(())
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
    async fn should_delete_session() {
        let mut repo = MockSessionRepo::new();
        repo.expect_delete()
            .withf(|id| id.as_str() == "session-1")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = EndSessionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(EndSessionParams {
                session_id: SessionId::new("session-1"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_session_unknown() {
        let mut repo = MockSessionRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = EndSessionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(EndSessionParams {
                session_id: SessionId::new("missing"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), SessionError::NotFound));
    }
}
