use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::SessionContext;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::start::StartSessionUseCase;
use crate::domain::shared::value_objects::SessionId;

pub struct StartSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl StartSessionUseCase for StartSessionUseCaseImpl {
    async fn execute(&self) -> Result<SessionContext, SessionError> {
        let shared = self
            .repository
            .create(SessionContext::new(SessionId::generate()))
            .await?;
        let session = shared.lock().await.clone();

        self.logger.info(&format!("Session started: {}", session.id()));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::session::repository::SharedSession;
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
    async fn should_create_fresh_unconfigured_session() {
        let mut repo = MockSessionRepo::new();
        repo.expect_create()
            .withf(|session| {
                session.transcript().is_empty() && !session.connection().is_established()
            })
            .times(1)
            .returning(|session| Ok(Arc::new(Mutex::new(session))));

        let use_case = StartSessionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let before = chrono::Utc::now();
        let session = use_case.execute().await.unwrap();

        assert!(!session.id().as_str().is_empty());
        assert!(session.created_at() >= before);
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let mut repo = MockSessionRepo::new();
        repo.expect_create()
            .returning(|_| Err(RepositoryError::StorageError));

        let use_case = StartSessionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            SessionError::Repository(RepositoryError::StorageError)
        ));
    }
}
