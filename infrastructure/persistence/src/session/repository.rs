use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use business::domain::errors::RepositoryError;
use business::domain::session::model::SessionContext;
use business::domain::session::repository::{SessionRepository, SharedSession};
use business::domain::shared::value_objects::SessionId;

/// Process-memory session store. Sessions vanish on delete or restart.
///
/// The map lock is only held to look up, insert, or remove an entry; callers
/// lock the individual session for the duration of an interaction.
#[derive(Default)]
pub struct SessionRepositoryInMemory {
    sessions: RwLock<HashMap<SessionId, SharedSession>>,
}

impl SessionRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryInMemory {
    async fn create(&self, session: SessionContext) -> Result<SharedSession, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(RepositoryError::Duplicated);
        }

        let id = session.id().clone();
        let shared = Arc::new(Mutex::new(session));
        sessions.insert(id.clone(), Arc::clone(&shared));

        tracing::debug!(session_id = %id, total = sessions.len(), "session stored");
        Ok(shared)
    }

    async fn get(&self, id: &SessionId) -> Result<SharedSession, RepositoryError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let removed = self.sessions.write().await.remove(id);
        match removed {
            Some(_) => {
                tracing::debug!(session_id = %id, "session removed");
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}
