use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::SessionContext;

/// A session guarded by its own lock. Holding the lock for an entire
/// interaction keeps one session's actions strictly sequential.
pub type SharedSession = Arc<Mutex<SessionContext>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: SessionContext) -> Result<SharedSession, RepositoryError>;
    async fn get(&self, id: &SessionId) -> Result<SharedSession, RepositoryError>;
    async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError>;
}
