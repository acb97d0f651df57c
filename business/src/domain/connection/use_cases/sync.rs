use async_trait::async_trait;

use crate::domain::connection::model::ConnectionStatus;
use crate::domain::session::errors::SessionError;
use crate::domain::shared::value_objects::SessionId;

pub struct SyncConnectionParams {
    pub session_id: SessionId,
    pub force_refresh: bool,
}

/// Re-evaluates the session's connection when forced or never attempted;
/// otherwise reports the cached state without touching the completion service.
#[async_trait]
pub trait SyncConnectionUseCase: Send + Sync {
    async fn execute(&self, params: SyncConnectionParams) -> Result<ConnectionStatus, SessionError>;
}
