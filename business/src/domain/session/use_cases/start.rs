use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::SessionContext;

#[async_trait]
pub trait StartSessionUseCase: Send + Sync {
    /// Returns a snapshot of the freshly stored session.
    async fn execute(&self) -> Result<SessionContext, SessionError>;
}
