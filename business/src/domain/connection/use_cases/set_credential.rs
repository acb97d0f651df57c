use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::shared::value_objects::SessionId;

pub struct SetCredentialParams {
    pub session_id: SessionId,
    /// `None` clears the override.
    pub api_key: Option<String>,
}

#[async_trait]
pub trait SetCredentialUseCase: Send + Sync {
    async fn execute(&self, params: SetCredentialParams) -> Result<(), SessionError>;
}
