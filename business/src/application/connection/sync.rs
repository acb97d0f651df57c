use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::services::CompletionClientFactory;
use crate::domain::connection::model::{ConnectionState, ConnectionStatus, Credential};
use crate::domain::connection::resolver::{configure, resolve};
use crate::domain::connection::use_cases::sync::{SyncConnectionParams, SyncConnectionUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::repository::SessionRepository;

pub struct SyncConnectionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub factory: Arc<dyn CompletionClientFactory>,
    /// Process-wide default, read once from the environment at startup.
    pub default_credential: Credential,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SyncConnectionUseCase for SyncConnectionUseCaseImpl {
    async fn execute(&self, params: SyncConnectionParams) -> Result<ConnectionStatus, SessionError> {
        let session = self.repository.get(&params.session_id).await?;
        let mut session = session.lock().await;

        let needs_refresh = params.force_refresh || !session.connection().is_established();
        if !needs_refresh {
            self.logger.debug(&format!(
                "Reusing cached connection for session {}",
                params.session_id
            ));
            return Ok(session.connection().status());
        }

        self.logger.info(&format!(
            "Configuring completion client for session {} (forced: {})",
            params.session_id, params.force_refresh
        ));

        let credential = resolve(session.credential_override(), &self.default_credential);
        let state = ConnectionState::from(configure(self.factory.as_ref(), &credential));

        match &state {
            ConnectionState::Error(err) => self.logger.warn(&format!(
                "Connection for session {} not configured: {}",
                params.session_id,
                err.code()
            )),
            _ => self.logger.info(&format!(
                "Connection ready for session {}",
                params.session_id
            )),
        }

        session.set_connection(state);
        Ok(session.connection().status())
    }
}
