use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::connection::use_cases::set_credential::{
    SetCredentialParams, SetCredentialUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::repository::SessionRepository;

pub struct SetCredentialUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetCredentialUseCase for SetCredentialUseCaseImpl {
    async fn execute(&self, params: SetCredentialParams) -> Result<(), SessionError> {
        let session = self.repository.get(&params.session_id).await?;
        let mut session = session.lock().await;

        let cleared = params.api_key.is_none();
        session.set_credential_override(params.api_key);

        // The key itself is never logged.
        self.logger.info(&format!(
            "Credential override {} for session {}",
            if cleared { "cleared" } else { "updated" },
            params.session_id
        ));
        Ok(())
    }
}
