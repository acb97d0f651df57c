use std::sync::Arc;

use business::domain::assistant::errors::CompletionError;
use business::domain::assistant::services::{CompletionClient, CompletionClientFactory};
use business::domain::connection::model::Credential;

use crate::client::{GeminiClient, GeminiSettings};
use crate::completion_client::GeminiCompletionClient;

/// Builds one Gemini client per configured session.
pub struct GeminiClientFactory {
    settings: GeminiSettings,
}

impl GeminiClientFactory {
    pub fn new(settings: GeminiSettings) -> Self {
        Self { settings }
    }
}

impl CompletionClientFactory for GeminiClientFactory {
    fn connect(
        &self,
        credential: &Credential,
    ) -> Result<Arc<dyn CompletionClient>, CompletionError> {
        let client = GeminiClient::new(credential.expose(), &self.settings)?;
        Ok(Arc::new(GeminiCompletionClient::new(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_client_for_well_formed_key() {
        let factory = GeminiClientFactory::new(GeminiSettings::default());

        assert!(factory.connect(&Credential::new("AIza-test-key")).is_ok());
    }

    #[test]
    fn should_reject_malformed_key_with_readable_message() {
        let factory = GeminiClientFactory::new(GeminiSettings::default());

        let err = factory
            .connect(&Credential::new("key\u{7f}with-control"))
            .err()
            .unwrap();

        assert!(err.to_string().starts_with("invalid API key"));
    }
}
