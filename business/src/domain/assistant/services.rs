use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::connection::model::Credential;

use super::errors::CompletionError;

/// Client handle bound to a credential: text in, text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Service port for turning a credential into a client handle.
pub trait CompletionClientFactory: Send + Sync {
    fn connect(&self, credential: &Credential)
    -> Result<Arc<dyn CompletionClient>, CompletionError>;
}
