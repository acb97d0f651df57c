use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::assistant::errors::CompletionError;
use business::domain::assistant::services::CompletionClient;

use crate::client::GeminiClient;

pub struct GeminiCompletionClient {
    client: GeminiClient,
}

impl GeminiCompletionClient {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_body(prompt: &str) -> Value {
        json!({
            "contents": [
                {"role": "user", "parts": [{"text": prompt}]}
            ]
        })
    }

    /// Concatenates the text parts of the first candidate. A candidate with an
    /// empty string is a valid answer; no text part at all is not.
    fn extract_text(data: &Value) -> Result<String, CompletionError> {
        let parts = data
            .pointer("/candidates/0/content/parts")
            .and_then(|p| p.as_array())
            .ok_or(CompletionError::EmptyResponse)?;

        let texts: Vec<&str> = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();

        if texts.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(texts.concat())
    }
}

#[async_trait]
impl CompletionClient for GeminiCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .json(&Self::build_body(prompt))
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        Self::extract_text(&data)
    }
}
