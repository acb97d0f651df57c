use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use business::domain::assistant::errors::CompletionError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Settings shared by every client the factory builds.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    /// `None` leaves the request timeout to reqwest's defaults.
    pub timeout: Option<Duration>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

/// Gemini HTTP client bound to a single API key.
pub struct GeminiClient {
    pub client: Client,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    /// Fails when the key cannot be sent as a header or the HTTP client cannot be built.
    pub fn new(api_key: &str, settings: &GeminiSettings) -> Result<Self, CompletionError> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| CompletionError::InvalidCredential(e.to_string()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_generate_content_url() {
        let settings = GeminiSettings {
            base_url: "http://localhost:9999/v1beta/".to_string(),
            ..GeminiSettings::default()
        };

        let client = GeminiClient::new("key-123", &settings).unwrap();

        assert_eq!(
            client.generate_content_url(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn should_reject_key_that_cannot_be_sent_as_header() {
        let result = GeminiClient::new("bad\nkey", &GeminiSettings::default());

        assert!(matches!(
            result.err(),
            Some(CompletionError::InvalidCredential(_))
        ));
    }
}
