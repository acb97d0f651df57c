use std::time::Duration;

use business::domain::connection::model::Credential;
use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiSettings};

/// Configuration for Gemini API access.
///
/// Environment variables:
/// - GEMINI_API_KEY: default credential for sessions without their own key (optional)
/// - GEMINI_MODEL: model name (default: "gemini-2.5-flash")
/// - GEMINI_BASE_URL: API root (default: "https://generativelanguage.googleapis.com/v1beta")
/// - GEMINI_TIMEOUT_SECS: request timeout in seconds (default: none)
pub struct GeminiConfig {
    pub default_credential: Credential,
    pub settings: GeminiSettings,
}

impl GeminiConfig {
    /// Read once at startup; later changes to the environment are not observed.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_credential = Credential::new(lookup("GEMINI_API_KEY").unwrap_or_default());
        if default_credential.is_empty() {
            tracing::warn!("GEMINI_API_KEY not set; sessions must supply their own key");
        }

        let timeout = lookup("GEMINI_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                tracing::warn!("Ignoring invalid GEMINI_TIMEOUT_SECS value: {raw}");
                None
            }
        });

        Self {
            default_credential,
            settings: GeminiSettings {
                base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                timeout,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> GeminiConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GeminiConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn should_use_defaults_when_nothing_set() {
        let config = config_from(&[]);

        assert!(config.default_credential.is_empty());
        assert_eq!(config.settings.model, "gemini-2.5-flash");
        assert_eq!(config.settings.base_url, DEFAULT_BASE_URL);
        assert!(config.settings.timeout.is_none());
    }

    #[test]
    fn should_trim_default_credential() {
        let config = config_from(&[("GEMINI_API_KEY", "  ENV123 \n")]);

        assert_eq!(config.default_credential.expose(), "ENV123");
    }

    #[test]
    fn should_read_overrides() {
        let config = config_from(&[
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_BASE_URL", "http://localhost:8089"),
            ("GEMINI_TIMEOUT_SECS", "45"),
        ]);

        assert_eq!(config.settings.model, "gemini-2.0-flash");
        assert_eq!(config.settings.base_url, "http://localhost:8089");
        assert_eq!(config.settings.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn should_ignore_unparsable_timeout() {
        let config = config_from(&[("GEMINI_TIMEOUT_SECS", "soon")]);

        assert!(config.settings.timeout.is_none());
    }
}
