use std::sync::Arc;

use crate::domain::assistant::services::{CompletionClient, CompletionClientFactory};

use super::errors::ConfigurationError;
use super::model::Credential;

/// Picks the credential for a session: the trimmed session override when it is
/// non-empty, otherwise the trimmed environment default. May be empty.
pub fn resolve(session_override: Option<&str>, env_default: &Credential) -> Credential {
    let from_session = Credential::new(session_override.unwrap_or_default());
    if !from_session.is_empty() {
        return from_session;
    }
    Credential::new(env_default.expose())
}

/// Builds a client handle for `credential`. Failures are returned, never raised.
pub fn configure(
    factory: &dyn CompletionClientFactory,
    credential: &Credential,
) -> Result<Arc<dyn CompletionClient>, ConfigurationError> {
    if credential.is_empty() {
        return Err(ConfigurationError::MissingCredential);
    }

    factory
        .connect(credential)
        .map_err(|err| ConfigurationError::Rejected(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::errors::CompletionError;
    use crate::domain::connection::errors::MISSING_CREDENTIAL_MESSAGE;
    use crate::domain::connection::model::ConnectionState;
    use async_trait::async_trait;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub Factory {}

        impl CompletionClientFactory for Factory {
            fn connect(&self, credential: &Credential) -> Result<Arc<dyn CompletionClient>, CompletionError>;
        }
    }

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            Ok(prompt.to_string())
        }
    }

    #[test]
    fn should_use_env_default_when_no_override() {
        let resolved = resolve(None, &Credential::new("ENV123"));
        assert_eq!(resolved.expose(), "ENV123");
    }

    #[test]
    fn should_prefer_trimmed_session_override() {
        let resolved = resolve(Some(" USER456 "), &Credential::new("ENV123"));
        assert_eq!(resolved.expose(), "USER456");
    }

    #[test]
    fn should_fall_back_when_override_is_blank() {
        let resolved = resolve(Some("   "), &Credential::new("ENV123"));
        assert_eq!(resolved.expose(), "ENV123");
    }

    #[test]
    fn should_resolve_empty_when_nothing_supplied() {
        let resolved = resolve(None, &Credential::empty());
        assert!(resolved.is_empty());
    }

    #[test]
    fn should_fail_with_fixed_message_when_credential_empty() {
        let factory = MockFactory::new();

        let result = configure(&factory, &Credential::empty());

        let err = result.err().unwrap();
        assert_eq!(err, ConfigurationError::MissingCredential);
        assert_eq!(err.to_string(), MISSING_CREDENTIAL_MESSAGE);
    }

    #[test]
    fn should_return_ready_handle_when_factory_accepts() {
        let mut factory = MockFactory::new();
        factory
            .expect_connect()
            .withf(|c| c.expose() == "valid-key")
            .times(1)
            .returning(|_| Ok(Arc::new(EchoClient) as Arc<dyn CompletionClient>));

        let state = ConnectionState::from(configure(&factory, &Credential::new("valid-key")));

        assert!(state.is_ready());
        assert!(state.handle().is_some());
        assert_eq!(state.message(), "");
    }

    #[test]
    fn should_surface_factory_error_text_when_rejected() {
        let mut factory = MockFactory::new();
        factory
            .expect_connect()
            .returning(|_| Err(CompletionError::InvalidCredential("bad header".to_string())));

        let state = ConnectionState::from(configure(&factory, &Credential::new("bad\nkey")));

        assert!(!state.is_ready());
        assert!(state.handle().is_none());
        assert!(!state.message().is_empty());
        assert!(state.message().contains("bad header"));
    }

    proptest! {
        #[test]
        fn resolve_prefers_non_blank_session_value(
            session in proptest::option::of("[ \\t]{0,3}[a-zA-Z0-9]{0,12}[ \\t]{0,3}"),
            env in "[ \\t]{0,3}[a-zA-Z0-9]{0,12}[ \\t]{0,3}",
        ) {
            let resolved = resolve(session.as_deref(), &Credential::new(&env));
            let trimmed_session = session.as_deref().map(str::trim).unwrap_or("");

            if !trimmed_session.is_empty() {
                prop_assert_eq!(resolved.expose(), trimmed_session);
            } else {
                prop_assert_eq!(resolved.expose(), env.trim());
            }
        }
    }
}
