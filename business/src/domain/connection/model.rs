use std::sync::Arc;

use crate::domain::assistant::services::CompletionClient;

use super::errors::ConfigurationError;

/// An API key. Always stored trimmed; never printed.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw key. Only adapters talking to the completion service should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "Credential(<empty>)")
        } else {
            write!(f, "Credential(<redacted>)")
        }
    }
}

/// Lifecycle of a session's connection to the completion service.
///
/// The client handle only exists inside `Ready`, so a handle is present
/// exactly when the last configuration attempt succeeded.
#[derive(Clone, Default)]
pub enum ConnectionState {
    #[default]
    Unconfigured,
    Ready(Arc<dyn CompletionClient>),
    Error(ConfigurationError),
}

impl ConnectionState {
    pub fn kind(&self) -> ConnectionStateKind {
        match self {
            ConnectionState::Unconfigured => ConnectionStateKind::Unconfigured,
            ConnectionState::Ready(_) => ConnectionStateKind::Ready,
            ConnectionState::Error(_) => ConnectionStateKind::Error,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ConnectionState::Ready(_))
    }

    /// True once any configuration attempt has been made in this session.
    pub fn is_established(&self) -> bool {
        !matches!(self, ConnectionState::Unconfigured)
    }

    pub fn handle(&self) -> Option<Arc<dyn CompletionClient>> {
        match self {
            ConnectionState::Ready(client) => Some(Arc::clone(client)),
            _ => None,
        }
    }

    /// Empty unless the last attempt failed.
    pub fn message(&self) -> String {
        match self {
            ConnectionState::Error(err) => err.to_string(),
            _ => String::new(),
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        ConnectionStatus {
            state: self.kind(),
            message: self.message(),
        }
    }
}

impl From<Result<Arc<dyn CompletionClient>, ConfigurationError>> for ConnectionState {
    fn from(result: Result<Arc<dyn CompletionClient>, ConfigurationError>) -> Self {
        match result {
            Ok(client) => ConnectionState::Ready(client),
            Err(err) => ConnectionState::Error(err),
        }
    }
}

impl std::fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Unconfigured => write!(f, "Unconfigured"),
            ConnectionState::Ready(_) => write!(f, "Ready(<client>)"),
            ConnectionState::Error(err) => f.debug_tuple("Error").field(err).finish(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStateKind {
    Unconfigured,
    Ready,
    Error,
}

impl std::fmt::Display for ConnectionStateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStateKind::Unconfigured => write!(f, "unconfigured"),
            ConnectionStateKind::Ready => write!(f, "ready"),
            ConnectionStateKind::Error => write!(f, "error"),
        }
    }
}

/// Display projection of a `ConnectionState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub state: ConnectionStateKind,
    pub message: String,
}

impl ConnectionStatus {
    pub fn is_ready(&self) -> bool {
        self.state == ConnectionStateKind::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_credential_on_creation() {
        let credential = Credential::new("  key-123\n");
        assert_eq!(credential.expose(), "key-123");
    }

    #[test]
    fn should_treat_whitespace_only_credential_as_empty() {
        assert!(Credential::new("   ").is_empty());
    }

    #[test]
    fn should_redact_credential_in_debug_output() {
        let credential = Credential::new("super-secret");
        let printed = format!("{:?}", credential);

        assert!(!printed.contains("super-secret"));
        assert_eq!(printed, "Credential(<redacted>)");
    }

    #[test]
    fn should_start_unconfigured_without_handle() {
        let state = ConnectionState::default();

        assert_eq!(state.kind(), ConnectionStateKind::Unconfigured);
        assert!(state.handle().is_none());
        assert!(!state.is_established());
        assert_eq!(state.message(), "");
    }

    #[test]
    fn should_expose_error_message_and_no_handle_when_failed() {
        let state = ConnectionState::from(Err(ConfigurationError::Rejected(
            "API key not valid".to_string(),
        )));

        assert_eq!(state.kind(), ConnectionStateKind::Error);
        assert!(state.handle().is_none());
        assert!(state.is_established());
        assert_eq!(state.status().message, "API key not valid");
    }
}
