/// Shown when neither the session nor the environment supplies an API key.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "No API key found. Paste your key in the connection settings or set the GEMINI_API_KEY environment variable.";

/// Why the last configuration attempt did not produce a client handle.
///
/// The display text is shown to the user as-is: a fixed hint for a missing key,
/// or the underlying client error for a rejected one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{}", MISSING_CREDENTIAL_MESSAGE)]
    MissingCredential,
    #[error("{0}")]
    Rejected(String),
}

impl ConfigurationError {
    /// Code-style identifier for API error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigurationError::MissingCredential => "connection.missing_credential",
            ConfigurationError::Rejected(_) => "connection.rejected",
        }
    }
}
