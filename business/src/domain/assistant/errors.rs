use crate::domain::session::errors::SessionError;

/// Failure reported by a completion client. The display text is surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("invalid API key: {0}")]
    InvalidCredential(String),
    #[error("{0}")]
    Transport(String),
    #[error("completion service error ({status}): {body}")]
    Service { status: u16, body: String },
    #[error("the completion service returned no text")]
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("exchange.empty_question")]
    EmptyQuestion,
    /// Carries the connection's failure message, empty when it was never configured.
    #[error("exchange.not_configured")]
    NotConfigured(String),
    #[error("{0}")]
    CompletionFailed(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}
