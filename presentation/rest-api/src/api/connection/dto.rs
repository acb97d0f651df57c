use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::connection::model::{ConnectionStateKind, ConnectionStatus};

#[derive(Clone, Object)]
pub struct SetCredentialRequest {
    /// API key for this session only. Omit or send null to fall back to the server default.
    #[oai(write_only, skip_serializing_if_is_none)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for SetCredentialRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetCredentialRequest")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Enum)]
pub enum ConnectionStateDto {
    #[oai(rename = "unconfigured")]
    Unconfigured,
    #[oai(rename = "ready")]
    Ready,
    #[oai(rename = "error")]
    Error,
}

impl From<ConnectionStateKind> for ConnectionStateDto {
    fn from(kind: ConnectionStateKind) -> Self {
        match kind {
            ConnectionStateKind::Unconfigured => ConnectionStateDto::Unconfigured,
            ConnectionStateKind::Ready => ConnectionStateDto::Ready,
            ConnectionStateKind::Error => ConnectionStateDto::Error,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ConnectionStatusResponse {
    /// Connection lifecycle state
    pub state: ConnectionStateDto,
    /// Whether questions can be asked right now
    pub ready: bool,
    /// Why the connection is not available; empty when ready
    pub message: String,
}

impl From<ConnectionStatus> for ConnectionStatusResponse {
    fn from(status: ConnectionStatus) -> Self {
        Self {
            ready: status.is_ready(),
            state: status.state.into(),
            message: status.message,
        }
    }
}
