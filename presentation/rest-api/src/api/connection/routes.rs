use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::connection::use_cases::set_credential::{
    SetCredentialParams, SetCredentialUseCase,
};
use business::domain::connection::use_cases::sync::{SyncConnectionParams, SyncConnectionUseCase};
use business::domain::shared::value_objects::SessionId;

use crate::api::connection::dto::{ConnectionStatusResponse, SetCredentialRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::params::parse_session_id;
use crate::api::tags::ApiTags;

pub struct ConnectionApi {
    set_credential_use_case: Arc<dyn SetCredentialUseCase>,
    sync_use_case: Arc<dyn SyncConnectionUseCase>,
}

impl ConnectionApi {
    pub fn new(
        set_credential_use_case: Arc<dyn SetCredentialUseCase>,
        sync_use_case: Arc<dyn SyncConnectionUseCase>,
    ) -> Self {
        Self {
            set_credential_use_case,
            sync_use_case,
        }
    }

    async fn sync(&self, session_id: SessionId, force_refresh: bool) -> ConnectionStatusResult {
        match self
            .sync_use_case
            .execute(SyncConnectionParams {
                session_id,
                force_refresh,
            })
            .await
        {
            Ok(status) => ConnectionStatusResult::Ok(Json(status.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ConnectionStatusResult::NotFound(json),
                    _ => ConnectionStatusResult::InternalError(json),
                }
            }
        }
    }
}

/// Connection API
///
/// Manages the session's API key and its connection to the completion service.
#[OpenApi]
impl ConnectionApi {
    /// Set the session API key
    ///
    /// Stores the key for this session only; it is never persisted or returned.
    /// Call the refresh endpoint afterwards to apply it.
    #[oai(
        path = "/sessions/:id/credential",
        method = "put",
        tag = "ApiTags::Connection"
    )]
    async fn set_credential(
        &self,
        id: Path<String>,
        body: Json<SetCredentialRequest>,
    ) -> SetCredentialResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return SetCredentialResponse::BadRequest(json),
        };

        match self
            .set_credential_use_case
            .execute(SetCredentialParams {
                session_id,
                api_key: body.0.api_key,
            })
            .await
        {
            Ok(()) => SetCredentialResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SetCredentialResponse::NotFound(json),
                    _ => SetCredentialResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the connection status
    ///
    /// Configures the connection on first use; afterwards returns the cached state.
    #[oai(
        path = "/sessions/:id/connection",
        method = "get",
        tag = "ApiTags::Connection"
    )]
    async fn status(&self, id: Path<String>) -> ConnectionStatusResult {
        match parse_session_id(&id.0) {
            Ok(session_id) => self.sync(session_id, false).await,
            Err(json) => ConnectionStatusResult::BadRequest(json),
        }
    }

    /// Refresh the connection
    ///
    /// Re-resolves the API key and rebuilds the client, replacing the cached state.
    #[oai(
        path = "/sessions/:id/connection/refresh",
        method = "post",
        tag = "ApiTags::Connection"
    )]
    async fn refresh(&self, id: Path<String>) -> ConnectionStatusResult {
        match parse_session_id(&id.0) {
            Ok(session_id) => self.sync(session_id, true).await,
            Err(json) => ConnectionStatusResult::BadRequest(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetCredentialResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConnectionStatusResult {
    #[oai(status = 200)]
    Ok(Json<ConnectionStatusResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
