use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::session::use_cases::end::{EndSessionParams, EndSessionUseCase};
use business::domain::session::use_cases::get_transcript::{
    GetTranscriptParams, GetTranscriptUseCase,
};
use business::domain::session::use_cases::start::StartSessionUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::params::parse_session_id;
use crate::api::session::dto::{SessionResponse, TranscriptEntryResponse};
use crate::api::tags::ApiTags;

pub struct SessionApi {
    start_use_case: Arc<dyn StartSessionUseCase>,
    end_use_case: Arc<dyn EndSessionUseCase>,
    get_transcript_use_case: Arc<dyn GetTranscriptUseCase>,
}

impl SessionApi {
    pub fn new(
        start_use_case: Arc<dyn StartSessionUseCase>,
        end_use_case: Arc<dyn EndSessionUseCase>,
        get_transcript_use_case: Arc<dyn GetTranscriptUseCase>,
    ) -> Self {
        Self {
            start_use_case,
            end_use_case,
            get_transcript_use_case,
        }
    }
}

/// Session API
///
/// A session owns the credential override, the cached connection and the
/// transcript. Nothing is shared between sessions or kept after they end.
#[OpenApi]
impl SessionApi {
    /// Start a session
    #[oai(path = "/sessions", method = "post", tag = "ApiTags::Sessions")]
    async fn start(&self) -> StartSessionResponse {
        match self.start_use_case.execute().await {
            Ok(session) => StartSessionResponse::Created(Json((&session).into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                StartSessionResponse::InternalError(json)
            }
        }
    }

    /// End a session
    ///
    /// Drops the session together with its transcript and credential override.
    #[oai(path = "/sessions/:id", method = "delete", tag = "ApiTags::Sessions")]
    async fn end(&self, id: Path<String>) -> EndSessionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return EndSessionResponse::BadRequest(json),
        };

        match self
            .end_use_case
            .execute(EndSessionParams { session_id })
            .await
        {
            Ok(()) => EndSessionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => EndSessionResponse::NotFound(json),
                    _ => EndSessionResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the transcript
    ///
    /// Returns every exchange of the session, most recent first.
    #[oai(
        path = "/sessions/:id/transcript",
        method = "get",
        tag = "ApiTags::Sessions"
    )]
    async fn transcript(&self, id: Path<String>) -> GetTranscriptResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return GetTranscriptResponse::BadRequest(json),
        };

        match self
            .get_transcript_use_case
            .execute(GetTranscriptParams { session_id })
            .await
        {
            Ok(records) => GetTranscriptResponse::Ok(Json(TranscriptEntryResponse::numbered(records))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetTranscriptResponse::NotFound(json),
                    _ => GetTranscriptResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StartSessionResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EndSessionResponse {
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
pub enum GetTranscriptResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TranscriptEntryResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
