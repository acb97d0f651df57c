use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::assistant::model::Tone;
use business::domain::assistant::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};
use business::domain::connection::use_cases::sync::{SyncConnectionParams, SyncConnectionUseCase};

use crate::api::chat::dto::{AskQuestionRequest, ExchangeResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::params::parse_session_id;
use crate::api::tags::ApiTags;

pub struct ChatApi {
    sync_use_case: Arc<dyn SyncConnectionUseCase>,
    ask_use_case: Arc<dyn AskQuestionUseCase>,
}

impl ChatApi {
    pub fn new(
        sync_use_case: Arc<dyn SyncConnectionUseCase>,
        ask_use_case: Arc<dyn AskQuestionUseCase>,
    ) -> Self {
        Self {
            sync_use_case,
            ask_use_case,
        }
    }
}

/// Chat API
///
/// Sends questions to the waste-handling assistant.
#[OpenApi]
impl ChatApi {
    /// Ask a question
    ///
    /// Wraps the question in the assistant's instruction template and sends it to
    /// the model. On success the exchange is appended to the session transcript;
    /// on failure the transcript is left untouched.
    #[oai(
        path = "/sessions/:id/questions",
        method = "post",
        tag = "ApiTags::Chat"
    )]
    async fn ask(&self, id: Path<String>, body: Json<AskQuestionRequest>) -> AskQuestionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return AskQuestionResponse::BadRequest(json),
        };

        // Opening the chat view establishes the connection once per session.
        // Readiness is checked again by the ask use case under the session lock.
        if let Err(err) = self
            .sync_use_case
            .execute(SyncConnectionParams {
                session_id: session_id.clone(),
                force_refresh: false,
            })
            .await
        {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                404 => AskQuestionResponse::NotFound(json),
                _ => AskQuestionResponse::InternalError(json),
            };
        }

        let params = AskQuestionParams {
            session_id,
            question: body.0.question,
            tone: body.0.tone.map(Tone::from),
        };

        match self.ask_use_case.execute(params).await {
            Ok(record) => AskQuestionResponse::Created(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AskQuestionResponse::BadRequest(json),
                    404 => AskQuestionResponse::NotFound(json),
                    409 => AskQuestionResponse::Conflict(json),
                    502 => AskQuestionResponse::BadGateway(json),
                    _ => AskQuestionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AskQuestionResponse {
    #[oai(status = 201)]
    Created(Json<ExchangeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// The session has no working connection; the message says why.
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    /// The completion service failed; the message is its diagnostic.
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
