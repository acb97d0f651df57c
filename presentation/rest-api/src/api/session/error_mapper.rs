use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::session::errors::SessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SessionError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "session.not_found"),
            SessionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.storage_error",
            ),
        };

        (status, ErrorResponse::new(name, message))
    }
}
