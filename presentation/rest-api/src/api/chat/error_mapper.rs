use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::assistant::errors::ExchangeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ExchangeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ExchangeError::EmptyQuestion => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", "exchange.empty_question"),
            ),
            ExchangeError::NotConfigured(reason) if !reason.is_empty() => (
                StatusCode::CONFLICT,
                ErrorResponse::new("ConfigurationError", reason),
            ),
            ExchangeError::NotConfigured(_) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("ConfigurationError", "exchange.not_configured"),
            ),
            ExchangeError::CompletionFailed(details) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("CompletionError", details),
            ),
            ExchangeError::Session(err) => err.into_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::connection::errors::ConfigurationError;
    use business::domain::session::errors::SessionError;

    #[test]
    fn should_pass_completion_diagnostic_through_verbatim() {
        let (status, json) =
            ExchangeError::CompletionFailed("quota exceeded".to_string()).into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.message, "quota exceeded");
    }

    #[test]
    fn should_map_not_configured_to_conflict() {
        let (status, json) = ExchangeError::NotConfigured(String::new()).into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "exchange.not_configured");
    }

    #[test]
    fn should_surface_configuration_message_when_connection_failed() {
        let reason = ConfigurationError::MissingCredential.to_string();

        let (status, json) =
            ExchangeError::NotConfigured(reason.clone()).into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.name, "ConfigurationError");
        assert_eq!(json.0.message, reason);
    }

    #[test]
    fn should_delegate_session_errors() {
        let (status, json) =
            ExchangeError::Session(SessionError::NotFound).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "session.not_found");
    }
}
