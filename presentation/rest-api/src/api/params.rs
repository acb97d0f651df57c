use poem_openapi::payload::Json;
use uuid::Uuid;

use business::domain::shared::value_objects::SessionId;

use crate::api::error::ErrorResponse;

/// Session ids are issued as UUIDs; anything else is rejected before touching the store.
pub fn parse_session_id(raw: &str) -> Result<SessionId, Json<ErrorResponse>> {
    Uuid::parse_str(raw)
        .map(|uuid| SessionId::new(uuid.to_string()))
        .map_err(|_| ErrorResponse::new("ValidationError", "session.invalid_id"))
}
