use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::assistant::model::{ExchangeRecord, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum ToneDto {
    #[oai(rename = "brief")]
    Brief,
    #[oai(rename = "instructional")]
    Instructional,
    #[oai(rename = "step_list")]
    StepList,
}

impl From<ToneDto> for Tone {
    fn from(t: ToneDto) -> Self {
        match t {
            ToneDto::Brief => Tone::Brief,
            ToneDto::Instructional => Tone::Instructional,
            ToneDto::StepList => Tone::StepList,
        }
    }
}

impl From<Tone> for ToneDto {
    fn from(t: Tone) -> Self {
        match t {
            Tone::Brief => ToneDto::Brief,
            Tone::Instructional => ToneDto::Instructional,
            Tone::StepList => ToneDto::StepList,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AskQuestionRequest {
    /// Free-text question (cannot be blank)
    pub question: String,
    /// Preferred answer style; omitted keeps the session's last choice (initially step_list)
    #[oai(skip_serializing_if_is_none)]
    pub tone: Option<ToneDto>,
}

#[derive(Debug, Clone, Object)]
pub struct ExchangeResponse {
    /// Question exactly as submitted
    pub question: String,
    /// Model answer
    pub answer: String,
    /// When the question was answered
    pub asked_at: DateTime<Utc>,
}

impl From<ExchangeRecord> for ExchangeResponse {
    fn from(record: ExchangeRecord) -> Self {
        Self {
            question: record.question().to_string(),
            answer: record.answer().to_string(),
            asked_at: record.asked_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_tone_both_ways() {
        for tone in Tone::ALL {
            let dto: ToneDto = tone.into();
            assert_eq!(Tone::from(dto), tone);
        }
    }
}
