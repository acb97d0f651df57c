use chrono::{DateTime, Utc};

/// Answer style requested from the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Brief,
    Instructional,
    #[default]
    StepList,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Brief, Tone::Instructional, Tone::StepList];

    /// Human-readable wording used inside the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Brief => "brief",
            Tone::Instructional => "instructional",
            Tone::StepList => "step-by-step list",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Brief => write!(f, "brief"),
            Tone::Instructional => write!(f, "instructional"),
            Tone::StepList => write!(f, "step_list"),
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brief" => Ok(Tone::Brief),
            "instructional" => Ok(Tone::Instructional),
            "step_list" => Ok(Tone::StepList),
            _ => Err(format!("Invalid tone: {}", s)),
        }
    }
}

/// One question and the answer it received. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRecord {
    question: String,
    answer: String,
    asked_at: DateTime<Utc>,
}

impl ExchangeRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            asked_at: Utc::now(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn asked_at(&self) -> DateTime<Utc> {
        self.asked_at
    }
}

/// Append-only exchange log, stored oldest first.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    records: Vec<ExchangeRecord>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ExchangeRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn chronological(&self) -> &[ExchangeRecord] {
        &self.records
    }

    /// Display order.
    pub fn newest_first(&self) -> impl Iterator<Item = &ExchangeRecord> {
        self.records.iter().rev()
    }
}
