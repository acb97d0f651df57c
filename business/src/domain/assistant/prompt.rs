use super::model::Tone;

const ROLE_INSTRUCTION: &str =
    "You are a smart assistant specialised in managing and recycling virus-contaminated waste.";
const SAFETY_INSTRUCTION: &str =
    "Follow safety procedures and health regulations, and give actionable guidance.";

/// Wraps a user question in the fixed instruction template.
///
/// Order: role, safety rules, tone, blank line, question. The question is
/// inserted exactly as typed.
pub fn build_prompt(tone: Tone, question: &str) -> String {
    format!(
        "{}\n{}\nRequested tone: {}.\n\nUser question: {}",
        ROLE_INSTRUCTION,
        SAFETY_INSTRUCTION,
        tone.label(),
        question
    )
}
