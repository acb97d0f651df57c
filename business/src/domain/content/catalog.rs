//! Fixed copy for the informational views.

use crate::domain::assistant::model::Tone;

use super::model::{
    ChatContent, DocumentTemplate, GuidanceContent, GuideSection, HomeContent, Metric,
    ResourceCard,
};

pub fn home() -> HomeContent {
    HomeContent {
        headline: "Welcome to SmartWaste",
        subtitle: "A smart app focused on managing and recycling virus-contaminated waste in safe and sustainable ways.",
        metrics: vec![
            Metric {
                label: "Possible infection reduction",
                value: "85%",
                delta: "+ safety",
            },
            Metric {
                label: "Sterilisation time",
                value: "15 minutes",
                delta: "average",
            },
            Metric {
                label: "Recycled materials",
                value: "12 t/year",
                delta: "estimated",
            },
        ],
        resources: vec![
            ResourceCard {
                title: "Biological waste disposal",
                body: "Sterilise virus-contaminated materials with pressurised steam before moving them to safe incinerators.",
            },
            ResourceCard {
                title: "Chemical sorting",
                body: "Keep sharps and separated solutions in rigid, tightly sealed containers with clear labels.",
            },
            ResourceCard {
                title: "Safe recycling",
                body: "Uncontaminated plastics and lab tools can be washed, sterilised and recycled through a separate stream.",
            },
        ],
        checklist: vec![
            "Wear gloves and a mask before handling waste.",
            "Isolate contaminated tools in double-thickness red bags.",
            "Make sure containers are tightly closed before transport.",
            "Record the waste source and sterilisation date.",
        ],
    }
}

pub fn guidance() -> GuidanceContent {
    GuidanceContent {
        intro: "This guide covers practical steps for managing virus-contaminated waste in laboratories and health centres.",
        sections: vec![
            GuideSection {
                title: "Sterilisation and preparation before transport",
                body: "Use an autoclave at 121°C for at least 15 minutes, and attach a label showing the sterilisation date and the supervisor's name.",
            },
            GuideSection {
                title: "Transport and tracking",
                body: "Move containers in rigid, leak-proof boxes with a shipping document stating the waste's origin and destination.",
            },
            GuideSection {
                title: "Temporary storage",
                body: "Keep packed waste in a cool, shaded place away from heavy traffic, for no longer than 48 hours.",
            },
            GuideSection {
                title: "Recycling and disposal",
                body: "After sterilisation, metals and non-biodegradable plastics can be recycled through a separate stream; non-recyclable waste is incinerated or safely landfilled.",
            },
        ],
        templates_intro: "Download or copy the templates below to document waste flows: an intake log, a sterilisation record, and a transport tracking form.",
        templates: vec![
            DocumentTemplate {
                name: "Intake log",
                fields: vec!["Date", "Source", "Waste type", "Quantity", "Responsible"],
            },
            DocumentTemplate {
                name: "Sterilisation record",
                fields: vec!["Date", "Method", "Duration", "Temperature", "Supervisor"],
            },
            DocumentTemplate {
                name: "Transport tracking",
                fields: vec![
                    "Date",
                    "Destination",
                    "Transport",
                    "Container condition",
                    "Signature",
                ],
            },
        ],
    }
}

pub fn chat() -> ChatContent {
    ChatContent {
        intro: "Ask the assistant to suggest safe steps for disposal or recycling.",
        presets: vec![
            "How do I sterilise virus-contaminated lab tools before disposing of them?",
            "A waste management plan for a small health centre.",
            "Materials from biological waste that can be recycled after sterilisation.",
        ],
        question_placeholder: "Example: What is the best way to transport virus-contaminated samples safely?",
        tones: Tone::ALL.to_vec(),
        default_tone: Tone::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_provide_three_metrics_and_cards() {
        let home = home();

        assert_eq!(home.metrics.len(), 3);
        assert_eq!(home.resources.len(), 3);
        assert_eq!(home.checklist.len(), 4);
    }

    #[test]
    fn should_provide_four_guide_sections_and_three_templates() {
        let guidance = guidance();

        assert_eq!(guidance.sections.len(), 4);
        assert_eq!(guidance.templates.len(), 3);
        assert!(guidance.templates.iter().all(|t| t.fields.len() == 5));
    }

    #[test]
    fn should_default_chat_tone_to_step_list() {
        let chat = chat();

        assert_eq!(chat.presets.len(), 3);
        assert_eq!(chat.tones, vec![Tone::Brief, Tone::Instructional, Tone::StepList]);
        assert_eq!(chat.default_tone, Tone::StepList);
    }
}
