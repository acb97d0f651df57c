use crate::domain::assistant::model::Tone;

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// Landing view.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeContent {
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub metrics: Vec<Metric>,
    pub resources: Vec<ResourceCard>,
    pub checklist: Vec<&'static str>,
}

/// One collapsible section of the safety guide.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideSection {
    pub title: &'static str,
    pub body: &'static str,
}

/// A record-keeping template; `fields` are the column headings.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTemplate {
    pub name: &'static str,
    pub fields: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuidanceContent {
    pub intro: &'static str,
    pub sections: Vec<GuideSection>,
    pub templates_intro: &'static str,
    pub templates: Vec<DocumentTemplate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatContent {
    pub intro: &'static str,
    pub presets: Vec<&'static str>,
    pub question_placeholder: &'static str,
    pub tones: Vec<Tone>,
    pub default_tone: Tone,
}
