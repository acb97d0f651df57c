use poem_openapi::Object;

use business::domain::content::model::{
    ChatContent, DocumentTemplate, GuidanceContent, GuideSection, HomeContent, Metric,
    ResourceCard,
};

use crate::api::chat::dto::ToneDto;

#[derive(Debug, Clone, Object)]
pub struct MetricResponse {
    pub label: String,
    pub value: String,
    pub delta: String,
}

impl From<Metric> for MetricResponse {
    fn from(m: Metric) -> Self {
        Self {
            label: m.label.to_string(),
            value: m.value.to_string(),
            delta: m.delta.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CardResponse {
    pub title: String,
    pub body: String,
}

impl From<ResourceCard> for CardResponse {
    fn from(c: ResourceCard) -> Self {
        Self {
            title: c.title.to_string(),
            body: c.body.to_string(),
        }
    }
}

impl From<GuideSection> for CardResponse {
    fn from(s: GuideSection) -> Self {
        Self {
            title: s.title.to_string(),
            body: s.body.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct HomeContentResponse {
    pub headline: String,
    pub subtitle: String,
    /// Headline figures
    pub metrics: Vec<MetricResponse>,
    /// Quick resource cards
    pub resources: Vec<CardResponse>,
    /// Quick safety checklist items
    pub checklist: Vec<String>,
}

impl From<HomeContent> for HomeContentResponse {
    fn from(h: HomeContent) -> Self {
        Self {
            headline: h.headline.to_string(),
            subtitle: h.subtitle.to_string(),
            metrics: h.metrics.into_iter().map(Into::into).collect(),
            resources: h.resources.into_iter().map(Into::into).collect(),
            checklist: h.checklist.into_iter().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TemplateResponse {
    pub name: String,
    /// Column headings of the record
    pub fields: Vec<String>,
}

impl From<DocumentTemplate> for TemplateResponse {
    fn from(t: DocumentTemplate) -> Self {
        Self {
            name: t.name.to_string(),
            fields: t.fields.into_iter().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct GuidanceContentResponse {
    pub intro: String,
    /// Collapsible guide sections, in reading order
    pub sections: Vec<CardResponse>,
    pub templates_intro: String,
    pub templates: Vec<TemplateResponse>,
}

impl From<GuidanceContent> for GuidanceContentResponse {
    fn from(g: GuidanceContent) -> Self {
        Self {
            intro: g.intro.to_string(),
            sections: g.sections.into_iter().map(Into::into).collect(),
            templates_intro: g.templates_intro.to_string(),
            templates: g.templates.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ChatContentResponse {
    pub intro: String,
    /// Quick questions that pre-fill the question field
    pub presets: Vec<String>,
    pub question_placeholder: String,
    pub tones: Vec<ToneDto>,
    pub default_tone: ToneDto,
}

impl From<ChatContent> for ChatContentResponse {
    fn from(c: ChatContent) -> Self {
        Self {
            intro: c.intro.to_string(),
            presets: c.presets.into_iter().map(str::to_string).collect(),
            question_placeholder: c.question_placeholder.to_string(),
            tones: c.tones.into_iter().map(Into::into).collect(),
            default_tone: c.default_tone.into(),
        }
    }
}
