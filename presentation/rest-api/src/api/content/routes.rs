use poem_openapi::{OpenApi, payload::Json};

use business::domain::content::catalog;

use crate::api::content::dto::{ChatContentResponse, GuidanceContentResponse, HomeContentResponse};
use crate::api::tags::ApiTags;

/// Static content for the home, chat and guidance views.
pub struct ContentApi;

impl ContentApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl ContentApi {
    /// Home view content
    #[oai(path = "/content/home", method = "get", tag = "ApiTags::Content")]
    async fn home(&self) -> Json<HomeContentResponse> {
        Json(catalog::home().into())
    }

    /// Safety guide content
    #[oai(path = "/content/guidance", method = "get", tag = "ApiTags::Content")]
    async fn guidance(&self) -> Json<GuidanceContentResponse> {
        Json(catalog::guidance().into())
    }

    /// Chat view content
    ///
    /// Preset questions and the available answer tones.
    #[oai(path = "/content/chat", method = "get", tag = "ApiTags::Content")]
    async fn chat(&self) -> Json<ChatContentResponse> {
        Json(catalog::chat().into())
    }
}
