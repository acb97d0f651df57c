use std::sync::Arc;

use gemini::client_factory::GeminiClientFactory;
use logger::TracingLogger;
use persistence::session::repository::SessionRepositoryInMemory;

use business::application::assistant::ask::AskQuestionUseCaseImpl;
use business::application::connection::set_credential::SetCredentialUseCaseImpl;
use business::application::connection::sync::SyncConnectionUseCaseImpl;
use business::application::session::end::EndSessionUseCaseImpl;
use business::application::session::get_transcript::GetTranscriptUseCaseImpl;
use business::application::session::start::StartSessionUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub session_api: crate::api::session::routes::SessionApi,
    pub connection_api: crate::api::connection::routes::ConnectionApi,
    pub chat_api: crate::api::chat::routes::ChatApi,
    pub content_api: crate::api::content::routes::ContentApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: GeminiConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let session_repository = Arc::new(SessionRepositoryInMemory::new());
        let client_factory = Arc::new(GeminiClientFactory::new(gemini_config.settings));

        // Session use cases
        let start_use_case = Arc::new(StartSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let end_use_case = Arc::new(EndSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let get_transcript_use_case = Arc::new(GetTranscriptUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });

        // Connection use cases
        let set_credential_use_case = Arc::new(SetCredentialUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let sync_use_case = Arc::new(SyncConnectionUseCaseImpl {
            repository: session_repository.clone(),
            factory: client_factory,
            default_credential: gemini_config.default_credential,
            logger: logger.clone(),
        });

        // Chat use cases
        let ask_use_case = Arc::new(AskQuestionUseCaseImpl {
            repository: session_repository,
            logger,
        });

        let session_api = crate::api::session::routes::SessionApi::new(
            start_use_case,
            end_use_case,
            get_transcript_use_case,
        );
        let connection_api = crate::api::connection::routes::ConnectionApi::new(
            set_credential_use_case,
            sync_use_case.clone(),
        );
        let chat_api = crate::api::chat::routes::ChatApi::new(sync_use_case, ask_use_case);
        let content_api = crate::api::content::routes::ContentApi::new();

        Self {
            health_api,
            session_api,
            connection_api,
            chat_api,
            content_api,
        }
    }
}
