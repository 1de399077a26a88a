use std::sync::Arc;

use anyhow::Context;
use logger::TracingLogger;

use gemini::chat_responder::ChatResponderGemini;
use gemini::client::GeminiClient;
use gemini::hashtag_generator::HashtagGeneratorGemini;

use business::application::chat::respond::RespondUseCaseImpl;
use business::application::hashtag::generate::GenerateHashtagsUseCaseImpl;

use crate::api::chat::routes::ChatApi;
use crate::api::hashtag::routes::HashtagApi;
use crate::api::health::routes::HealthApi;
use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub hashtag_api: HashtagApi,
    pub chat_api: ChatApi,
}

impl DependencyContainer {
    /// Builds the single long-lived provider client and wires it into the APIs.
    pub fn new(gemini_config: &GeminiConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        let gemini_client = Arc::new(
            GeminiClient::new(
                gemini_config.api_key.clone(),
                gemini_config.model.clone(),
                gemini_config.base_url.clone(),
                gemini_config.timeout,
            )
            .context("failed to build Gemini HTTP client")?,
        );
        let hashtag_generator = Arc::new(HashtagGeneratorGemini::new(gemini_client.clone()));
        let chat_responder = Arc::new(ChatResponderGemini::new(gemini_client));

        let generate_hashtags_use_case = Arc::new(GenerateHashtagsUseCaseImpl {
            generator: hashtag_generator,
            logger: logger.clone(),
        });
        let respond_use_case = Arc::new(RespondUseCaseImpl {
            responder: chat_responder,
            logger,
        });

        Ok(Self {
            health_api: HealthApi,
            hashtag_api: HashtagApi::new(generate_hashtags_use_case),
            chat_api: ChatApi::new(respond_use_case),
        })
    }
}
