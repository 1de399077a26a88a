use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::hashtag::errors::HashtagError;
use crate::domain::hashtag::model::{GenerationRequest, HashtagList, Prompt, extract_hashtags};
use crate::domain::hashtag::services::HashtagGeneratorService;
use crate::domain::hashtag::use_cases::generate::{
    GenerateHashtagsParams, GenerateHashtagsUseCase,
};
use crate::domain::logger::Logger;

pub struct GenerateHashtagsUseCaseImpl {
    pub generator: Arc<dyn HashtagGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateHashtagsUseCase for GenerateHashtagsUseCaseImpl {
    async fn execute(&self, params: GenerateHashtagsParams) -> Result<HashtagList, HashtagError> {
        let request = match GenerationRequest::new(params.content) {
            Ok(request) => request,
            Err(err) => {
                self.logger.warn("Rejected hashtag request without content");
                return Err(err);
            }
        };

        let prompt = Prompt::for_request(&request);
        self.logger.debug(&format!(
            "Requesting hashtags for {} chars of content",
            request.content().chars().count()
        ));

        let reply = match self.generator.generate(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                self.logger
                    .error(&format!("Hashtag provider error: {} ({})", err, err.detail()));
                return Err(err);
            }
        };

        let hashtags = extract_hashtags(&reply);

        self.logger
            .info(&format!("Extracted {} hashtags", hashtags.len()));

        Ok(hashtags)
    }
}
