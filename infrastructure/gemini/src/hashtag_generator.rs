use std::sync::Arc;

use async_trait::async_trait;

use business::domain::hashtag::errors::HashtagError;
use business::domain::hashtag::model::Prompt;
use business::domain::hashtag::services::HashtagGeneratorService;

use crate::client::{GeminiClient, GeminiError};

pub struct HashtagGeneratorGemini {
    client: Arc<GeminiClient>,
}

impl HashtagGeneratorGemini {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HashtagGeneratorService for HashtagGeneratorGemini {
    async fn generate(&self, prompt: &Prompt) -> Result<String, HashtagError> {
        self.client
            .generate_text(prompt.as_str())
            .await
            .map_err(|err| match err {
                GeminiError::Failed(reason) => HashtagError::generation_failed(reason),
                GeminiError::NoText => HashtagError::EmptyResponse,
            })
    }
}
