use std::sync::Arc;

use async_trait::async_trait;

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::ChatPrompt;
use business::domain::chat::services::ChatResponderService;

use crate::client::{GeminiClient, GeminiError};

pub struct ChatResponderGemini {
    client: Arc<GeminiClient>,
}

impl ChatResponderGemini {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatResponderService for ChatResponderGemini {
    async fn respond(&self, prompt: &ChatPrompt) -> Result<String, ChatError> {
        self.client
            .generate_text(prompt.as_str())
            .await
            .map_err(|err| match err {
                GeminiError::Failed(reason) => ChatError::generation_failed(reason),
                GeminiError::NoText => ChatError::EmptyResponse,
            })
    }
}
