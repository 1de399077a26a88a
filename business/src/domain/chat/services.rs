use async_trait::async_trait;

use super::errors::ChatError;
use super::model::ChatPrompt;

/// Service port for answering creator questions with the text provider.
#[async_trait]
pub trait ChatResponderService: Send + Sync {
    async fn respond(&self, prompt: &ChatPrompt) -> Result<String, ChatError>;
}
