use async_trait::async_trait;

use super::errors::HashtagError;
use super::model::Prompt;

/// Service port for the external text-generation provider.
///
/// Implementations send the prompt to their configured model and return the
/// raw reply text. A reply with no text must surface as
/// [`HashtagError::EmptyResponse`], never as an empty string.
#[async_trait]
pub trait HashtagGeneratorService: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<String, HashtagError>;
}
