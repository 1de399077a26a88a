use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatReply;

pub struct RespondParams {
    pub prompt: Option<String>,
}

#[async_trait]
pub trait RespondUseCase: Send + Sync {
    async fn execute(&self, params: RespondParams) -> Result<ChatReply, ChatError>;
}
