use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::{ChatPrompt, ChatQuestion, ChatReply};
use crate::domain::chat::services::ChatResponderService;
use crate::domain::chat::use_cases::respond::{RespondParams, RespondUseCase};
use crate::domain::logger::Logger;

pub struct RespondUseCaseImpl {
    pub responder: Arc<dyn ChatResponderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RespondUseCase for RespondUseCaseImpl {
    async fn execute(&self, params: RespondParams) -> Result<ChatReply, ChatError> {
        let question = ChatQuestion::new(params.prompt).inspect_err(|_| {
            self.logger.warn("Rejected chat request without prompt");
        })?;

        let prompt = ChatPrompt::for_question(&question);

        let raw = self.responder.respond(&prompt).await.inspect_err(|err| {
            self.logger
                .error(&format!("Chat provider error: {} ({})", err, err.detail()));
        })?;

        let reply = ChatReply::from_provider(&raw);
        self.logger.info(&format!(
            "Answered chat prompt with {} chars",
            reply.as_str().chars().count()
        ));

        Ok(reply)
    }
}
