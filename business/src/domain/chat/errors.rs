#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.prompt_required")]
    PromptRequired,
    #[error("chat.generation_failed")]
    GenerationFailed { reason: String },
    #[error("chat.empty_response")]
    EmptyResponse,
}

impl ChatError {
    pub fn generation_failed(reason: impl Into<String>) -> Self {
        ChatError::GenerationFailed {
            reason: reason.into(),
        }
    }

    /// Operator-facing detail. Only ever written to logs.
    pub fn detail(&self) -> String {
        match self {
            ChatError::PromptRequired => "prompt is missing or empty".to_string(),
            ChatError::GenerationFailed { reason } => reason.clone(),
            ChatError::EmptyResponse => "provider reply had no extractable text".to_string(),
        }
    }
}
