/// Hashtag generation errors.
/// Display strings are code-style identifiers, never provider text.
#[derive(Debug, thiserror::Error)]
pub enum HashtagError {
    #[error("hashtag.content_required")]
    ContentRequired,
    #[error("hashtag.generation_failed")]
    GenerationFailed { reason: String },
    #[error("hashtag.empty_response")]
    EmptyResponse,
}

impl HashtagError {
    pub fn generation_failed(reason: impl Into<String>) -> Self {
        HashtagError::GenerationFailed {
            reason: reason.into(),
        }
    }

    /// Operator-facing detail. Only ever written to logs.
    pub fn detail(&self) -> String {
        match self {
            HashtagError::ContentRequired => "content is missing or empty".to_string(),
            HashtagError::GenerationFailed { reason } => reason.clone(),
            HashtagError::EmptyResponse => "provider reply had no extractable text".to_string(),
        }
    }
}
