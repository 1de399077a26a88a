use super::errors::ChatError;

/// A creator's question, rejected when missing or blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatQuestion {
    text: String,
}

impl ChatQuestion {
    pub fn new(text: Option<String>) -> Result<Self, ChatError> {
        match text {
            Some(text) if !text.trim().is_empty() => Ok(Self { text }),
            _ => Err(ChatError::PromptRequired),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Assistant persona wrapped around the question.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt(String);

impl ChatPrompt {
    pub fn for_question(question: &ChatQuestion) -> Self {
        Self(format!(
            "You are CreatorsAI, a friendly, insightful assistant for the creator economy.\n\
             A user asked:\n\
             \"{}\"\n\
             \n\
             Give a concise, practical answer tailored for content creators.",
            question.text()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Provider answer with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply(String);

impl ChatReply {
    pub fn from_provider(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
