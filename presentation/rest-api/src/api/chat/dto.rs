use poem_openapi::Object;

use business::domain::chat::model::ChatReply;

#[derive(Debug, Clone, Object)]
pub struct RespondRequest {
    /// Question from a content creator
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct RespondResponse {
    /// Assistant answer
    pub result: String,
}

impl From<ChatReply> for RespondResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            result: reply.into_inner(),
        }
    }
}
