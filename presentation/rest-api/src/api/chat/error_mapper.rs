use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::chat::errors::ChatError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::hashtag::error_mapper::SOMETHING_WENT_WRONG;

pub const PROMPT_REQUIRED: &str = "No prompt content provided";
pub const REQUEST_MUST_BE_JSON: &str = "Request must be JSON";

impl IntoErrorResponse for ChatError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ChatError::PromptRequired => (StatusCode::BAD_REQUEST, PROMPT_REQUIRED),
            ChatError::GenerationFailed { .. } | ChatError::EmptyResponse => {
                (StatusCode::INTERNAL_SERVER_ERROR, SOMETHING_WENT_WRONG)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
    }
}
