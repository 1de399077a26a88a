use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::hashtag::errors::HashtagError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

pub const CONTENT_REQUIRED: &str = "Content is required";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

impl IntoErrorResponse for HashtagError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            HashtagError::ContentRequired => (StatusCode::BAD_REQUEST, CONTENT_REQUIRED),
            HashtagError::GenerationFailed { .. } | HashtagError::EmptyResponse => {
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
