use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned to callers. Never carries provider detail.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
