use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::errors::ChatError;
use business::domain::chat::use_cases::respond::{RespondParams, RespondUseCase};

use crate::api::chat::dto::{RespondRequest, RespondResponse};
use crate::api::chat::error_mapper::REQUEST_MUST_BE_JSON;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    respond_use_case: Arc<dyn RespondUseCase>,
}

impl ChatApi {
    pub fn new(respond_use_case: Arc<dyn RespondUseCase>) -> Self {
        Self { respond_use_case }
    }
}

/// Chat API
#[OpenApi]
impl ChatApi {
    /// Ask the creator assistant
    ///
    /// Wraps the prompt in the CreatorsAI assistant instructions and returns
    /// the provider's answer.
    #[oai(path = "/respond", method = "post", tag = "ApiTags::Chat")]
    async fn respond(&self, body: Json<RespondRequest>) -> RespondApiResponse {
        let params = RespondParams {
            prompt: body.0.prompt,
        };

        match self.respond_use_case.execute(params).await {
            Ok(reply) => RespondApiResponse::Ok(Json(reply.into())),
            Err(err @ ChatError::PromptRequired) => {
                RespondApiResponse::BadRequest(err.into_error_response().1)
            }
            Err(err @ (ChatError::GenerationFailed { .. } | ChatError::EmptyResponse)) => {
                RespondApiResponse::InternalError(err.into_error_response().1)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "unreadable_body")]
pub enum RespondApiResponse {
    #[oai(status = 200)]
    Ok(Json<RespondResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn unreadable_body(_err: poem::Error) -> RespondApiResponse {
    RespondApiResponse::BadRequest(Json(ErrorResponse {
        error: REQUEST_MUST_BE_JSON.to_string(),
    }))
}
