use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::hashtag::errors::HashtagError;
use business::domain::hashtag::use_cases::generate::{
    GenerateHashtagsParams, GenerateHashtagsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::hashtag::dto::{GenerateHashtagsRequest, HashtagsResponse};
use crate::api::tags::ApiTags;

pub struct HashtagApi {
    generate_use_case: Arc<dyn GenerateHashtagsUseCase>,
}

impl HashtagApi {
    pub fn new(generate_use_case: Arc<dyn GenerateHashtagsUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Hashtag API
///
/// Endpoints for extracting SEO hashtags from free text.
#[OpenApi]
impl HashtagApi {
    /// Generate hashtags
    ///
    /// Asks the text-generation provider for 10 SEO-friendly hashtags for the
    /// given content and returns the `#`-prefixed tokens found in its reply.
    /// An empty list is a valid result.
    #[oai(path = "/generate", method = "post", tag = "ApiTags::Hashtags")]
    async fn generate_hashtags(
        &self,
        body: Json<GenerateHashtagsRequest>,
    ) -> GenerateHashtagsResponse {
        let params = GenerateHashtagsParams {
            content: body.0.content,
        };

        match self.generate_use_case.execute(params).await {
            Ok(hashtags) => GenerateHashtagsResponse::Ok(Json(hashtags.into())),
            Err(err @ HashtagError::ContentRequired) => {
                GenerateHashtagsResponse::BadRequest(err.into_error_response().1)
            }
            Err(err @ (HashtagError::GenerationFailed { .. } | HashtagError::EmptyResponse)) => {
                GenerateHashtagsResponse::InternalError(err.into_error_response().1)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "unreadable_body")]
pub enum GenerateHashtagsResponse {
    #[oai(status = 200)]
    Ok(Json<HashtagsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

// A body that cannot be read carries no usable content.
fn unreadable_body(_err: poem::Error) -> GenerateHashtagsResponse {
    let (_, json) = HashtagError::ContentRequired.into_error_response();
    GenerateHashtagsResponse::BadRequest(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::application::hashtag::generate::GenerateHashtagsUseCaseImpl;
    use business::domain::hashtag::model::Prompt;
    use business::domain::hashtag::services::HashtagGeneratorService;
    use logger::TracingLogger;
    use mockall::mock;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    mock! {
        pub HashtagGenerator {}

        #[async_trait]
        impl HashtagGeneratorService for HashtagGenerator {
            async fn generate(&self, prompt: &Prompt) -> Result<String, HashtagError>;
        }
    }

    fn test_client(generator: MockHashtagGenerator) -> TestClient<Route> {
        let use_case = GenerateHashtagsUseCaseImpl {
            generator: Arc::new(generator),
            logger: Arc::new(TracingLogger),
        };
        let service = OpenApiService::new(HashtagApi::new(Arc::new(use_case)), "test", "0.0.0");
        TestClient::new(Route::new().nest("/", service))
    }

    fn never_called() -> MockHashtagGenerator {
        let mut generator = MockHashtagGenerator::new();
        generator.expect_generate().times(0);
        generator
    }

    #[tokio::test]
    async fn should_return_hashtags_when_provider_replies() {
        let mut generator = MockHashtagGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt| prompt.as_str().contains("Morning coffee rituals"))
            .times(1)
            .returning(|_| Ok("#Coffee, #Morning,#Ritual".to_string()));
        let cli = test_client(generator);

        let resp = cli
            .post("/generate")
            .body_json(&json!({ "content": "Morning coffee rituals" }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(&json!({ "hashtags": ["#Coffee", "#Morning", "#Ritual"] }))
            .await;
    }

    #[tokio::test]
    async fn should_return_empty_list_when_reply_has_no_hashtags() {
        let mut generator = MockHashtagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Ok("Sorry, I can't do that.".to_string()));
        let cli = test_client(generator);

        let resp = cli
            .post("/generate")
            .body_json(&json!({ "content": "Morning coffee rituals" }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(&json!({ "hashtags": [] })).await;
    }

    #[tokio::test]
    async fn should_return_bad_request_when_content_missing() {
        let cli = test_client(never_called());

        let resp = cli.post("/generate").body_json(&json!({})).send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({ "error": "Content is required" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_bad_request_when_content_empty() {
        let cli = test_client(never_called());

        let resp = cli
            .post("/generate")
            .body_json(&json!({ "content": "" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({ "error": "Content is required" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_bad_request_when_body_malformed() {
        let cli = test_client(never_called());

        let resp = cli
            .post("/generate")
            .content_type("application/json")
            .body("{\"content\": ")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({ "error": "Content is required" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_generic_error_when_provider_fails() {
        let mut generator = MockHashtagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Err(HashtagError::generation_failed("API key not valid")));
        let cli = test_client(generator);

        let resp = cli
            .post("/generate")
            .body_json(&json!({ "content": "Morning coffee rituals" }))
            .send()
            .await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(&json!({ "error": "Something went wrong" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_generic_error_when_reply_has_no_text() {
        let mut generator = MockHashtagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Err(HashtagError::EmptyResponse));
        let cli = test_client(generator);

        let resp = cli
            .post("/generate")
            .body_json(&json!({ "content": "Morning coffee rituals" }))
            .send()
            .await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(&json!({ "error": "Something went wrong" }))
            .await;
    }

    #[tokio::test]
    async fn should_answer_each_error_with_the_status_its_body_maps_to() {
        let cases: [fn() -> HashtagError; 3] = [
            || HashtagError::ContentRequired,
            || HashtagError::generation_failed("quota exceeded"),
            || HashtagError::EmptyResponse,
        ];

        for make_error in cases {
            let (expected_status, expected_body) = make_error().into_error_response();
            let mut generator = MockHashtagGenerator::new();
            generator
                .expect_generate()
                .returning(move |_| Err(make_error()));
            let cli = test_client(generator);

            let resp = cli
                .post("/generate")
                .body_json(&json!({ "content": "Morning coffee rituals" }))
                .send()
                .await;

            resp.assert_status(expected_status);
            resp.assert_json(&json!({ "error": expected_body.0.error }))
                .await;
        }
    }
}
