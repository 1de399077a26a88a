use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};

use crate::response::extract_response_text;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Failure of a single generateContent call.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("{0}")]
    Failed(String),
    #[error("provider reply had no extractable text")]
    NoText,
}

/// Shared Gemini HTTP client configuration.
///
/// Built once at startup and reused for every request.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Client against the public endpoint with the default model and timeout.
    pub fn with_defaults(api_key: String) -> Result<Self, reqwest::Error> {
        Self::new(
            api_key,
            DEFAULT_MODEL.to_string(),
            DEFAULT_BASE_URL.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Header carrying the API key. Keeps the key out of URLs and logs.
    pub fn api_key_header(&self) -> (&'static str, &str) {
        ("x-goog-api-key", &self.api_key)
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_body(prompt: &str) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }],
                }
            ],
        })
    }

    /// Sends one prompt to the configured model and returns the reply text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let (key_header, key) = self.api_key_header();

        let response = self
            .client
            .post(self.generate_content_url())
            .header("Content-Type", "application/json")
            .header(key_header, key)
            .json(&Self::build_body(prompt))
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "failed" };
                GeminiError::Failed(format!("request to model {} {}: {}", self.model, kind, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Failed(format!(
                "model {} returned {}: {}",
                self.model, status, body
            )));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| GeminiError::Failed(format!("unreadable provider payload: {}", e)))?;

        extract_response_text(&data).ok_or(GeminiError::NoText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_generate_content_url_for_model() {
        let client = GeminiClient::with_defaults("key".to_string()).unwrap();

        assert_eq!(
            client.generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client = GeminiClient::new(
            "key".to_string(),
            "gemini-2.0-flash".to_string(),
            "http://localhost:9000/v1/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.generate_content_url(),
            "http://localhost:9000/v1/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn should_not_put_api_key_in_url() {
        let client = GeminiClient::with_defaults("secret-key".to_string()).unwrap();

        assert!(!client.generate_content_url().contains("secret-key"));
        assert_eq!(client.api_key_header(), ("x-goog-api-key", "secret-key"));
    }

    #[test]
    fn should_build_client_with_configured_timeout() {
        let result = GeminiClient::new(
            "key".to_string(),
            DEFAULT_MODEL.to_string(),
            DEFAULT_BASE_URL.to_string(),
            Duration::from_millis(250),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn should_embed_prompt_in_request_body() {
        let body = GeminiClient::build_body("Extract hashtags");

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Extract hashtags");
    }

    #[tokio::test]
    async fn should_report_timeout_as_failure() {
        use crate::test_support::{slow_provider, spawn_provider};
        use poem::{Route, post};

        let url = spawn_provider(Route::new().at("/models/:action", post(slow_provider))).await;
        let client = GeminiClient::new(
            "test-key".to_string(),
            "gemini-test".to_string(),
            url,
            Duration::from_millis(100),
        )
        .unwrap();

        match client.generate_text("anything").await {
            Err(GeminiError::Failed(reason)) => assert!(reason.contains("timed out")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
