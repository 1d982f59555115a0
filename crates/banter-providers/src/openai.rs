//! Direct REST client for the OpenAI Chat Completions API.

use async_trait::async_trait;
use banter_core::{GenerationSettings, RenderedPrompt};
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::chat_model::ChatModel;
use crate::error::ProviderError;

const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Client for one turn against the OpenAI HTTP API.
///
/// Built fresh per invocation from the current generation settings.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    /// Creates a client for the given key and settings snapshot.
    pub fn new(api_key: impl Into<String>, settings: &GenerationSettings) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }

    fn build_request(&self, prompt: &RenderedPrompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.question.clone(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| ProviderError::Request {
                message: format!("OpenAI API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            ProviderError::InvalidResponse(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &RenderedPrompt) -> Result<String, ProviderError> {
        let request = self.build_request(prompt);
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            ProviderError::EmptyResponse("OpenAI API returned no content in the response".into())
        })
}

fn map_http_error(
    status: StatusCode,
    body: String,
    retry_after: Option<Duration>,
) -> ProviderError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ProviderError::Api {
        status_code: status.as_u16(),
        message,
        is_retryable,
        retry_after,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use banter_core::{GenerationSettings, PromptTemplate, ProviderKind};
    use crate::error::ProviderErrorKind;

    #[test]
    fn test_build_request_carries_exactly_the_three_parameters() {
        let mut settings = GenerationSettings::defaults_for(ProviderKind::OpenAi);
        settings.set_model(ProviderKind::OpenAi, "gpt-4o-mini").unwrap();
        settings.set_temperature(0.7).unwrap();
        settings.set_max_tokens(500).unwrap();

        let client = OpenAiClient::new("test-key", &settings);
        let prompt = PromptTemplate::default().render("What is 2+2?");
        let body = serde_json::to_value(client.build_request(&prompt)).unwrap();

        assert_eq!(body["model"], "gpt-4o-mini");
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(body["max_tokens"], 500);
        let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["max_tokens", "messages", "model", "temperature"]);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "What is 2+2?");
    }

    #[test]
    fn test_extract_text_from_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{
                "choices": [
                    {"message": {"role": "assistant", "content": "2+2 equals 4."}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(extract_text_response(response).unwrap(), "2+2 equals 4.");
    }

    #[test]
    fn test_extract_text_no_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = extract_text_response(response).unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::EmptyResponse);
    }

    #[test]
    fn test_map_http_error_reads_error_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        let err = map_http_error(StatusCode::UNAUTHORIZED, body.to_string(), None);

        assert_eq!(err.kind(), ProviderErrorKind::Api);
        assert_eq!(err.status_code(), Some(401));
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }

    #[test]
    fn test_map_http_error_server_errors_are_retryable() {
        let err = map_http_error(StatusCode::SERVICE_UNAVAILABLE, "overloaded".to_string(), None);
        assert!(err.is_retryable());
    }
}
