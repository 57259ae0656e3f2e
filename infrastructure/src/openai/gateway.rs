//! LLM Gateway implementation over HTTP.

use super::protocol::{
    ApiErrorResponse, ChatMessage, ChatRequest, ChatResponse, ResponseFormat,
};
use async_trait::async_trait;
use autoreply_application::{Completion, CompletionRequest, GatewayError, LlmGateway, TokenUsage};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// LLM Gateway for OpenAI-compatible chat completion endpoints
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiCompatibleGateway {
    /// Create a gateway for `base_url` (scheme and host, no path)
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH),
            model: model.into(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn map_status(status: StatusCode, body: &str) -> GatewayError {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .map(|e| match e.error.kind {
                Some(kind) => format!("{} ({})", e.error.message, kind),
                None => e.error.message,
            })
            .unwrap_or_else(|_| format!("{}: {}", status, body.trim()));

        if status == StatusCode::TOO_MANY_REQUESTS {
            GatewayError::RateLimited(message)
        } else if status.is_server_error() {
            GatewayError::ServerError {
                status: status.as_u16(),
                message,
            }
        } else {
            GatewayError::RequestFailed(message)
        }
    }

    fn map_transport(error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::ConnectionError(error.to_string())
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(Self::map_transport)?;
        let status = response.status();
        debug!("Completion response: {} from {}", status, self.endpoint);

        let text = response.text().await.map_err(Self::map_transport)?;
        if !status.is_success() {
            return Err(Self::map_status(status, &text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::RequestFailed(format!("malformed response body: {}", e)))?;

        let content = parsed
            .first_text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(GatewayError::EmptyResponse)?
            .to_string();

        let usage = parsed.usage.unwrap_or_default();
        Ok(Completion {
            text: content,
            usage: TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
            },
        })
    }
}
