//! Anthropic Messages API gateway
//!
//! Implements [`LlmGateway`] with one stateless `POST /v1/messages` per
//! round. The whole conversation is sent every time.

use super::types::{self, MessagesRequest, MessagesResponse};
use async_trait::async_trait;
use clinic_application::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use clinic_domain::LlmResponse;
use std::time::Duration;
use tracing::debug;

/// Connection settings for the Messages API.
#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    /// HTTP timeout for a single request.
    pub request_timeout: Duration,
}

pub struct AnthropicGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    api_version: String,
}

impl AnthropicGateway {
    pub fn new(settings: AnthropicSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/v1/messages", settings.base_url.trim_end_matches('/')),
            api_key: settings.api_key,
            api_version: settings.api_version,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<LlmResponse, GatewayError> {
        let body = MessagesRequest::from_completion(request);

        debug!(
            model = %request.model,
            messages = body.messages.len(),
            tools = body.tools.len(),
            "Calling Anthropic Messages API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| types::convert_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(types::convert_http_error(status.as_u16(), &text));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let response = parsed.into_domain();
        debug!(
            stop_reason = ?response.stop_reason,
            blocks = response.content.len(),
            "Anthropic response received"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_domain::{Conversation, Model, StopReason};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> AnthropicGateway {
        AnthropicGateway::new(AnthropicSettings {
            api_key: "test-key".to_string(),
            base_url: format!("{}/", server.uri()),
            api_version: "2023-06-01".to_string(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    async fn complete(gateway: &AnthropicGateway) -> Result<LlmResponse, GatewayError> {
        let model = Model::default();
        let conversation = Conversation::new("What are your hours?");
        let tools = vec![json!({
            "name": "check_faq",
            "description": "Search frequently asked questions",
            "input_schema": {"type": "object", "properties": {}, "required": []}
        })];
        let request = CompletionRequest {
            model: &model,
            system: Some("You are a helpful healthcare assistant."),
            max_tokens: 1024,
            tools: &tools,
            conversation: &conversation,
        };
        gateway.complete(&request).await
    }

    #[tokio::test]
    async fn test_complete_sends_headers_and_parses_tool_use() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_partial_json(json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 1024,
                "system": "You are a helpful healthcare assistant.",
                "messages": [{"role": "user", "content": [{"type": "text", "text": "What are your hours?"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_1",
                "type": "message",
                "role": "assistant",
                "model": "claude-sonnet-4-20250514",
                "content": [
                    {"type": "tool_use", "id": "toolu_1", "name": "check_faq", "input": {"question": "hours"}}
                ],
                "stop_reason": "tool_use"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway(&server);
        assert_eq!(gateway.endpoint(), format!("{}/v1/messages", server.uri()));

        let response = complete(&gateway).await.unwrap();
        assert_eq!(response.stop_reason, Some(StopReason::ToolUse));
        assert_eq!(response.tool_calls()[0].tool_name, "check_faq");
        assert_eq!(response.model.as_deref(), Some("claude-sonnet-4-20250514"));
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_retryable_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "type": "error",
                "error": {"type": "rate_limit_error", "message": "Number of requests exceeded"}
            })))
            .mount(&server)
            .await;

        let err = complete(&gateway(&server)).await.unwrap_err();
        assert!(matches!(err, GatewayError::RateLimited(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_auth_failure_is_not_retryable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            })))
            .mount(&server)
            .await;

        let err = complete(&gateway(&server)).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Authentication("authentication_error: invalid x-api-key".to_string())
        );
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = complete(&gateway(&server)).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
