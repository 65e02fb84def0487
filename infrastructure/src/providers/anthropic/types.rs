//! Wire types for the Anthropic Messages API
//!
//! Converts the domain [`Conversation`] into request messages and the
//! response body into a domain [`LlmResponse`].

use clinic_application::ports::llm_gateway::{CompletionRequest, GatewayError};
use clinic_domain::{ContentBlock, Conversation, LlmResponse, StopReason, Turn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<&'a str>,
    #[serde(skip_serializing_if = "no_tools")]
    pub tools: &'a [Value],
    pub messages: Vec<WireMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: Vec<WireContent>,
}

fn no_tools(tools: &&[Value]) -> bool {
    tools.is_empty()
}

/// A typed content block as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireContent {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        content: String,
    },
    /// Block types this client does not handle (e.g. `thinking`).
    #[serde(other)]
    Unsupported,
}

impl<'a> MessagesRequest<'a> {
    pub fn from_completion(request: &'a CompletionRequest<'a>) -> Self {
        Self {
            model: request.model.as_str(),
            max_tokens: request.max_tokens,
            system: request.system.filter(|s| !s.is_empty()),
            tools: request.tools,
            messages: convert_conversation(request.conversation),
        }
    }
}

// ─── Domain → Wire ───────────────────────────────────────────────

/// Convert every conversation turn to one wire message.
///
/// Tool results travel in a `user` message, as the API requires.
pub fn convert_conversation(conversation: &Conversation) -> Vec<WireMessage> {
    conversation
        .turns()
        .iter()
        .map(|turn| match turn {
            Turn::User { text } => WireMessage {
                role: "user",
                content: vec![WireContent::Text { text: text.clone() }],
            },
            Turn::Assistant { content } => WireMessage {
                role: "assistant",
                content: content.iter().map(convert_content_block).collect(),
            },
            Turn::ToolResults { results } => WireMessage {
                role: "user",
                content: results
                    .iter()
                    .map(|r| WireContent::ToolResult {
                        tool_use_id: r.tool_use_id.clone(),
                        content: r.output.clone(),
                    })
                    .collect(),
            },
        })
        .collect()
}

fn convert_content_block(block: &ContentBlock) -> WireContent {
    match block {
        ContentBlock::Text(text) => WireContent::Text { text: text.clone() },
        ContentBlock::ToolUse { id, name, input } => WireContent::ToolUse {
            id: id.clone(),
            name: name.clone(),
            input: Value::Object(input.clone().into_iter().collect()),
        },
    }
}

// ─── Wire → Domain ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<WireContent>,
    pub stop_reason: Option<String>,
    pub model: Option<String>,
}

impl MessagesResponse {
    /// Convert to the domain response.
    ///
    /// Only text and tool-use blocks are kept. Unsupported block types (e.g.
    /// thinking) are not echoed back in the next request's assistant turn.
    pub fn into_domain(self) -> LlmResponse {
        let content = self
            .content
            .into_iter()
            .filter_map(|block| match block {
                WireContent::Text { text } => Some(ContentBlock::Text(text)),
                WireContent::ToolUse { id, name, input } => {
                    let input = match input {
                        Value::Object(map) => map.into_iter().collect::<HashMap<_, _>>(),
                        other => {
                            warn!(
                                tool = %name,
                                id = %id,
                                "tool_use input is not a JSON object ({}), calling with no arguments",
                                other
                            );
                            HashMap::new()
                        }
                    };
                    Some(ContentBlock::ToolUse { id, name, input })
                }
                // Skip tool_result echoes and unknown block types
                _ => None,
            })
            .collect();

        LlmResponse {
            content,
            stop_reason: self.stop_reason.as_deref().map(StopReason::from_api),
            model: self.model,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

/// Map a non-success HTTP status and body to a [`GatewayError`].
pub fn convert_http_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| format!("{}: {}", e.error.kind, e.error.message))
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        401 | 403 => GatewayError::Authentication(message),
        429 => GatewayError::RateLimited(message),
        500..=599 => GatewayError::ServerError { status, message },
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, message)),
    }
}

/// Map a transport-level reqwest error to a [`GatewayError`].
pub fn convert_transport_error(err: &reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else if err.is_decode() {
        GatewayError::InvalidResponse(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}
