//! LLM response types for native tool use.
//!
//! The Messages API returns a completion as an ordered list of content
//! blocks mixing text and tool-use requests, plus a stop reason telling the
//! caller whether the model is done or waiting on tool results.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block of content within an LLM response.
///
/// # Examples
///
/// ```
/// use clinic_domain::session::response::ContentBlock;
///
/// let text = ContentBlock::Text("Let me check that appointment.".to_string());
/// assert!(text.as_text().is_some());
///
/// let tool = ContentBlock::ToolUse {
///     id: "toolu_abc123".to_string(),
///     name: "lookup_appointment".to_string(),
///     input: [("appointment_id".to_string(), serde_json::json!("APT-101"))]
///         .into_iter().collect(),
/// };
/// assert!(tool.as_tool_use().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlock {
    /// A text content block from the model.
    Text(String),

    /// A tool use request from the model.
    ToolUse {
        /// API-assigned correlation token (e.g. "toolu_abc123").
        id: String,
        /// Requested tool name. Not trusted until resolved against the registry.
        name: String,
        /// Arguments for the tool.
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `(id, name, input)` if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response: the model is done.
    EndTurn,
    /// The model wants tools invoked before it can answer.
    ToolUse,
    /// Hit the token limit: response may be truncated.
    MaxTokens,
    /// A configured stop sequence was generated.
    StopSequence,
    /// Provider-specific stop reason.
    Other(String),
}

impl StopReason {
    /// Parse the wire value used by the Messages API.
    pub fn from_api(value: &str) -> Self {
        match value {
            "end_turn" => StopReason::EndTurn,
            "tool_use" => StopReason::ToolUse,
            "max_tokens" => StopReason::MaxTokens,
            "stop_sequence" => StopReason::StopSequence,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// A structured completion from the model.
///
/// # Examples
///
/// ```
/// use clinic_domain::session::response::{LlmResponse, ContentBlock, StopReason};
///
/// let response = LlmResponse {
///     content: vec![
///         ContentBlock::Text("Checking.".to_string()),
///         ContentBlock::ToolUse {
///             id: "toolu_1".to_string(),
///             name: "check_faq".to_string(),
///             input: [("question".to_string(), serde_json::json!("hours"))]
///                 .into_iter().collect(),
///         },
///     ],
///     stop_reason: Some(StopReason::ToolUse),
///     model: None,
/// };
/// assert!(response.wants_tools());
/// assert_eq!(response.tool_calls().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    /// Content blocks in the response (text and/or tool use).
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    pub stop_reason: Option<StopReason>,
    /// Model identifier (if returned by the API).
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only final response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Join all `Text` blocks with a single space.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Extract all `ToolUse` blocks as [`ToolCall`]s, in response order.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if the response contains any tool use requests.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }

    /// Whether this is a tool-use completion.
    ///
    /// Decided by the tool-use blocks alone. A `tool_use` stop reason with no
    /// blocks has nothing to answer, so the response is final.
    pub fn wants_tools(&self) -> bool {
        self.has_tool_calls()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_block(id: &str, name: &str, arg: (&str, &str)) -> ContentBlock {
        ContentBlock::ToolUse {
            id: id.to_string(),
            name: name.to_string(),
            input: [(arg.0.to_string(), serde_json::json!(arg.1))]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn from_text_creates_final_response() {
        let response = LlmResponse::from_text("We open at 8AM.");
        assert_eq!(response.text_content(), "We open at 8AM.");
        assert!(!response.wants_tools());
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn text_blocks_join_with_single_space() {
        let response = LlmResponse {
            content: vec![
                ContentBlock::Text("APT-101 is confirmed.".to_string()),
                tool_block("toolu_x", "check_faq", ("question", "hours")),
                ContentBlock::Text("We are open Monday-Friday.".to_string()),
            ],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        };
        assert_eq!(
            response.text_content(),
            "APT-101 is confirmed. We are open Monday-Friday."
        );
    }

    #[test]
    fn tool_calls_extraction() {
        let response = LlmResponse {
            content: vec![
                ContentBlock::Text("Let me look those up.".to_string()),
                tool_block("toolu_1", "lookup_appointment", ("appointment_id", "APT-101")),
                tool_block("toolu_2", "check_faq", ("question", "hours")),
            ],
            stop_reason: Some(StopReason::ToolUse),
            model: Some("claude-sonnet-4-20250514".to_string()),
        };

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].tool_name, "lookup_appointment");
        assert_eq!(calls[0].native_id.as_deref(), Some("toolu_1"));
        assert_eq!(calls[0].get_string("appointment_id"), Some("APT-101"));
        assert_eq!(calls[1].tool_name, "check_faq");
        assert_eq!(calls[1].native_id.as_deref(), Some("toolu_2"));
    }

    #[test]
    fn tool_blocks_count_even_without_tool_use_stop_reason() {
        let response = LlmResponse {
            content: vec![tool_block("toolu_1", "check_faq", ("question", "parking"))],
            stop_reason: Some(StopReason::MaxTokens),
            model: None,
        };
        assert!(response.wants_tools());
    }

    #[test]
    fn tool_use_stop_reason_without_blocks_is_final() {
        let response = LlmResponse {
            content: vec![ContentBlock::Text("All done.".to_string())],
            stop_reason: Some(StopReason::ToolUse),
            model: None,
        };
        assert!(!response.wants_tools());
        assert!(response.tool_calls().is_empty());
    }

    #[test]
    fn empty_response() {
        let response = LlmResponse {
            content: vec![],
            stop_reason: None,
            model: None,
        };
        assert_eq!(response.text_content(), "");
        assert!(!response.wants_tools());
    }

    #[test]
    fn stop_reason_from_api() {
        assert_eq!(StopReason::from_api("end_turn"), StopReason::EndTurn);
        assert_eq!(StopReason::from_api("tool_use"), StopReason::ToolUse);
        assert_eq!(StopReason::from_api("max_tokens"), StopReason::MaxTokens);
        assert_eq!(StopReason::from_api("stop_sequence"), StopReason::StopSequence);
        assert_eq!(
            StopReason::from_api("pause_turn"),
            StopReason::Other("pause_turn".to_string())
        );
    }
}
