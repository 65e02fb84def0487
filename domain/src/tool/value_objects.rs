//! Tool domain value objects: result and error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised while resolving or validating a tool call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The model asked for a tool that is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A parameter is missing, unexpected, or has the wrong type.
    #[error("Invalid argument for tool '{tool}': {message}")]
    InvalidArgument { tool: String, message: String },
}

impl ToolError {
    pub fn invalid_argument(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Stable code used in logs and protocol error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::UnknownTool(_) => "UNKNOWN_TOOL",
            ToolError::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}

/// Result of executing one tool call.
///
/// `tool_use_id` is the correlation token of the originating [`ToolCall`]
/// so the model can pair results with requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_use_id: String,
    pub tool_name: String,
    pub output: String,
}

impl ToolResult {
    pub fn new(
        tool_use_id: impl Into<String>,
        tool_name: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            tool_use_id: tool_use_id.into(),
            tool_name: tool_name.into(),
            output: output.into(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::UnknownTool("book_appointment".to_string());
        assert_eq!(err.to_string(), "Unknown tool: book_appointment");
        assert_eq!(err.code(), "UNKNOWN_TOOL");

        let err = ToolError::invalid_argument("check_faq", "missing 'question'");
        assert_eq!(
            err.to_string(),
            "Invalid argument for tool 'check_faq': missing 'question'"
        );
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_tool_result_keeps_correlation_token() {
        let result = ToolResult::new("toolu_1", "check_faq", "FAQ Answer: ...");
        assert_eq!(result.tool_use_id, "toolu_1");
        assert_eq!(result.output(), "FAQ Answer: ...");
    }
}
