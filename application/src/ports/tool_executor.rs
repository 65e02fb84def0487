//! Tool Executor port
//!
//! Defines the interface for running the registered lookup tools.

use async_trait::async_trait;
use clinic_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolError,
};

/// Port for tool execution
///
/// Implementations resolve the call's name against their [`ToolSpec`],
/// validate the arguments and return the tool's text output. A lookup miss
/// is `Ok` text; only unknown tools and bad arguments are errors.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Get names of all available tools, in registration order
    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Execute a tool call
    async fn execute(&self, call: &ToolCall) -> Result<String, ToolError>;
}
