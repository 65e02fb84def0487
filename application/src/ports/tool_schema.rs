//! Tool schema conversion port.
//!
//! The domain decides which tools exist ([`ToolSpec`]); this port turns them
//! into the JSON Schema descriptors the model API and MCP hosts expect.

use clinic_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to JSON Schema descriptors.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to `{name, description, input_schema}`.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools, keeping registration order.
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.all().map(|tool| self.tool_to_schema(tool)).collect()
    }
}
