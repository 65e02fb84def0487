//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`]. The same descriptors go to
//! the Messages API (`input_schema`) and to MCP hosts (`inputSchema`).

use clinic_application::ports::tool_schema::ToolSchemaPort;
use clinic_domain::tool::entities::{ToolDefinition, ToolSpec};
use serde_json::{Map, Value, json};

/// Converts tool definitions to JSON Schema descriptors.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"number"`, `"integer"`, `"boolean"` → unchanged
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    /// The object schema describing a tool's parameters.
    pub fn input_schema(tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };
            properties.insert(
                param.name.clone(),
                json!({
                    "type": schema_type,
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Descriptors in MCP `tools/list` form, in registration order.
    pub fn mcp_tools(spec: &ToolSpec) -> Vec<Value> {
        spec.all()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": Self::input_schema(tool),
                })
            })
            .collect()
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": Self::input_schema(tool),
        })
    }
}
