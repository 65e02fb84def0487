//! Tool domain traits
//!
//! Contains pure validation logic for tool calls.
//! The async ToolExecutorPort is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolError;

/// Validator for tool calls
///
/// Validates a call against its definition without any I/O.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ToolError>;
}

/// Default implementation of ToolValidator
///
/// Rejects missing required parameters, parameters the definition does not
/// declare, and string-typed parameters carrying non-string values.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ToolError> {
        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                None if param.required => {
                    return Err(ToolError::invalid_argument(
                        &definition.name,
                        format!("missing required parameter '{}'", param.name),
                    ));
                }
                Some(value) if param.param_type == "string" && !value.is_string() => {
                    return Err(ToolError::invalid_argument(
                        &definition.name,
                        format!("parameter '{}' must be a string", param.name),
                    ));
                }
                _ => {}
            }
        }

        if let Some(unknown) = call
            .arguments
            .keys()
            .find(|name| definition.parameter(name).is_none())
        {
            return Err(ToolError::invalid_argument(
                &definition.name,
                format!("unknown parameter '{}'", unknown),
            ));
        }

        Ok(())
    }
}
