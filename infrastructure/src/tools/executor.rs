//! Clinic tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! ```text
//! ToolExecutorPort::execute(call)
//!   ├─ ToolSpec::require(name)      → UnknownTool if not registered
//!   ├─ ToolValidator::validate()    → InvalidArgument on bad arguments
//!   └─ ToolKind::from_str(name)     → clinic::execute(kind, call)
//! ```

use super::clinic;
use async_trait::async_trait;
use clinic_application::ports::tool_executor::ToolExecutorPort;
use clinic_domain::tool::{
    entities::{ToolCall, ToolKind, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::ToolError,
};
use tracing::debug;

/// Executor for the four clinic lookup tools.
///
/// Lookups are pure reads over `'static` tables, so calls run inline on the
/// caller's task.
#[derive(Debug, Clone)]
pub struct ClinicToolExecutor {
    tool_spec: ToolSpec,
}

impl ClinicToolExecutor {
    /// Create an executor with all four tools registered.
    pub fn new() -> Self {
        Self {
            tool_spec: super::default_tool_spec(),
        }
    }

    /// Create an executor limited to a custom [`ToolSpec`].
    ///
    /// Names in the spec that are not clinic tools fail as `UnknownTool`
    /// when called.
    pub fn with_tools(tool_spec: ToolSpec) -> Self {
        Self { tool_spec }
    }

    /// Resolve, validate and run a call.
    pub fn execute_call(&self, call: &ToolCall) -> Result<String, ToolError> {
        let definition = self.tool_spec.require(&call.tool_name)?;
        DefaultToolValidator.validate(call, definition)?;
        let kind: ToolKind = call.tool_name.parse()?;

        debug!(tool = %kind, "Executing tool");
        clinic::execute(kind, call)
    }
}

impl Default for ClinicToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for ClinicToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> Result<String, ToolError> {
        self.execute_call(call)
    }
}
