//! Tool domain entities

use super::value_objects::ToolError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of tools the assistant exposes.
///
/// Tool names arriving from the model are resolved to a `ToolKind` before
/// dispatch, so an unregistered name fails fast with
/// [`ToolError::UnknownTool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    CheckFaq,
    LookupAppointment,
    LookupLabResult,
    FindDoctor,
}

impl ToolKind {
    /// All tools in registration order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::CheckFaq,
        ToolKind::LookupAppointment,
        ToolKind::LookupLabResult,
        ToolKind::FindDoctor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::CheckFaq => "check_faq",
            ToolKind::LookupAppointment => "lookup_appointment",
            ToolKind::LookupLabResult => "lookup_lab_result",
            ToolKind::FindDoctor => "find_doctor",
        }
    }

    /// Name of the single string parameter each tool takes.
    pub fn argument_name(&self) -> &'static str {
        match self {
            ToolKind::CheckFaq => "question",
            ToolKind::LookupAppointment => "appointment_id",
            ToolKind::LookupLabResult => "lab_id",
            ToolKind::FindDoctor => "doctor_name",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

/// Definition of a tool the model may call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "check_faq")
    pub name: String,
    /// Human-readable description shown to the model
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Specification of the registered tools.
///
/// Keeps definitions in registration order so descriptor lists sent to the
/// model and to MCP hosts are stable. Registering a name twice replaces the
/// earlier definition in place.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        match self.tools.iter_mut().find(|t| t.name == tool.name) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Get a definition or fail with [`ToolError::UnknownTool`].
    pub fn require(&self, name: &str) -> Result<&ToolDefinition, ToolError> {
        self.get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A request from the model to invoke a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, serde_json::Value>,
    /// Correlation token assigned by the API (e.g. "toolu_abc123")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_id: Option<String>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
            native_id: None,
        }
    }

    /// Build a call from a native tool-use block.
    pub fn from_native(
        id: impl Into<String>,
        name: impl Into<String>,
        input: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            tool_name: name.into(),
            arguments: input,
            native_id: Some(id.into()),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_native_id(mut self, id: impl Into<String>) -> Self {
        self.native_id = Some(id.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or fail with [`ToolError::InvalidArgument`]
    pub fn require_string(&self, key: &str) -> Result<&str, ToolError> {
        self.get_string(key).ok_or_else(|| {
            ToolError::invalid_argument(
                &self.tool_name,
                format!("missing required string argument '{}'", key),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_kind_roundtrip() {
        for kind in ToolKind::ALL {
            let parsed: ToolKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_tool_kind_unknown_name() {
        let err = "cancel_appointment".parse::<ToolKind>().unwrap_err();
        assert_eq!(err, ToolError::UnknownTool("cancel_appointment".to_string()));
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("lookup_lab_result", "Look up lab results")
            .with_parameter(ToolParameter::new("lab_id", "The lab result ID", true));

        assert_eq!(tool.name, "lookup_lab_result");
        assert_eq!(tool.parameters.len(), 1);
        assert!(tool.parameter("lab_id").unwrap().required);
        assert!(tool.parameter("patient").is_none());
    }

    #[test]
    fn test_tool_spec_preserves_registration_order() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("find_doctor", "Doctor"))
            .register(ToolDefinition::new("check_faq", "FAQ"))
            .register(ToolDefinition::new("lookup_lab_result", "Lab"));

        let names: Vec<_> = spec.names().collect();
        assert_eq!(names, vec!["find_doctor", "check_faq", "lookup_lab_result"]);
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn test_tool_spec_reregister_replaces_in_place() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("check_faq", "old"))
            .register(ToolDefinition::new("find_doctor", "Doctor"))
            .register(ToolDefinition::new("check_faq", "new"));

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.all().next().unwrap().description, "new");
    }

    #[test]
    fn test_tool_spec_require() {
        let spec = ToolSpec::new().register(ToolDefinition::new("check_faq", "FAQ"));
        assert!(spec.require("check_faq").is_ok());
        assert!(matches!(
            spec.require("unknown"),
            Err(ToolError::UnknownTool(name)) if name == "unknown"
        ));
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("lookup_appointment")
            .with_arg("appointment_id", "APT-101")
            .with_native_id("toolu_1");

        assert_eq!(call.get_string("appointment_id"), Some("APT-101"));
        assert_eq!(call.require_string("appointment_id").unwrap(), "APT-101");
        assert_eq!(call.native_id.as_deref(), Some("toolu_1"));
        assert!(matches!(
            call.require_string("missing"),
            Err(ToolError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_non_string_argument_is_not_a_string() {
        let call = ToolCall::new("check_faq").with_arg("question", 42);
        assert!(call.get_string("question").is_none());
        assert!(call.require_string("question").is_err());
    }
}
