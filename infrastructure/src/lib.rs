//! Infrastructure layer for clinic-assist
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Anthropic Messages gateway, the clinic
//! tool executor and schema converter, the MCP stdio server, the JSONL
//! transcript logger, and configuration file loading.

pub mod config;
pub mod logging;
pub mod mcp;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileAssistantConfig, FileConfig, FileExecutionConfig,
    FileLoggingConfig, FileProviderConfig, ProviderConfigError, Severity,
};
pub use logging::JsonlConversationLogger;
pub use mcp::{McpServer, McpServerError};
pub use providers::{AnthropicGateway, AnthropicSettings};
pub use tools::{ClinicToolExecutor, JsonSchemaToolConverter, default_tool_spec};
