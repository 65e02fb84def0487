//! Application layer for clinic-assist
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, QuerySettings};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{NoQueryProgress, QueryProgressNotifier},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::run_batch::{BatchItem, DEMO_QUERIES, RunBatchOutput, RunBatchUseCase};
pub use use_cases::run_query::{RunQueryError, RunQueryInput, RunQueryOutput, RunQueryUseCase};
