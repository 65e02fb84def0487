//! Port for structured conversation logging.
//!
//! `tracing` carries human-readable diagnostics. This port records the
//! conversation itself (model responses, tool calls and results) as
//! machine-readable events, typically one JSONL line each.

use serde_json::Value;

/// A structured conversation event.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    /// Event type identifier (e.g. "llm_response", "tool_call").
    pub event_type: &'static str,
    /// Event-specific fields.
    pub payload: Value,
}

impl ConversationEvent {
    pub const QUERY_STARTED: &'static str = "query_started";
    pub const LLM_RESPONSE: &'static str = "llm_response";
    pub const TOOL_CALL: &'static str = "tool_call";
    pub const TOOL_RESULT: &'static str = "tool_result";
    pub const QUERY_COMPLETED: &'static str = "query_completed";

    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events.
///
/// `log` is synchronous and infallible; a sink that cannot write drops the
/// event rather than failing the query.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
