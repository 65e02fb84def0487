//! Progress notification port
//!
//! Callbacks fired while a query runs. Every method has a no-op default so
//! reporters only implement what they display.

use crate::ports::llm_gateway::GatewayError;
use clinic_domain::{ToolCall, ToolResult};

/// Callback for progress updates during query execution
///
/// Implementations live in the presentation layer.
pub trait QueryProgressNotifier: Send + Sync {
    /// Called before each model request. `round` starts at 1.
    fn on_round_start(&self, _round: usize) {}

    /// Called when a failed model request is about to be retried.
    fn on_retry(&self, _round: usize, _attempt: u32, _error: &GatewayError) {}

    /// Called for each tool invocation before it runs.
    fn on_tool_call(&self, _round: usize, _call: &ToolCall) {}

    /// Called for each tool result, in request order.
    fn on_tool_result(&self, _round: usize, _result: &ToolResult) {}

    /// Called once the final answer is available.
    fn on_query_complete(&self, _rounds: usize, _tool_calls: usize) {}

    // ==================== Batch Callbacks ====================

    /// Called before query `index` (1-based) of `total` in a batch.
    fn on_batch_query_start(&self, _index: usize, _total: usize, _query: &str) {}

    /// Called when a batch query fails; the batch continues.
    fn on_batch_query_failed(&self, _index: usize, _error: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoQueryProgress;

impl QueryProgressNotifier for NoQueryProgress {}
