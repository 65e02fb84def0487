//! Run Query use case.
//!
//! Drives one patient query through the multi-round tool-use loop:
//!
//! 1. Start a [`Conversation`] with the query as the first user turn
//! 2. Request a completion over the whole conversation plus the tool descriptors
//! 3. On a tool-use completion, append it, run every requested tool and append
//!    all results as one tool-result turn, then go back to 2
//! 4. Otherwise join the completion's text blocks into the answer
//!
//! The loop is bounded by [`ExecutionParams`]: a round cap, a per-round
//! timeout and a total timeout.

use crate::config::{ExecutionParams, QuerySettings};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::QueryProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::shared::complete_with_retry;
use clinic_domain::util::preview;
use clinic_domain::{Conversation, LlmResponse, Query, ToolCall, ToolError, ToolResult};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a query.
#[derive(Error, Debug)]
pub enum RunQueryError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Round limit exceeded: model still requested tools after {max_rounds} rounds")]
    RoundLimitExceeded { max_rounds: usize },

    #[error("Round {round} timed out after {timeout:?}")]
    RoundTimeout { round: usize, timeout: Duration },

    #[error("Query timed out after {timeout:?}")]
    TotalTimeout { timeout: Duration },
}

/// Input for the [`RunQueryUseCase`].
#[derive(Debug, Clone)]
pub struct RunQueryInput {
    pub query: Query,
    pub settings: QuerySettings,
}

impl RunQueryInput {
    pub fn new(query: Query, settings: QuerySettings) -> Self {
        Self { query, settings }
    }
}

/// Result of a completed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunQueryOutput {
    /// Text blocks of the final completion joined with a single space.
    pub answer: String,
    /// Model requests made, the final one included.
    pub rounds: usize,
    /// Tool invocations executed across all rounds.
    pub tool_calls: usize,
}

/// Use case for answering a query with tool use.
pub struct RunQueryUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for RunQueryUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            tool_executor: self.tool_executor.clone(),
            tool_schema: self.tool_schema.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl RunQueryUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run the query to a final answer.
    pub async fn execute(
        &self,
        input: RunQueryInput,
        progress: &dyn QueryProgressNotifier,
    ) -> Result<RunQueryOutput, RunQueryError> {
        let timeout = input.settings.execution.total_timeout;
        match tokio::time::timeout(timeout, self.run_loop(&input, progress)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Query timed out after {:?}", timeout);
                Err(RunQueryError::TotalTimeout { timeout })
            }
        }
    }

    async fn run_loop(
        &self,
        input: &RunQueryInput,
        progress: &dyn QueryProgressNotifier,
    ) -> Result<RunQueryOutput, RunQueryError> {
        let settings = &input.settings;
        let execution = &settings.execution;
        info!("Starting query: {}", preview(input.query.content(), 100));

        let tools = self
            .tool_schema
            .all_tools_schema(self.tool_executor.tool_spec());
        debug!(
            "Query: using model {}, {} tools available",
            settings.model,
            tools.len()
        );

        self.conversation_logger.log(ConversationEvent::new(
            ConversationEvent::QUERY_STARTED,
            serde_json::json!({
                "query": input.query.content(),
                "model": settings.model.to_string(),
            }),
        ));

        let mut conversation = Conversation::new(input.query.content());
        let mut tool_call_count = 0usize;
        let mut round = 0usize;

        loop {
            if round >= execution.max_rounds {
                warn!("Query exceeded max_rounds ({})", execution.max_rounds);
                return Err(RunQueryError::RoundLimitExceeded {
                    max_rounds: execution.max_rounds,
                });
            }
            round += 1;

            progress.on_round_start(round);
            let response = self
                .request_round(&conversation, &tools, settings, round, progress)
                .await?;
            self.log_response(round, &response);

            if !response.wants_tools() {
                let answer = response.text_content();
                info!(
                    "Query completed in {} rounds ({} tool calls)",
                    round, tool_call_count
                );
                progress.on_query_complete(round, tool_call_count);
                self.conversation_logger.log(ConversationEvent::new(
                    ConversationEvent::QUERY_COMPLETED,
                    serde_json::json!({
                        "rounds": round,
                        "tool_calls": tool_call_count,
                        "answer": answer,
                    }),
                ));
                return Ok(RunQueryOutput {
                    answer,
                    rounds: round,
                    tool_calls: tool_call_count,
                });
            }

            if round == execution.max_rounds {
                warn!(
                    "Model still requested tools on the last allowed round ({})",
                    round
                );
                return Err(RunQueryError::RoundLimitExceeded {
                    max_rounds: execution.max_rounds,
                });
            }

            conversation.push_assistant(&response);
            let results = self
                .execute_tools(&response.tool_calls(), execution, round, progress)
                .await?;
            tool_call_count += results.len();

            debug!(
                "Round {}/{}: sending {} tool results",
                round,
                execution.max_rounds,
                results.len()
            );
            conversation.push_tool_results(results);
        }
    }

    async fn request_round(
        &self,
        conversation: &Conversation,
        tools: &[serde_json::Value],
        settings: &QuerySettings,
        round: usize,
        progress: &dyn QueryProgressNotifier,
    ) -> Result<LlmResponse, RunQueryError> {
        let request = CompletionRequest {
            model: &settings.model,
            system: settings.system_prompt.as_deref(),
            max_tokens: settings.max_tokens,
            tools,
            conversation,
        };
        let timeout = settings.execution.round_timeout;
        let attempt = complete_with_retry(
            self.gateway.as_ref(),
            &request,
            &settings.execution,
            round,
            progress,
        );
        match tokio::time::timeout(timeout, attempt).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!("Round {} timed out after {:?}", round, timeout);
                Err(RunQueryError::RoundTimeout { round, timeout })
            }
        }
    }

    /// Run every tool call of one round and return results in request order.
    async fn execute_tools(
        &self,
        calls: &[ToolCall],
        execution: &ExecutionParams,
        round: usize,
        progress: &dyn QueryProgressNotifier,
    ) -> Result<Vec<ToolResult>, RunQueryError> {
        // A call without a correlation token cannot be answered.
        let mut ids = Vec::with_capacity(calls.len());
        for call in calls {
            let id = call.native_id.clone().ok_or_else(|| {
                ToolError::invalid_argument(&call.tool_name, "tool use block has no id")
            })?;
            ids.push(id);
        }

        for (call, id) in calls.iter().zip(&ids) {
            progress.on_tool_call(round, call);
            self.conversation_logger.log(ConversationEvent::new(
                ConversationEvent::TOOL_CALL,
                serde_json::json!({
                    "round": round,
                    "id": id,
                    "tool": call.tool_name,
                    "arguments": call.arguments,
                }),
            ));
        }

        let outputs = if execution.parallel_tools {
            futures::future::join_all(calls.iter().map(|call| self.tool_executor.execute(call)))
                .await
        } else {
            let mut outputs = Vec::with_capacity(calls.len());
            for call in calls {
                outputs.push(self.tool_executor.execute(call).await);
            }
            outputs
        };

        let mut results = Vec::with_capacity(calls.len());
        for ((call, id), output) in calls.iter().zip(ids).zip(outputs) {
            let output = output.inspect_err(|e| {
                warn!("Tool '{}' failed: {}", call.tool_name, e);
            })?;
            let result = ToolResult::new(id, &call.tool_name, output);
            debug!(
                "Tool '{}' returned: {}",
                result.tool_name,
                preview(result.output(), 100)
            );
            progress.on_tool_result(round, &result);
            self.conversation_logger.log(ConversationEvent::new(
                ConversationEvent::TOOL_RESULT,
                serde_json::json!({
                    "round": round,
                    "id": result.tool_use_id,
                    "tool": result.tool_name,
                    "output": result.output,
                }),
            ));
            results.push(result);
        }
        Ok(results)
    }

    fn log_response(&self, round: usize, response: &LlmResponse) {
        self.conversation_logger.log(ConversationEvent::new(
            ConversationEvent::LLM_RESPONSE,
            serde_json::json!({
                "round": round,
                "model": response.model,
                "stop_reason": response.stop_reason,
                "text": response.text_content(),
                "tool_uses": response.tool_calls().len(),
            }),
        ));
    }
}
