//! Execution parameters: conversation loop control.
//!
//! [`ExecutionParams`] groups the limits that keep
//! [`RunQueryUseCase`](crate::use_cases::run_query::RunQueryUseCase) live
//! when the model service stalls or keeps requesting tools.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Conversation loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum model requests per query. A tool-use completion on the last
    /// allowed round fails the query with `RoundLimitExceeded`.
    pub max_rounds: usize,
    /// Limit for one round's model request, retries included.
    pub round_timeout: Duration,
    /// Limit for the whole query.
    pub total_timeout: Duration,
    /// Retries after a retryable gateway failure.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further attempt.
    pub retry_backoff: Duration,
    /// Run a round's tool calls concurrently.
    pub parallel_tools: bool,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            round_timeout: Duration::from_secs(60),
            total_timeout: Duration::from_secs(300),
            max_retries: 2,
            retry_backoff: Duration::from_millis(500),
            parallel_tools: true,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max;
        self
    }

    pub fn with_round_timeout(mut self, timeout: Duration) -> Self {
        self.round_timeout = timeout;
        self
    }

    pub fn with_total_timeout(mut self, timeout: Duration) -> Self {
        self.total_timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_parallel_tools(mut self, parallel: bool) -> Self {
        self.parallel_tools = parallel;
        self
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.retry_backoff.saturating_mul(1u32 << exponent)
    }
}
