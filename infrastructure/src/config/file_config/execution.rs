//! Loop control configuration from TOML (`[execution]` section)

use clinic_application::ExecutionParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// Maximum model requests per query (default: 10)
    pub max_rounds: usize,
    /// Per-round timeout in seconds (default: 60)
    pub round_timeout_secs: u64,
    /// Whole-query timeout in seconds (default: 300)
    pub total_timeout_secs: u64,
    /// Retries for transient model service failures (default: 2)
    pub max_retries: u32,
    /// Initial retry backoff in milliseconds (default: 500)
    pub retry_backoff_ms: u64,
    /// Run a round's tool calls concurrently (default: true)
    pub parallel_tools: bool,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        let params = ExecutionParams::default();
        Self {
            max_rounds: params.max_rounds,
            round_timeout_secs: params.round_timeout.as_secs(),
            total_timeout_secs: params.total_timeout.as_secs(),
            max_retries: params.max_retries,
            retry_backoff_ms: params.retry_backoff.as_millis() as u64,
            parallel_tools: params.parallel_tools,
        }
    }
}

impl FileExecutionConfig {
    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_max_rounds(self.max_rounds)
            .with_round_timeout(Duration::from_secs(self.round_timeout_secs))
            .with_total_timeout(Duration::from_secs(self.total_timeout_secs))
            .with_max_retries(self.max_retries)
            .with_retry_backoff(Duration::from_millis(self.retry_backoff_ms))
            .with_parallel_tools(self.parallel_tools)
    }
}
