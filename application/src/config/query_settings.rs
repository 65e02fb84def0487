//! Per-query model settings.

use super::ExecutionParams;
use clinic_domain::{DEFAULT_SYSTEM_PROMPT, Model};

/// Settings shared by every query of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySettings {
    pub model: Model,
    /// `None` sends no system prompt at all.
    pub system_prompt: Option<String>,
    pub max_tokens: u32,
    pub execution: ExecutionParams,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            system_prompt: Some(DEFAULT_SYSTEM_PROMPT.to_string()),
            max_tokens: 1024,
            execution: ExecutionParams::default(),
        }
    }
}

impl QuerySettings {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_prompt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_execution(mut self, execution: ExecutionParams) -> Self {
        self.execution = execution;
        self
    }
}
