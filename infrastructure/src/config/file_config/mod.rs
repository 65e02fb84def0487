//! Raw TOML configuration data types
//!
//! These structs mirror the config file. Every section defaults, so a
//! partial file (or none) is valid.

mod assistant;
mod execution;
mod logging;
mod provider;

pub use assistant::FileAssistantConfig;
pub use execution::FileExecutionConfig;
pub use logging::FileLoggingConfig;
pub use provider::{FileProviderConfig, ProviderConfigError};

use clinic_application::QuerySettings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model service connection and model choice
    pub provider: FileProviderConfig,
    /// Conversation loop limits
    pub execution: FileExecutionConfig,
    /// System prompt override
    pub assistant: FileAssistantConfig,
    /// Transcript and log file locations
    pub logging: FileLoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A problem found by [`FileConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key, e.g. `execution.max_rounds`.
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.field, self.message)
    }
}

impl FileConfig {
    /// Settings every query of this run is sent with.
    pub fn to_query_settings(&self) -> QuerySettings {
        QuerySettings::default()
            .with_model(self.provider.parse_model())
            .with_system_prompt(self.assistant.resolve_system_prompt())
            .with_max_tokens(self.provider.max_tokens)
            .with_execution(self.execution.to_execution_params())
    }

    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.provider.model.trim().is_empty() {
            issues.push(ConfigIssue::error("provider.model", "model name cannot be empty"));
        }
        if self.provider.max_tokens == 0 {
            issues.push(ConfigIssue::error("provider.max_tokens", "must be at least 1"));
        }
        if self.provider.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "provider.request_timeout_secs",
                "must be at least 1",
            ));
        }
        if self.execution.max_rounds == 0 {
            issues.push(ConfigIssue::error(
                "execution.max_rounds",
                "must be at least 1, every query would fail",
            ));
        }
        if self.execution.round_timeout_secs == 0 || self.execution.total_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "execution.round_timeout_secs",
                "timeouts must be at least 1 second",
            ));
        }
        if self.execution.round_timeout_secs > self.execution.total_timeout_secs {
            issues.push(ConfigIssue::warning(
                "execution.round_timeout_secs",
                format!(
                    "round timeout ({}s) exceeds total timeout ({}s)",
                    self.execution.round_timeout_secs, self.execution.total_timeout_secs
                ),
            ));
        }

        issues
    }

    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}
