//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation transcript. Disabled when unset.
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily-rolling diagnostic log files. Disabled when unset.
    pub dir: Option<PathBuf>,
}
