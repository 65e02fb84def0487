//! Assistant configuration from TOML (`[assistant]` section)

use clinic_domain::DEFAULT_SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Replaces the built-in system prompt. An empty string sends none.
    pub system_prompt: Option<String>,
}

impl FileAssistantConfig {
    pub fn resolve_system_prompt(&self) -> Option<String> {
        match &self.system_prompt {
            None => Some(DEFAULT_SYSTEM_PROMPT.to_string()),
            Some(prompt) if prompt.trim().is_empty() => None,
            Some(prompt) => Some(prompt.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_system_prompt() {
        assert_eq!(
            FileAssistantConfig::default().resolve_system_prompt().as_deref(),
            Some(DEFAULT_SYSTEM_PROMPT)
        );
        let empty = FileAssistantConfig {
            system_prompt: Some(String::new()),
        };
        assert_eq!(empty.resolve_system_prompt(), None);
        let custom = FileAssistantConfig {
            system_prompt: Some("Answer briefly.".to_string()),
        };
        assert_eq!(custom.resolve_system_prompt().as_deref(), Some("Answer briefly."));
    }
}
