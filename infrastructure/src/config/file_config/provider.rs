//! Provider configuration from TOML (`[provider]` section)

use crate::providers::AnthropicSettings;
use clinic_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderConfigError {
    #[error("no API key: set {env} or [provider] api_key")]
    MissingApiKey { env: String },
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable holding the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended: use env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Model identifier or short alias.
    pub model: String,
    /// Max output tokens per response.
    pub max_tokens: u32,
    /// HTTP timeout for one request.
    pub request_timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            model: Model::default().to_string(),
            max_tokens: 1024,
            request_timeout_secs: 60,
        }
    }
}

impl FileProviderConfig {
    pub fn parse_model(&self) -> Model {
        let Ok(model) = self.model.trim().parse::<Model>();
        model
    }

    /// The configured key, falling back to the environment variable.
    pub fn resolve_api_key(&self) -> Result<String, ProviderConfigError> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.clone());
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderConfigError::MissingApiKey {
                env: self.api_key_env.clone(),
            })
    }

    pub fn to_anthropic_settings(&self) -> Result<AnthropicSettings, ProviderConfigError> {
        Ok(AnthropicSettings {
            api_key: self.resolve_api_key()?,
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        })
    }
}
