//! LLM Gateway port
//!
//! Defines the interface for requesting completions from the model service.

use async_trait::async_trait;
use clinic_domain::{Conversation, LlmResponse, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Transport failures, rate limiting, 5xx responses and timeouts are
    /// transient. Everything else will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GatewayError::ConnectionError(_)
                | GatewayError::RateLimited(_)
                | GatewayError::ServerError { .. }
                | GatewayError::Timeout
        )
    }
}

/// A single completion request.
///
/// Borrows the conversation so the loop can reissue it every round without
/// copying the history.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub model: &'a Model,
    pub system: Option<&'a str>,
    pub max_tokens: u32,
    /// Tool descriptors in provider JSON Schema form.
    pub tools: &'a [serde_json::Value],
    pub conversation: &'a Conversation,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Request one completion over the full conversation.
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<LlmResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_subset() {
        assert!(GatewayError::ConnectionError("reset".into()).is_retryable());
        assert!(GatewayError::RateLimited("slow down".into()).is_retryable());
        assert!(
            GatewayError::ServerError {
                status: 529,
                message: "overloaded".into()
            }
            .is_retryable()
        );
        assert!(GatewayError::Timeout.is_retryable());

        assert!(!GatewayError::Authentication("bad key".into()).is_retryable());
        assert!(!GatewayError::RequestFailed("400".into()).is_retryable());
        assert!(!GatewayError::InvalidResponse("not json".into()).is_retryable());
        assert!(!GatewayError::Other("?".into()).is_retryable());
    }

    #[test]
    fn test_server_error_display() {
        let err = GatewayError::ServerError {
            status: 503,
            message: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "Server error (503): unavailable");
    }
}
