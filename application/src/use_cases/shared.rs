//! Shared utilities for use cases.
//!
//! Bounded retry around the model request, used by every round of
//! [`RunQueryUseCase`](super::run_query::RunQueryUseCase).

use crate::config::ExecutionParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::QueryProgressNotifier;
use clinic_domain::LlmResponse;
use tracing::warn;

/// Request a completion, retrying retryable failures with exponential backoff.
///
/// Non-retryable errors and the error of the final attempt are returned as-is.
pub(crate) async fn complete_with_retry(
    gateway: &dyn LlmGateway,
    request: &CompletionRequest<'_>,
    params: &ExecutionParams,
    round: usize,
    progress: &dyn QueryProgressNotifier,
) -> Result<LlmResponse, GatewayError> {
    let mut attempt = 0u32;
    loop {
        match gateway.complete(request).await {
            Ok(response) => return Ok(response),
            Err(e) if e.is_retryable() && attempt < params.max_retries => {
                attempt += 1;
                let delay = params.backoff_for(attempt);
                warn!(
                    "Round {}: model request failed ({}), retry {}/{} in {:?}",
                    round, e, attempt, params.max_retries, delay
                );
                progress.on_retry(round, attempt, &e);
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
