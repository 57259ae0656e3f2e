//! Shared utilities for use cases.
//!
//! Provider calls bounded by a timeout, used by the reply and insights use
//! cases.

use crate::ports::llm_gateway::{Completion, CompletionRequest, GatewayError, LlmGateway};
use std::time::Duration;

/// Run one completion, mapping an elapsed deadline to [`GatewayError::Timeout`].
pub(crate) async fn complete_with_timeout<G: LlmGateway + ?Sized>(
    gateway: &G,
    request: &CompletionRequest,
    timeout: Duration,
) -> Result<Completion, GatewayError> {
    match tokio::time::timeout(timeout, gateway.complete(request)).await {
        Ok(result) => result,
        Err(_) => Err(GatewayError::Timeout),
    }
}
