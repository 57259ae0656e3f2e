//! Generate Reply use case
//!
//! Drafts one reply in the business's brand voice. Never fails: any provider
//! problem turns into the deterministic template reply for the review's
//! rating and tone.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::use_cases::shared::complete_with_timeout;
use autoreply_domain::{
    BrandVoice, GenerationResult, ReplyPromptTemplate, Review, fallback_reply, sanitize_reply,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for drafting a single review reply
pub struct GenerateReplyUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    params: GenerationParams,
}

impl<G: LlmGateway + 'static> Clone for GenerateReplyUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            params: self.params.clone(),
        }
    }
}

impl<G: LlmGateway + 'static> GenerateReplyUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub async fn execute(&self, review: &Review, voice: &BrandVoice) -> GenerationResult {
        let request = CompletionRequest::new(
            ReplyPromptTemplate::system(voice),
            ReplyPromptTemplate::user(review),
        )
        .with_temperature(self.params.temperature)
        .with_max_tokens(self.params.max_tokens);

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            debug!("Requesting reply for review {} (attempt {})", review.id, attempts);

            let outcome = complete_with_timeout(
                self.gateway.as_ref(),
                &request,
                self.params.request_timeout,
            )
            .await
            .and_then(|completion| sanitize_reply(&completion.text).ok_or(GatewayError::EmptyResponse));

            match outcome {
                Ok(reply) => {
                    info!("Reply generated for review {}", review.id);
                    return GenerationResult::success(review.id.clone(), reply, attempts);
                }
                Err(e) if e.is_transient() && attempts <= self.params.max_retries => {
                    let delay = self.params.backoff_for(attempts);
                    warn!(
                        "Reply for review {} failed ({}), retrying in {}ms",
                        review.id,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    warn!("Reply for review {} fell back to template: {}", review.id, e);
                    return Self::fallback(review, voice, e.to_string(), attempts);
                }
            }
        }
    }

    /// Template result for `review`, used whenever no AI text is available
    pub fn fallback(
        review: &Review,
        voice: &BrandVoice,
        error: impl Into<String>,
        attempts: u32,
    ) -> GenerationResult {
        GenerationResult::fallback(
            review.id.clone(),
            fallback_reply(review.rating, voice.preset, &review.customer_name),
            error,
            attempts,
        )
    }
}
