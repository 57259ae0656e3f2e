//! Batch Generate use case
//!
//! Drafts replies for many reviews in fixed-size chunks. Chunk *i* finishes
//! before chunk *i+1* is dispatched; reviews inside a chunk run concurrently.
//! The batch never fails as a whole: a failing or panicking item becomes that
//! item's template reply.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{BatchProgressNotifier, NoBatchProgress};
use crate::use_cases::generate_reply::GenerateReplyUseCase;
use autoreply_domain::{BatchResult, BrandVoice, BusinessId, GenerationResult, Review};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Input for the BatchGenerate use case
#[derive(Debug, Clone)]
pub struct BatchGenerateInput {
    pub reviews: Vec<Review>,
    pub business_id: BusinessId,
    /// Reviews per chunk; 0 is treated as 1
    pub chunk_size: usize,
    pub voice: BrandVoice,
}

impl BatchGenerateInput {
    pub fn new(reviews: Vec<Review>, business_id: BusinessId, voice: BrandVoice) -> Self {
        Self {
            reviews,
            business_id,
            chunk_size: DEFAULT_CHUNK_SIZE,
            voice,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// Use case for drafting replies to a batch of reviews
pub struct BatchGenerateUseCase<G: LlmGateway + 'static> {
    reply: GenerateReplyUseCase<G>,
}

impl<G: LlmGateway + 'static> BatchGenerateUseCase<G> {
    pub fn new(reply: GenerateReplyUseCase<G>) -> Self {
        Self { reply }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: BatchGenerateInput) -> BatchResult {
        self.execute_with_progress(input, &NoBatchProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: BatchGenerateInput,
        progress: &dyn BatchProgressNotifier,
    ) -> BatchResult {
        let chunk_size = input.chunk_size.max(1);
        let total = input.reviews.len();
        let chunks = total.div_ceil(chunk_size);

        info!(
            "Starting batch of {} reviews for business {} ({} chunks)",
            total, input.business_id, chunks
        );
        progress.on_batch_start(total, chunks);

        let voice = Arc::new(input.voice);
        let mut results = Vec::with_capacity(total);

        for (chunk_index, chunk) in input.reviews.chunks(chunk_size).enumerate() {
            debug!("Dispatching chunk {} ({} reviews)", chunk_index + 1, chunk.len());
            progress.on_chunk_start(chunk_index, chunk.len());
            results.extend(self.run_chunk(chunk, &voice, progress).await);
        }

        let batch = BatchResult::from_results(results);
        info!(
            "Batch finished: {} succeeded, {} failed",
            batch.success_count, batch.failure_count
        );
        progress.on_batch_complete(&batch);
        batch
    }

    /// Run one chunk concurrently and return its results in chunk order
    async fn run_chunk(
        &self,
        chunk: &[Review],
        voice: &Arc<BrandVoice>,
        progress: &dyn BatchProgressNotifier,
    ) -> Vec<GenerationResult> {
        let mut join_set = JoinSet::new();

        for (index, review) in chunk.iter().enumerate() {
            let reply = self.reply.clone();
            let review = review.clone();
            let voice = Arc::clone(voice);

            join_set.spawn(async move {
                let result = reply.execute(&review, &voice).await;
                (index, result)
            });
        }

        let mut slots: Vec<Option<GenerationResult>> = vec![None; chunk.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    progress.on_item_complete(&result);
                    slots[index] = Some(result);
                }
                Err(e) => {
                    // The slot stays empty and is filled with a template below.
                    warn!("Reply task failed: {}", e);
                }
            }
        }

        slots
            .into_iter()
            .zip(chunk)
            .map(|(slot, review)| {
                slot.unwrap_or_else(|| {
                    let result = GenerateReplyUseCase::<G>::fallback(
                        review,
                        voice,
                        "reply task aborted",
                        0,
                    );
                    progress.on_item_complete(&result);
                    result
                })
            })
            .collect()
    }
}
