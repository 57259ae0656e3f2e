//! Auto-reply service
//!
//! The caller-facing entry points. Each one validates input, takes a rate
//! limit token for the business, runs the matching use case and writes the
//! outcome back through the persistence ports.

use crate::ports::business_settings::{BusinessSettingsPort, SettingsError};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{BatchProgressNotifier, NoBatchProgress};
use crate::ports::rate_limiter_store::RateLimiterStore;
use crate::ports::review_repository::{ActivityLog, RepositoryError, ReviewRepository};
use crate::services::RateLimiter;
use crate::use_cases::batch_generate::{
    BatchGenerateInput, BatchGenerateUseCase, DEFAULT_CHUNK_SIZE,
};
use crate::use_cases::generate_insights::{GenerateInsightsError, GenerateInsightsUseCase};
use crate::use_cases::generate_reply::GenerateReplyUseCase;
use crate::use_cases::review_workflow::{ReviewAction, ReviewWorkflowUseCase, WorkflowError};
use autoreply_domain::{
    ActivityKind, ActivityRecord, BatchResult, BrandVoice, BrandVoiceResolver, BusinessId,
    GenerationResult, InputValidationError, InsightsBundle, ReportingPeriod, Review, ReviewId,
    ReviewInput, ReviewStatus, ReviewUpdate, validate_all,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced to the caller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("Invalid input: {}", format_input_errors(.0))]
    InvalidInput(Vec<InputValidationError>),

    #[error("Rate limit exceeded, retry after {}s", .retry_after.as_secs())]
    RateLimited { retry_after: Duration },

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Insights(#[from] GenerateInsightsError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

fn format_input_errors(errors: &[InputValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Options for a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub chunk_size: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

pub struct AutoReplyService<G: LlmGateway + 'static> {
    reply: GenerateReplyUseCase<G>,
    insights: GenerateInsightsUseCase<G>,
    repository: Arc<dyn ReviewRepository>,
    activity_log: Arc<dyn ActivityLog>,
    settings: Arc<dyn BusinessSettingsPort>,
    rate_limiter: Arc<RateLimiter<dyn RateLimiterStore>>,
}

impl<G: LlmGateway + 'static> AutoReplyService<G> {
    pub fn new(
        reply: GenerateReplyUseCase<G>,
        insights: GenerateInsightsUseCase<G>,
        repository: Arc<dyn ReviewRepository>,
        activity_log: Arc<dyn ActivityLog>,
        settings: Arc<dyn BusinessSettingsPort>,
        rate_limiter: Arc<RateLimiter<dyn RateLimiterStore>>,
    ) -> Self {
        Self {
            reply,
            insights,
            repository,
            activity_log,
            settings,
            rate_limiter,
        }
    }

    /// Draft and store a reply for one review
    pub async fn generate_single_reply(
        &self,
        input: ReviewInput,
        business_id: &BusinessId,
    ) -> Result<GenerationResult, ServiceError> {
        let review = input
            .validate(business_id, Utc::now())
            .map_err(ServiceError::InvalidInput)?;

        self.take_token(business_id).await?;
        let voice = self.load_voice(business_id).await?;

        let result = self.reply.execute(&review, &voice).await;
        self.persist_outcome(&review, &result).await;
        self.record(Self::generation_record(business_id, &result)).await;

        Ok(result)
    }

    /// Draft and store replies for a batch of reviews
    pub async fn generate_batch_replies(
        &self,
        inputs: Vec<ReviewInput>,
        business_id: &BusinessId,
        options: BatchOptions,
    ) -> Result<BatchResult, ServiceError> {
        self.generate_batch_replies_with_progress(inputs, business_id, options, &NoBatchProgress)
            .await
    }

    pub async fn generate_batch_replies_with_progress(
        &self,
        inputs: Vec<ReviewInput>,
        business_id: &BusinessId,
        options: BatchOptions,
        progress: &dyn BatchProgressNotifier,
    ) -> Result<BatchResult, ServiceError> {
        let reviews =
            validate_all(&inputs, business_id, Utc::now()).map_err(ServiceError::InvalidInput)?;

        self.take_token(business_id).await?;
        let voice = self.load_voice(business_id).await?;

        let batch = BatchGenerateUseCase::new(self.reply.clone())
            .execute_with_progress(
                BatchGenerateInput::new(reviews.clone(), business_id.clone(), voice)
                    .with_chunk_size(options.chunk_size),
                progress,
            )
            .await;

        // Writes are independent; a failed write never aborts the rest.
        for (review, result) in reviews.iter().zip(&batch.results) {
            self.persist_outcome(review, result).await;
            if !result.success {
                self.record(Self::generation_record(business_id, result)).await;
            }
        }

        self.record(
            ActivityRecord::new(
                business_id.clone(),
                ActivityKind::BatchCompleted,
                format!(
                    "Batch of {} reviews: {} succeeded, {} failed",
                    batch.total, batch.success_count, batch.failure_count
                ),
            )
            .with_metadata(json!({
                "total": batch.total,
                "successCount": batch.success_count,
                "failureCount": batch.failure_count,
                "chunkSize": options.chunk_size.max(1),
            })),
        )
        .await;

        Ok(batch)
    }

    /// Digest over the reviews that fall in `period`
    pub async fn generate_insights(
        &self,
        inputs: Vec<ReviewInput>,
        business_id: &BusinessId,
        period: ReportingPeriod,
    ) -> Result<InsightsBundle, ServiceError> {
        let reviews =
            validate_all(&inputs, business_id, Utc::now()).map_err(ServiceError::InvalidInput)?;

        self.take_token(business_id).await?;

        let bundle = self.insights.execute(&reviews, &period).await?;

        self.record(
            ActivityRecord::new(
                business_id.clone(),
                ActivityKind::InsightsGenerated,
                format!("Insights generated for {}", period.label()),
            )
            .with_metadata(json!({
                "positiveThemes": bundle.positive_themes.len(),
                "improvementThemes": bundle.improvement_themes.len(),
                "highlights": bundle.highlights.len(),
                "overallConfidence": bundle.overall_confidence,
            })),
        )
        .await;

        Ok(bundle)
    }

    /// Apply a lifecycle action to a stored review
    pub async fn review_action(
        &self,
        business_id: &BusinessId,
        review_id: &ReviewId,
        action: ReviewAction,
    ) -> Result<Review, ServiceError> {
        let workflow =
            ReviewWorkflowUseCase::new(Arc::clone(&self.repository), Arc::clone(&self.activity_log));
        Ok(workflow.execute(business_id, review_id, action).await?)
    }

    async fn take_token(&self, business_id: &BusinessId) -> Result<(), ServiceError> {
        self.rate_limiter
            .check(business_id.as_str())
            .await
            .map_err(|e| {
                warn!("{}", e);
                ServiceError::RateLimited {
                    retry_after: e.retry_after,
                }
            })
    }

    async fn load_voice(&self, business_id: &BusinessId) -> Result<BrandVoice, ServiceError> {
        let (settings, info) = self.settings.load(business_id).await?;
        Ok(BrandVoiceResolver::resolve(&settings, &info))
    }

    /// Write generation fields back, creating the review on first sight
    async fn persist_outcome(&self, review: &Review, result: &GenerationResult) {
        let record = match self.write_outcome(review, result).await {
            Ok(None) => return,
            Ok(Some(status)) => {
                info!(
                    "Review {} is {}, keeping its stored reply",
                    review.id, status
                );
                ActivityRecord::new(
                    review.business_id.clone(),
                    ActivityKind::ReplyDiscarded,
                    format!("Generated reply discarded, review is {}", status),
                )
                .with_metadata(json!({ "status": status.as_str() }))
            }
            Err(e) => {
                warn!("Failed to store reply for review {}: {}", review.id, e);
                ActivityRecord::new(
                    review.business_id.clone(),
                    ActivityKind::ReplyPersistFailed,
                    format!("Reply could not be saved: {}", e),
                )
            }
        };
        self.record(record.for_review(review.id.clone())).await;
    }

    /// Returns the stored status when the review is terminal and was left untouched
    async fn write_outcome(
        &self,
        review: &Review,
        result: &GenerationResult,
    ) -> Result<Option<ReviewStatus>, RepositoryError> {
        let update = ReviewUpdate::from_generation(result);
        let existing = self
            .repository
            .get_by_id(&review.business_id, &review.id)
            .await?;

        match existing {
            None => {
                let mut fresh = review.clone();
                fresh.apply(&update);
                self.repository.create(fresh).await?;
                Ok(None)
            }
            Some(stored) if stored.status.is_terminal() => Ok(Some(stored.status)),
            Some(_) => {
                self.repository
                    .update(&review.business_id, &review.id, update)
                    .await?;
                Ok(None)
            }
        }
    }

    async fn record(&self, record: ActivityRecord) {
        let kind = record.kind;
        if let Err(e) = self.activity_log.insert_activity(record).await {
            warn!("Failed to record {} activity: {}", kind, e);
        }
    }

    fn generation_record(business_id: &BusinessId, result: &GenerationResult) -> ActivityRecord {
        let (kind, message) = if result.success {
            (ActivityKind::ReplyGenerated, "Reply drafted".to_string())
        } else {
            info!("Review {} received a template reply", result.review_id);
            (
                ActivityKind::ReplyGenerationFailed,
                format!(
                    "Template reply used: {}",
                    result.error.as_deref().unwrap_or("unknown error")
                ),
            )
        };

        ActivityRecord::new(business_id.clone(), kind, message)
            .for_review(result.review_id.clone())
            .with_metadata(json!({ "attempts": result.attempts }))
    }
}
