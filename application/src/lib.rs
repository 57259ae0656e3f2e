//! Application layer for review-autoreply
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod services;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{GenerationParams, InsightsParams, RateLimitConfig};
pub use ports::{
    business_settings::{BusinessSettingsPort, SettingsError},
    llm_gateway::{Completion, CompletionRequest, GatewayError, LlmGateway, TokenUsage},
    progress::{BatchProgressNotifier, NoBatchProgress},
    rate_limiter_store::{RateLimiterStore, RateWindow, StoreError},
    review_repository::{ActivityLog, NoActivityLog, RepositoryError, ReviewRepository},
};
pub use services::{RateLimitExceeded, RateLimiter};
pub use use_cases::auto_reply_service::{AutoReplyService, BatchOptions, ServiceError};
pub use use_cases::batch_generate::{BatchGenerateInput, BatchGenerateUseCase, DEFAULT_CHUNK_SIZE};
pub use use_cases::generate_insights::{GenerateInsightsError, GenerateInsightsUseCase};
pub use use_cases::generate_reply::GenerateReplyUseCase;
pub use use_cases::review_workflow::{ReviewAction, ReviewWorkflowUseCase, WorkflowError};
