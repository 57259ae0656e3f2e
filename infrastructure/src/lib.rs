//! Infrastructure layer for review-autoreply
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod memory;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileActivityLogConfig, FileBatchConfig, FileBusinessConfig,
    FileConfig, FileGenerationConfig, FileInsightsConfig, FileOutputConfig, FileProviderConfig,
    FileRateLimitConfig,
};
pub use logging::JsonlActivityLog;
pub use memory::{InMemoryRateLimiterStore, InMemoryReviewRepository, StaticBusinessSettings};
pub use openai::gateway::OpenAiCompatibleGateway;
