//! In-process adapters
//!
//! Single-instance implementations of the persistence, settings and rate
//! limiter ports. State lives for the lifetime of the process.

pub mod rate_limiter_store;
pub mod review_repository;
pub mod settings;

pub use rate_limiter_store::InMemoryRateLimiterStore;
pub use review_repository::InMemoryReviewRepository;
pub use settings::StaticBusinessSettings;
