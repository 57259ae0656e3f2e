//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`GenerationParams`] — reply call sampling, retries and timeout
//! - [`InsightsParams`] — digest call sampling and prompt size
//! - [`RateLimitConfig`] — per-business request window

pub mod generation_params;
pub mod rate_limit;

pub use generation_params::{GenerationParams, InsightsParams};
pub use rate_limit::RateLimitConfig;
