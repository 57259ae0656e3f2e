//! Rate limit policy

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed-window limit: at most `limit` requests per key per `window`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub limit: u32,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self { limit, window }
    }
}
