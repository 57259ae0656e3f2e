//! Rate limit configuration from TOML (`[rate_limit]` section)

use autoreply_application::RateLimitConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRateLimitConfig {
    /// Requests allowed per business per window
    pub limit: u32,
    pub window_secs: u64,
}

impl Default for FileRateLimitConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            window_secs: 60,
        }
    }
}

impl FileRateLimitConfig {
    pub fn to_config(&self) -> RateLimitConfig {
        RateLimitConfig::new(self.limit, Duration::from_secs(self.window_secs))
    }
}
