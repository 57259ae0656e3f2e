//! Generation parameters — provider call policy for use cases.
//!
//! [`GenerationParams`] controls single-reply calls (sampling, retry, timeout).
//! [`InsightsParams`] controls the digest call. These are application-layer
//! concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reply generation call policy.
///
/// `max_retries = 0` means a failed call falls straight through to the
/// template reply. Only transient gateway errors are retried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Extra attempts after the first call.
    pub max_retries: u32,
    /// Delay before the first retry; doubles for each further retry.
    pub retry_backoff: Duration,
    /// Upper bound for a single provider call.
    pub request_timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 300,
            max_retries: 0,
            retry_backoff: Duration::from_millis(500),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Delay before retry number `retry` (1-based)
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.retry_backoff.saturating_mul(factor)
    }
}

/// Digest call policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsParams {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Reviews quoted in the prompt; the rest only count towards statistics.
    pub max_excerpts: usize,
    pub request_timeout: Duration,
}

impl Default for InsightsParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 2000,
            max_excerpts: 50,
            request_timeout: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.temperature, 0.3);
        assert_eq!(params.max_tokens, 300);
        assert_eq!(params.max_retries, 0);
        assert_eq!(params.request_timeout, Duration::from_secs(30));

        let insights = InsightsParams::default();
        assert_eq!(insights.max_tokens, 2000);
        assert_eq!(insights.max_excerpts, 50);
    }

    #[test]
    fn test_backoff_doubles() {
        let params = GenerationParams::default().with_retry_backoff(Duration::from_millis(100));
        assert_eq!(params.backoff_for(1), Duration::from_millis(100));
        assert_eq!(params.backoff_for(2), Duration::from_millis(200));
        assert_eq!(params.backoff_for(3), Duration::from_millis(400));
    }
}
