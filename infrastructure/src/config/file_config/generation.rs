//! Generation settings from TOML (`[generation]`, `[insights]`, `[batch]`)

use autoreply_application::{DEFAULT_CHUNK_SIZE, GenerationParams, InsightsParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reply generation call policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Retries for transient provider errors (0 = template reply immediately)
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            max_retries: params.max_retries,
            retry_backoff_ms: params.retry_backoff.as_millis() as u64,
            request_timeout_secs: params.request_timeout.as_secs(),
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_max_retries(self.max_retries)
            .with_retry_backoff(Duration::from_millis(self.retry_backoff_ms))
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }
}

/// Digest call policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInsightsConfig {
    pub temperature: f32,
    pub max_tokens: u32,
    pub max_excerpts: usize,
    pub request_timeout_secs: u64,
}

impl Default for FileInsightsConfig {
    fn default() -> Self {
        let params = InsightsParams::default();
        Self {
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            max_excerpts: params.max_excerpts,
            request_timeout_secs: params.request_timeout.as_secs(),
        }
    }
}

impl FileInsightsConfig {
    pub fn to_params(&self) -> InsightsParams {
        InsightsParams {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            max_excerpts: self.max_excerpts,
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Reviews processed concurrently per chunk
    pub chunk_size: usize,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
