//! Rate limiter storage port
//!
//! The limiter keeps its windows behind this trait so a shared store can
//! replace the in-process map when running more than one instance.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Counter for one key within the current fixed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateWindow {
    pub count: u32,
    pub reset_at: DateTime<Utc>,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Rate limiter store error: {0}")]
pub struct StoreError(pub String);

#[async_trait]
pub trait RateLimiterStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<RateWindow>, StoreError>;

    /// Replace the window for `key`; the store may drop it after `ttl`
    async fn set(&self, key: &str, window: RateWindow, ttl: Duration) -> Result<(), StoreError>;

    /// Increment the count of an existing window and return the new count
    async fn increment(&self, key: &str) -> Result<u32, StoreError>;
}
