//! Fixed-window rate limiter
//!
//! One window per key (the business id). Windows live in a
//! [`RateLimiterStore`]; the limiter serializes its read-modify-write with an
//! async mutex, so it is exact within one process only.

use crate::config::RateLimitConfig;
use crate::ports::rate_limiter_store::{RateLimiterStore, RateWindow, StoreError};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Rate limit exceeded for '{key}', retry after {}s", .retry_after.as_secs())]
pub struct RateLimitExceeded {
    pub key: String,
    pub retry_after: Duration,
}

pub struct RateLimiter<S: RateLimiterStore + ?Sized> {
    store: Arc<S>,
    config: RateLimitConfig,
    lock: Mutex<()>,
}

impl<S: RateLimiterStore + ?Sized> RateLimiter<S> {
    pub fn new(store: Arc<S>, config: RateLimitConfig) -> Self {
        Self {
            store,
            config,
            lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Take one token for `key` if available
    pub async fn allow(&self, key: &str) -> bool {
        self.check(key).await.is_ok()
    }

    /// Like [`allow`](Self::allow) but reports how long to wait
    pub async fn check(&self, key: &str) -> Result<(), RateLimitExceeded> {
        self.check_at(key, Utc::now()).await
    }

    pub async fn check_at(&self, key: &str, now: DateTime<Utc>) -> Result<(), RateLimitExceeded> {
        let _guard = self.lock.lock().await;

        match self.take(key, now).await {
            Ok(outcome) => outcome,
            Err(e) => {
                // Store outage fails open.
                warn!("Rate limiter store failed for '{}', allowing: {}", key, e);
                Ok(())
            }
        }
    }

    async fn take(
        &self,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<Result<(), RateLimitExceeded>, StoreError> {
        match self.store.get(key).await? {
            Some(window) if now < window.reset_at => {
                if window.count < self.config.limit {
                    let count = self.store.increment(key).await?;
                    debug!("Rate limit '{}': {}/{}", key, count, self.config.limit);
                    Ok(Ok(()))
                } else {
                    let retry_after = (window.reset_at - now).to_std().unwrap_or(Duration::ZERO);
                    debug!("Rate limit '{}' exhausted", key);
                    Ok(Err(RateLimitExceeded {
                        key: key.to_string(),
                        retry_after,
                    }))
                }
            }
            _ => {
                if self.config.limit == 0 {
                    return Ok(Err(RateLimitExceeded {
                        key: key.to_string(),
                        retry_after: self.config.window,
                    }));
                }
                let window = RateWindow {
                    count: 1,
                    reset_at: window_end(now, self.config.window),
                };
                self.store.set(key, window, self.config.window).await?;
                debug!("Rate limit '{}': new window", key);
                Ok(Ok(()))
            }
        }
    }
}

fn window_end(now: DateTime<Utc>, window: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(window)
        .ok()
        .and_then(|w| now.checked_add_signed(w))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
