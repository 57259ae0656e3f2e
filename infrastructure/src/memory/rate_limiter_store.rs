//! Rate limiter windows kept in a process-local map

use async_trait::async_trait;
use autoreply_application::ports::rate_limiter_store::{RateLimiterStore, RateWindow, StoreError};
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Map-backed store.
///
/// Expiry is judged by the limiter's clock, not this store's: `get` returns
/// windows as stored, and opening a new window sweeps every window that ended
/// before it started.
#[derive(Debug, Default)]
pub struct InMemoryRateLimiterStore {
    windows: Mutex<HashMap<String, RateWindow>>,
}

impl InMemoryRateLimiterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently tracked (expired ones included until the next sweep)
    pub async fn len(&self) -> usize {
        self.windows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.windows.lock().await.is_empty()
    }
}

#[async_trait]
impl RateLimiterStore for InMemoryRateLimiterStore {
    async fn get(&self, key: &str) -> Result<Option<RateWindow>, StoreError> {
        Ok(self.windows.lock().await.get(key).copied())
    }

    async fn set(&self, key: &str, window: RateWindow, ttl: Duration) -> Result<(), StoreError> {
        let mut windows = self.windows.lock().await;
        if let Some(started_at) = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| window.reset_at.checked_sub_signed(ttl))
        {
            let before = windows.len();
            windows.retain(|_, w| w.reset_at > started_at);
            let swept = before - windows.len();
            if swept > 0 {
                debug!("Swept {} expired rate limit windows", swept);
            }
        }
        windows.insert(key.to_string(), window);
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<u32, StoreError> {
        let mut windows = self.windows.lock().await;
        let window = windows
            .get_mut(key)
            .ok_or_else(|| StoreError(format!("no active window for '{}'", key)))?;
        window.count = window.count.saturating_add(1);
        Ok(window.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_application::{RateLimitConfig, RateLimiter};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_new_window_sweeps_expired_keys() {
        let store = InMemoryRateLimiterStore::new();
        let ttl = Duration::from_secs(60);
        let now = Utc::now();
        let stale = RateWindow {
            count: 3,
            reset_at: now - chrono::Duration::seconds(1),
        };
        store.set("old-a", stale, ttl).await.unwrap();
        store.set("old-b", stale, ttl).await.unwrap();
        assert_eq!(store.len().await, 2);

        let fresh = RateWindow {
            count: 1,
            reset_at: now + chrono::Duration::seconds(60),
        };
        store.set("biz", fresh, ttl).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("old-a").await.unwrap(), None);
        assert_eq!(store.get("biz").await.unwrap(), Some(fresh));
    }

    #[tokio::test]
    async fn test_limiter_clock_decides_expiry() {
        let store = Arc::new(InMemoryRateLimiterStore::new());
        let limiter = RateLimiter::new(
            store.clone(),
            RateLimitConfig::new(1, Duration::from_secs(60)),
        );
        // A window that has already ended by wall-clock time
        let start = Utc::now() - chrono::Duration::seconds(600);

        assert!(limiter.check_at("biz", start).await.is_ok());
        let err = limiter
            .check_at("biz", start + chrono::Duration::seconds(10))
            .await
            .unwrap_err();
        assert_eq!(err.retry_after, Duration::from_secs(50));
        assert!(
            limiter
                .check_at("biz", start + chrono::Duration::seconds(60))
                .await
                .is_ok()
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_increment_requires_window() {
        let store = InMemoryRateLimiterStore::new();
        assert!(store.increment("missing").await.is_err());

        let window = RateWindow {
            count: 1,
            reset_at: Utc::now() + chrono::Duration::seconds(60),
        };
        store
            .set("biz", window, Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(store.increment("biz").await.unwrap(), 2);
        assert_eq!(store.get("biz").await.unwrap().unwrap().count, 2);
    }

    #[tokio::test]
    async fn test_limiter_over_memory_store() {
        let store = Arc::new(InMemoryRateLimiterStore::new());
        let limiter = RateLimiter::new(
            store.clone(),
            RateLimitConfig::new(2, Duration::from_secs(60)),
        );

        assert!(limiter.allow("biz-1").await);
        assert!(limiter.allow("biz-1").await);
        assert!(!limiter.allow("biz-1").await);
        assert!(limiter.allow("biz-2").await);
        assert_eq!(store.len().await, 2);
    }
}
