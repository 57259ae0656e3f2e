//! In-memory port doubles shared by the use case tests

use crate::ports::business_settings::{BusinessSettingsPort, SettingsError};
use crate::ports::llm_gateway::{Completion, CompletionRequest, GatewayError, LlmGateway};
use crate::ports::rate_limiter_store::{RateLimiterStore, RateWindow, StoreError};
use crate::ports::review_repository::{ActivityLog, RepositoryError, ReviewRepository};
use async_trait::async_trait;
use autoreply_domain::{
    ActivityRecord, BusinessId, BusinessInfo, RawBrandSettings, Rating, Review, ReviewId,
    ReviewInput, ReviewUpdate,
};
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// ==================== Gateways ====================

/// Pops one scripted outcome per call; errors once the script runs out
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<Completion, GatewayError>>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub fn new(responses: Vec<Result<Completion, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(Completion::new(text))])
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

/// Answers by inspecting the request; used where call order is not fixed
pub struct FnGateway<F> {
    respond: F,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl<F> FnGateway<F>
where
    F: Fn(&CompletionRequest) -> Result<Completion, GatewayError> + Send + Sync,
{
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<F> LlmGateway for FnGateway<F>
where
    F: Fn(&CompletionRequest) -> Result<Completion, GatewayError> + Send + Sync,
{
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.respond)(request)
    }
}

// ==================== Rate limiter stores ====================

#[derive(Default)]
pub struct MemoryStore {
    windows: Mutex<HashMap<String, RateWindow>>,
}

#[async_trait]
impl RateLimiterStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<RateWindow>, StoreError> {
        Ok(self.windows.lock().unwrap().get(key).copied())
    }

    async fn set(&self, key: &str, window: RateWindow, _ttl: Duration) -> Result<(), StoreError> {
        self.windows.lock().unwrap().insert(key.to_string(), window);
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<u32, StoreError> {
        let mut windows = self.windows.lock().unwrap();
        let window = windows
            .get_mut(key)
            .ok_or_else(|| StoreError(format!("no window for {}", key)))?;
        window.count += 1;
        Ok(window.count)
    }
}

pub struct FailingStore;

#[async_trait]
impl RateLimiterStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<RateWindow>, StoreError> {
        Err(StoreError("unreachable".to_string()))
    }

    async fn set(&self, _key: &str, _window: RateWindow, _ttl: Duration) -> Result<(), StoreError> {
        Err(StoreError("unreachable".to_string()))
    }

    async fn increment(&self, _key: &str) -> Result<u32, StoreError> {
        Err(StoreError("unreachable".to_string()))
    }
}

// ==================== Persistence ====================

#[derive(Default)]
pub struct MemoryRepository {
    reviews: Mutex<HashMap<(BusinessId, ReviewId), Review>>,
    failing_updates: Mutex<Vec<ReviewId>>,
}

impl MemoryRepository {
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.reviews.lock().unwrap();
            for review in reviews {
                map.insert((review.business_id.clone(), review.id.clone()), review);
            }
        }
        repo
    }

    pub fn fail_updates_for(&self, review_id: &str) {
        self.failing_updates
            .lock()
            .unwrap()
            .push(ReviewId::new(review_id));
    }

    pub fn stored(&self, business_id: &str, review_id: &str) -> Option<Review> {
        self.reviews
            .lock()
            .unwrap()
            .get(&(BusinessId::new(business_id), ReviewId::new(review_id)))
            .cloned()
    }
}

#[async_trait]
impl ReviewRepository for MemoryRepository {
    async fn create(&self, review: Review) -> Result<(), RepositoryError> {
        let key = (review.business_id.clone(), review.id.clone());
        let mut map = self.reviews.lock().unwrap();
        if map.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists(review.id));
        }
        map.insert(key, review);
        Ok(())
    }

    async fn get_by_id(
        &self,
        business_id: &BusinessId,
        review_id: &ReviewId,
    ) -> Result<Option<Review>, RepositoryError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .get(&(business_id.clone(), review_id.clone()))
            .cloned())
    }

    async fn update(
        &self,
        business_id: &BusinessId,
        review_id: &ReviewId,
        update: ReviewUpdate,
    ) -> Result<Review, RepositoryError> {
        if self.failing_updates.lock().unwrap().contains(review_id) {
            return Err(RepositoryError::Storage("write refused".to_string()));
        }
        let mut map = self.reviews.lock().unwrap();
        let review = map
            .get_mut(&(business_id.clone(), review_id.clone()))
            .ok_or_else(|| RepositoryError::NotFound(review_id.clone()))?;
        review.apply(&update);
        Ok(review.clone())
    }
}

#[derive(Default)]
pub struct RecordingActivityLog {
    pub records: Mutex<Vec<ActivityRecord>>,
}

impl RecordingActivityLog {
    pub fn kinds(&self) -> Vec<autoreply_domain::ActivityKind> {
        self.records.lock().unwrap().iter().map(|r| r.kind).collect()
    }
}

#[async_trait]
impl ActivityLog for RecordingActivityLog {
    async fn insert_activity(&self, record: ActivityRecord) -> Result<(), RepositoryError> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

// ==================== Settings ====================

pub struct FixedSettings {
    pub settings: RawBrandSettings,
    pub info: BusinessInfo,
}

impl Default for FixedSettings {
    fn default() -> Self {
        Self {
            settings: RawBrandSettings {
                tone_preset: Some("friendly".to_string()),
                ..Default::default()
            },
            info: BusinessInfo::new("Bella's Bistro").with_industry("restaurant"),
        }
    }
}

#[async_trait]
impl BusinessSettingsPort for FixedSettings {
    async fn load(
        &self,
        _business_id: &BusinessId,
    ) -> Result<(RawBrandSettings, BusinessInfo), SettingsError> {
        Ok((self.settings.clone(), self.info.clone()))
    }
}

// ==================== Fixtures ====================

pub fn review(id: &str, rating: i64, text: &str, name: &str) -> Review {
    Review::new(
        ReviewId::new(id),
        BusinessId::new("biz-1"),
        Rating::new(rating).unwrap(),
        text,
        name,
        Utc::now(),
    )
}

pub fn input(id: &str, rating: i64, text: &str, name: &str) -> ReviewInput {
    ReviewInput::new(id, rating, text, name)
}
