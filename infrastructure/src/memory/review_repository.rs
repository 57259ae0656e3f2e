//! Reviews kept in a process-local map, keyed by business then review id

use async_trait::async_trait;
use autoreply_application::ports::review_repository::{RepositoryError, ReviewRepository};
use autoreply_domain::{BusinessId, Review, ReviewId, ReviewUpdate};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    reviews: RwLock<HashMap<BusinessId, HashMap<ReviewId, Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace reviews without the duplicate check of `create`
    pub async fn seed(&self, reviews: impl IntoIterator<Item = Review>) {
        let mut map = self.reviews.write().await;
        for review in reviews {
            map.entry(review.business_id.clone())
                .or_default()
                .insert(review.id.clone(), review);
        }
    }

    /// All reviews of one business, ordered by id
    pub async fn list(&self, business_id: &BusinessId) -> Vec<Review> {
        let map = self.reviews.read().await;
        let mut reviews: Vec<Review> = map
            .get(business_id)
            .map(|reviews| reviews.values().cloned().collect())
            .unwrap_or_default();
        reviews.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        reviews
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, review: Review) -> Result<(), RepositoryError> {
        let mut map = self.reviews.write().await;
        let reviews = map.entry(review.business_id.clone()).or_default();
        if reviews.contains_key(&review.id) {
            return Err(RepositoryError::AlreadyExists(review.id));
        }
        debug!("Stored review {} for {}", review.id, review.business_id);
        reviews.insert(review.id.clone(), review);
        Ok(())
    }

    async fn get_by_id(
        &self,
        business_id: &BusinessId,
        review_id: &ReviewId,
    ) -> Result<Option<Review>, RepositoryError> {
        let map = self.reviews.read().await;
        Ok(map
            .get(business_id)
            .and_then(|reviews| reviews.get(review_id))
            .cloned())
    }

    async fn update(
        &self,
        business_id: &BusinessId,
        review_id: &ReviewId,
        update: ReviewUpdate,
    ) -> Result<Review, RepositoryError> {
        let mut map = self.reviews.write().await;
        let review = map
            .get_mut(business_id)
            .and_then(|reviews| reviews.get_mut(review_id))
            .ok_or_else(|| RepositoryError::NotFound(review_id.clone()))?;
        review.apply(&update);
        Ok(review.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_domain::{GenerationResult, Rating, ReviewStatus};
    use chrono::Utc;

    fn review(business: &str, id: &str) -> Review {
        Review::new(
            ReviewId::new(id),
            BusinessId::new(business),
            Rating::new(4).unwrap(),
            "Nice place",
            "Sam",
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let repo = InMemoryReviewRepository::new();
        repo.create(review("biz-1", "r1")).await.unwrap();

        let err = repo.create(review("biz-1", "r1")).await.unwrap_err();
        assert_eq!(err, RepositoryError::AlreadyExists(ReviewId::new("r1")));

        // Same review id under another business is a different record
        repo.create(review("biz-2", "r1")).await.unwrap();
    }

    #[tokio::test]
    async fn test_reads_are_scoped_by_business() {
        let repo = InMemoryReviewRepository::new();
        repo.seed(vec![review("biz-1", "r1")]).await;

        let found = repo
            .get_by_id(&BusinessId::new("biz-1"), &ReviewId::new("r1"))
            .await
            .unwrap();
        assert!(found.is_some());

        let other = repo
            .get_by_id(&BusinessId::new("biz-2"), &ReviewId::new("r1"))
            .await
            .unwrap();
        assert!(other.is_none());
    }

    #[tokio::test]
    async fn test_update_applies_generation() {
        let repo = InMemoryReviewRepository::new();
        repo.seed(vec![review("biz-1", "r1"), review("biz-1", "r0")]).await;

        let result = GenerationResult::success(ReviewId::new("r1"), "Thanks Sam!", 1);
        let updated = repo
            .update(
                &BusinessId::new("biz-1"),
                &ReviewId::new("r1"),
                ReviewUpdate::from_generation(&result),
            )
            .await
            .unwrap();
        assert_eq!(updated.reply_text(), Some("Thanks Sam!"));
        assert_eq!(updated.status, ReviewStatus::Pending);

        let listed = repo.list(&BusinessId::new("biz-1")).await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, ReviewId::new("r0"));
    }

    #[tokio::test]
    async fn test_update_missing_review() {
        let repo = InMemoryReviewRepository::new();
        let err = repo
            .update(
                &BusinessId::new("biz-1"),
                &ReviewId::new("nope"),
                ReviewUpdate::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
