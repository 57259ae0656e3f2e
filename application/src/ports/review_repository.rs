//! Review persistence port
//!
//! Every operation takes the business id. Adapters must scope all reads and
//! writes by it; the core never filters on its own.

use async_trait::async_trait;
use autoreply_domain::{ActivityRecord, BusinessId, Review, ReviewId, ReviewUpdate};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Review not found: {0}")]
    NotFound(ReviewId),

    #[error("Review already exists: {0}")]
    AlreadyExists(ReviewId),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: Review) -> Result<(), RepositoryError>;

    async fn get_by_id(
        &self,
        business_id: &BusinessId,
        review_id: &ReviewId,
    ) -> Result<Option<Review>, RepositoryError>;

    /// Apply a partial update and return the stored review
    async fn update(
        &self,
        business_id: &BusinessId,
        review_id: &ReviewId,
        update: ReviewUpdate,
    ) -> Result<Review, RepositoryError>;
}

/// Append-only activity trail
///
/// Separate from `tracing`: tracing carries operator diagnostics, this port
/// carries the business-facing history of what happened to each review.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    async fn insert_activity(&self, record: ActivityRecord) -> Result<(), RepositoryError>;
}

/// Activity log that drops every record
pub struct NoActivityLog;

#[async_trait]
impl ActivityLog for NoActivityLog {
    async fn insert_activity(&self, _record: ActivityRecord) -> Result<(), RepositoryError> {
        Ok(())
    }
}
