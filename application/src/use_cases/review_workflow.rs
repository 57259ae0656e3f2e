//! Review Workflow use case
//!
//! Moves a stored review through its lifecycle (approve, post, skip,
//! request edit) and records an activity entry for every change.

use crate::ports::review_repository::{ActivityLog, RepositoryError, ReviewRepository};
use autoreply_domain::{
    ActivityKind, ActivityRecord, BusinessId, DomainError, Review, ReviewId, ReviewUpdate,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("Review not found: {0}")]
    NotFound(ReviewId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Persistence error: {0}")]
    Repository(#[from] RepositoryError),
}

/// A lifecycle operation on one review
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Post { at: DateTime<Utc> },
    Skip,
    RequestEdit,
    EditReply { text: String },
}

impl ReviewAction {
    pub fn post_now() -> Self {
        ReviewAction::Post { at: Utc::now() }
    }

    fn apply(&self, review: &mut Review) -> Result<(), DomainError> {
        match self {
            ReviewAction::Approve => review.approve(),
            ReviewAction::Post { at } => review.post(*at),
            ReviewAction::Skip => review.skip(),
            ReviewAction::RequestEdit => review.request_edit(),
            ReviewAction::EditReply { text } => review.edit_reply(text.clone()),
        }
    }

    fn activity_kind(&self, review: &Review) -> ActivityKind {
        match self {
            ReviewAction::EditReply { .. } => ActivityKind::ReplyEdited,
            _ => ActivityKind::for_status(review.status).unwrap_or(ActivityKind::ReplyEdited),
        }
    }
}

pub struct ReviewWorkflowUseCase {
    repository: Arc<dyn ReviewRepository>,
    activity_log: Arc<dyn ActivityLog>,
}

impl ReviewWorkflowUseCase {
    pub fn new(repository: Arc<dyn ReviewRepository>, activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            repository,
            activity_log,
        }
    }

    pub async fn execute(
        &self,
        business_id: &BusinessId,
        review_id: &ReviewId,
        action: ReviewAction,
    ) -> Result<Review, WorkflowError> {
        let mut review = self
            .repository
            .get_by_id(business_id, review_id)
            .await?
            .ok_or_else(|| WorkflowError::NotFound(review_id.clone()))?;

        let from = review.status;
        action.apply(&mut review)?;

        let stored = self
            .repository
            .update(business_id, review_id, ReviewUpdate::from_transition(&review))
            .await?;

        info!("Review {}: {} -> {}", review_id, from, stored.status);

        let kind = action.activity_kind(&stored);
        let record = ActivityRecord::new(
            business_id.clone(),
            kind,
            format!("Review {} is now {}", review_id, stored.status),
        )
        .for_review(review_id.clone())
        .with_metadata(json!({ "from": from, "to": stored.status }));

        if let Err(e) = self.activity_log.insert_activity(record).await {
            warn!("Failed to record activity for review {}: {}", review_id, e);
        }

        Ok(stored)
    }
}
