//! Activity records: the per-business audit trail written alongside reviews.

use crate::core::ids::{BusinessId, ReviewId};
use crate::review::entities::ReviewStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ReplyGenerated,
    ReplyGenerationFailed,
    ReplyPersistFailed,
    ReplyDiscarded,
    BatchCompleted,
    ReviewApproved,
    ReviewPosted,
    ReviewSkipped,
    ReviewNeedsEdit,
    ReplyEdited,
    InsightsGenerated,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::ReplyGenerated => "reply_generated",
            ActivityKind::ReplyGenerationFailed => "reply_generation_failed",
            ActivityKind::ReplyPersistFailed => "reply_persist_failed",
            ActivityKind::ReplyDiscarded => "reply_discarded",
            ActivityKind::BatchCompleted => "batch_completed",
            ActivityKind::ReviewApproved => "review_approved",
            ActivityKind::ReviewPosted => "review_posted",
            ActivityKind::ReviewSkipped => "review_skipped",
            ActivityKind::ReviewNeedsEdit => "review_needs_edit",
            ActivityKind::ReplyEdited => "reply_edited",
            ActivityKind::InsightsGenerated => "insights_generated",
        }
    }

    /// Kind recorded when a review enters `status`
    pub fn for_status(status: ReviewStatus) -> Option<Self> {
        match status {
            ReviewStatus::Approved => Some(ActivityKind::ReviewApproved),
            ReviewStatus::Posted => Some(ActivityKind::ReviewPosted),
            ReviewStatus::Skipped => Some(ActivityKind::ReviewSkipped),
            ReviewStatus::NeedsEdit => Some(ActivityKind::ReviewNeedsEdit),
            ReviewStatus::Pending => None,
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub business_id: BusinessId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_id: Option<ReviewId>,
    pub kind: ActivityKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(business_id: BusinessId, kind: ActivityKind, message: impl Into<String>) -> Self {
        Self {
            business_id,
            review_id: None,
            kind,
            message: message.into(),
            metadata: Value::Null,
            created_at: Utc::now(),
        }
    }

    pub fn for_review(mut self, review_id: ReviewId) -> Self {
        self.review_id = Some(review_id);
        self
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}
