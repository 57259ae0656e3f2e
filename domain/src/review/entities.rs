//! Review entity and its reply lifecycle.
//!
//! ```text
//! pending ──approve──▶ approved ──post──▶ posted
//!    │  ╲                  │
//!    │   ╲──request_edit───┴──▶ needs_edit
//!    └──skip──▶ skipped
//! ```
//!
//! `posted`, `needs_edit` and `skipped` are terminal for automation.

use crate::core::error::DomainError;
use crate::core::ids::{BusinessId, ReviewId};
use crate::core::rating::Rating;
use crate::review::value_objects::GenerationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a review's reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Newly ingested or freshly generated reply awaiting approval
    #[default]
    Pending,
    /// Reply accepted but not yet published
    Approved,
    /// Reply published to the review platform
    Posted,
    /// Generated reply needs a manual rewrite
    NeedsEdit,
    /// Business chose not to reply
    Skipped,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Posted => "posted",
            ReviewStatus::NeedsEdit => "needs_edit",
            ReviewStatus::Skipped => "skipped",
        }
    }

    /// Whether `self -> next` is an edge of the lifecycle graph
    pub fn can_transition_to(&self, next: ReviewStatus) -> bool {
        use ReviewStatus::*;
        matches!(
            (self, next),
            (Pending, Approved)
                | (Approved, Posted)
                | (Pending, NeedsEdit)
                | (Approved, NeedsEdit)
                | (Pending, Skipped)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReviewStatus::Posted | ReviewStatus::NeedsEdit | ReviewStatus::Skipped
        )
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "posted" => Ok(ReviewStatus::Posted),
            "needs_edit" => Ok(ReviewStatus::NeedsEdit),
            "skipped" => Ok(ReviewStatus::Skipped),
            other => Err(format!("unknown review status: {}", other)),
        }
    }
}

/// A customer review awaiting or having received a reply (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub business_id: BusinessId,
    pub rating: Rating,
    pub text: String,
    pub customer_name: String,
    pub reviewed_at: DateTime<Utc>,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub generated_reply: Option<String>,
    #[serde(default)]
    pub final_reply: Option<String>,
    /// Reply was drafted by the generator rather than typed by a person
    #[serde(default)]
    pub automated: bool,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Create a freshly ingested review in `pending` state
    pub fn new(
        id: ReviewId,
        business_id: BusinessId,
        rating: Rating,
        text: impl Into<String>,
        customer_name: impl Into<String>,
        reviewed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            business_id,
            rating,
            text: text.into(),
            customer_name: customer_name.into(),
            reviewed_at,
            status: ReviewStatus::Pending,
            generated_reply: None,
            final_reply: None,
            automated: false,
            failed: false,
            failure_reason: None,
            posted_at: None,
        }
    }

    /// The reply that would be published: the edited reply if any, else the generated one
    pub fn reply_text(&self) -> Option<&str> {
        self.final_reply
            .as_deref()
            .or(self.generated_reply.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn approve(&mut self) -> Result<(), DomainError> {
        self.transition(ReviewStatus::Approved)
    }

    /// Publish the reply. Requires reply text; records the posted timestamp.
    pub fn post(&mut self, at: DateTime<Utc>) -> Result<(), DomainError> {
        if self.reply_text().is_none() {
            return Err(DomainError::MissingReply(self.id.to_string()));
        }
        self.transition(ReviewStatus::Posted)?;
        self.posted_at = Some(at);
        Ok(())
    }

    pub fn skip(&mut self) -> Result<(), DomainError> {
        self.transition(ReviewStatus::Skipped)
    }

    pub fn request_edit(&mut self) -> Result<(), DomainError> {
        self.transition(ReviewStatus::NeedsEdit)
    }

    /// Replace the reply text with a human-edited version.
    ///
    /// Allowed until the review is posted or skipped; does not change status.
    pub fn edit_reply(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        if matches!(self.status, ReviewStatus::Posted | ReviewStatus::Skipped) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: self.status,
            });
        }
        self.final_reply = Some(text.into());
        Ok(())
    }

    /// Apply a field-level update (as written by the persistence adapter)
    pub fn apply(&mut self, update: &ReviewUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(reply) = &update.generated_reply {
            self.generated_reply = Some(reply.clone());
        }
        if let Some(reply) = &update.final_reply {
            self.final_reply = Some(reply.clone());
        }
        if let Some(automated) = update.automated {
            self.automated = automated;
        }
        if let Some(failed) = update.failed {
            self.failed = failed;
            self.failure_reason = update.failure_reason.clone();
        }
        if let Some(at) = update.posted_at {
            self.posted_at = Some(at);
        }
    }

    fn transition(&mut self, next: ReviewStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Partial update written back through the persistence port.
///
/// `None` fields are left untouched. `failure_reason` is only applied
/// together with `failed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl ReviewUpdate {
    /// Fields written after a generator run. Never touches `status`.
    pub fn from_generation(result: &GenerationResult) -> Self {
        Self {
            generated_reply: Some(result.reply.clone()),
            automated: Some(true),
            failed: Some(!result.success),
            failure_reason: result.error.clone(),
            ..Default::default()
        }
    }

    /// Snapshot of the lifecycle fields after a state transition
    pub fn from_transition(review: &Review) -> Self {
        Self {
            status: Some(review.status),
            final_reply: review.final_reply.clone(),
            posted_at: review.posted_at,
            ..Default::default()
        }
    }
}
