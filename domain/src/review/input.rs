//! Caller-supplied review payloads and their validation.
//!
//! Entry points accept [`ReviewInput`] (every field optional, as decoded from
//! JSON) and turn it into a [`Review`] before any processing. Missing fields
//! are a caller error: they are reported, never repaired.

use crate::core::ids::{BusinessId, ReviewId};
use crate::core::rating::Rating;
use crate::review::entities::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a single caller-supplied review
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InputValidationError {
    #[error("review {review}: missing required field '{field}'")]
    MissingField { review: String, field: &'static str },

    #[error("review {review}: invalid field '{field}': {reason}")]
    InvalidField {
        review: String,
        field: &'static str,
        reason: String,
    },
}

/// Raw review as received from the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default, alias = "comment")]
    pub text: Option<String>,
    #[serde(default, alias = "reviewerName", alias = "customer_name")]
    pub customer_name: Option<String>,
    #[serde(default, alias = "createTime", alias = "reviewed_at")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewInput {
    pub fn new(
        id: impl Into<String>,
        rating: i64,
        text: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            rating: Some(rating),
            text: Some(text.into()),
            customer_name: Some(customer_name.into()),
            reviewed_at: None,
        }
    }

    /// Validate required fields and build a `pending` review.
    ///
    /// Every problem is reported, not just the first one. `now` is used when
    /// the payload carries no review timestamp.
    pub fn validate(
        &self,
        business_id: &BusinessId,
        now: DateTime<Utc>,
    ) -> Result<Review, Vec<InputValidationError>> {
        let label = self
            .id
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "<unknown>".to_string());
        let mut errors = Vec::new();

        let id = match self.id.as_deref().map(ReviewId::try_new) {
            Some(Ok(id)) => Some(id),
            _ => {
                errors.push(InputValidationError::MissingField {
                    review: label.clone(),
                    field: "id",
                });
                None
            }
        };

        let rating = match self.rating {
            Some(value) => match Rating::new(value) {
                Ok(r) => Some(r),
                Err(e) => {
                    errors.push(InputValidationError::InvalidField {
                        review: label.clone(),
                        field: "rating",
                        reason: e.to_string(),
                    });
                    None
                }
            },
            None => {
                errors.push(InputValidationError::MissingField {
                    review: label.clone(),
                    field: "rating",
                });
                None
            }
        };

        if self.text.is_none() {
            errors.push(InputValidationError::MissingField {
                review: label.clone(),
                field: "text",
            });
        }

        let customer_name = self
            .customer_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        if customer_name.is_none() {
            errors.push(InputValidationError::MissingField {
                review: label.clone(),
                field: "customerName",
            });
        }

        match (id, rating, &self.text, customer_name) {
            (Some(id), Some(rating), Some(text), Some(name)) if errors.is_empty() => Ok(Review::new(
                id,
                business_id.clone(),
                rating,
                text.clone(),
                name,
                self.reviewed_at.unwrap_or(now),
            )),
            _ => Err(errors),
        }
    }
}

/// Validate a whole batch, collecting every error across all items
pub fn validate_all(
    inputs: &[ReviewInput],
    business_id: &BusinessId,
    now: DateTime<Utc>,
) -> Result<Vec<Review>, Vec<InputValidationError>> {
    let mut reviews = Vec::with_capacity(inputs.len());
    let mut errors = Vec::new();

    for input in inputs {
        match input.validate(business_id, now) {
            Ok(review) => reviews.push(review),
            Err(mut e) => errors.append(&mut e),
        }
    }

    if errors.is_empty() {
        Ok(reviews)
    } else {
        Err(errors)
    }
}
