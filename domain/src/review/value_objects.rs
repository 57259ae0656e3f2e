//! Reply generation value objects - immutable outcome types.
//!
//! - [`GenerationResult`] - outcome of one reply generation
//! - [`BatchItemError`] - a failed item inside a batch
//! - [`BatchResult`] - aggregated outcome of a batch run

use crate::core::ids::ReviewId;
use serde::{Deserialize, Serialize};

/// Outcome of a single reply generation.
///
/// `reply` is always populated: the validated AI text when `success` is true,
/// otherwise the deterministic fallback template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub review_id: ReviewId,
    pub success: bool,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of provider calls made (0 when the call never left the process)
    #[serde(default)]
    pub attempts: u32,
}

impl GenerationResult {
    /// Creates a successful result carrying validated AI text.
    pub fn success(review_id: ReviewId, reply: impl Into<String>, attempts: u32) -> Self {
        Self {
            review_id,
            success: true,
            reply: reply.into(),
            error: None,
            attempts,
        }
    }

    /// Creates a failed result carrying the fallback template reply.
    pub fn fallback(
        review_id: ReviewId,
        reply: impl Into<String>,
        error: impl Into<String>,
        attempts: u32,
    ) -> Self {
        Self {
            review_id,
            success: false,
            reply: reply.into(),
            error: Some(error.into()),
            attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_fallback(&self) -> bool {
        !self.success
    }
}

/// A failed item inside a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemError {
    pub review_id: ReviewId,
    pub error: String,
}

/// Aggregated outcome of a batch run.
///
/// `success_count + failure_count == total` and every input review appears
/// exactly once in `results`, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub total: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub results: Vec<GenerationResult>,
    pub errors: Vec<BatchItemError>,
}

impl BatchResult {
    /// Build the summary from per-item results (already in input order)
    pub fn from_results(results: Vec<GenerationResult>) -> Self {
        let errors: Vec<BatchItemError> = results
            .iter()
            .filter(|r| !r.success)
            .map(|r| BatchItemError {
                review_id: r.review_id.clone(),
                error: r
                    .error
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
            .collect();

        let failure_count = errors.len();
        Self {
            total: results.len(),
            success_count: results.len() - failure_count,
            failure_count,
            results,
            errors,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failure_count == 0
    }

    /// Look up the outcome for a review id
    pub fn result_for(&self, review_id: &ReviewId) -> Option<&GenerationResult> {
        self.results.iter().find(|r| &r.review_id == review_id)
    }
}
