//! Prompt templates for digest/insights analysis

use crate::core::string::{collapse_whitespace, truncate_with_ellipsis};
use crate::insights::period::ReportingPeriod;
use crate::review::entities::Review;

/// Longest excerpt of a single review placed in the prompt
pub const MAX_EXCERPT_CHARS: usize = 300;

/// Aggregate figures for a review window
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWindowStats {
    pub total: usize,
    pub average_rating: f64,
    /// Count per star rating, index 0 = 1 star
    pub distribution: [usize; 5],
}

impl ReviewWindowStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut distribution = [0usize; 5];
        let mut sum = 0u64;
        for review in reviews {
            distribution[review.rating.bucket()] += 1;
            sum += u64::from(review.rating.value());
        }
        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            sum as f64 / reviews.len() as f64
        };
        Self {
            total: reviews.len(),
            average_rating,
            distribution,
        }
    }
}

pub struct InsightsPromptTemplate;

impl InsightsPromptTemplate {
    pub fn system() -> &'static str {
        r#"You are a customer-experience analyst for small businesses.
You read a window of customer reviews and identify recurring themes, notable reviews, and competitive signals.
Base every statement on the reviews provided. Respond with a single JSON object and nothing else."#
    }

    /// User prompt: window statistics, excerpts, and the required JSON shape
    pub fn user(reviews: &[Review], period: &ReportingPeriod, max_excerpts: usize) -> String {
        let stats = ReviewWindowStats::from_reviews(reviews);

        let mut prompt = format!(
            "Reporting period: {}\nTotal reviews: {}\nAverage rating: {:.2}\nRating distribution:\n",
            period.label(),
            stats.total,
            stats.average_rating
        );
        for (i, count) in stats.distribution.iter().enumerate().rev() {
            prompt.push_str(&format!("  {} stars: {}\n", i + 1, count));
        }

        prompt.push_str("\nReviews:\n");
        for review in reviews.iter().take(max_excerpts) {
            let excerpt = collapse_whitespace(&review.text);
            let excerpt = if excerpt.is_empty() {
                "(rating only)".to_string()
            } else {
                truncate_with_ellipsis(&excerpt, MAX_EXCERPT_CHARS)
            };
            prompt.push_str(&format!(
                "- [{}★] {}: {}\n",
                review.rating, review.customer_name, excerpt
            ));
        }
        if reviews.len() > max_excerpts {
            prompt.push_str(&format!(
                "(+{} more reviews not shown)\n",
                reviews.len() - max_excerpts
            ));
        }

        prompt.push_str(
            r#"
Return JSON with exactly this shape:
{
  "positiveThemes": [{"theme": string, "description": string, "exampleQuote": string, "confidence": 0-1, "representativeness": 0-1}],
  "improvementThemes": [{"theme": string, "description": string, "impact": string, "suggestedAction": string, "priority": "high"|"medium"|"low", "implementationComplexity": "simple"|"moderate"|"complex", "affectedCustomerCount": 1-100, "confidence": 0-1}],
  "highlights": [{"quote": string, "customerName": string, "rating": 1-5, "type": "positive"|"negative"|"notable"|"trending", "reason": string}],
  "competitiveInsights": {
    "uniqueValueProps": [{"proposition": string, "evidence": string, "confidence": 0-1}],
    "competitiveAdvantages": [{"advantage": string, "evidence": string, "confidence": 0-1}],
    "marketGaps": [{"gap": string, "opportunity": string, "confidence": 0-1}],
    "marketPositioning": {"pricePerception": "budget"|"value"|"premium"|"luxury", "qualityPosition": "basic"|"standard"|"premium"|"exceptional", "serviceLevel": "basic"|"good"|"excellent"|"exceptional"}
  },
  "overallConfidence": 0-1
}
At most 5 positive themes, 4 improvement themes, 6 highlights, and 5 entries in each competitive list."#,
        );

        prompt
    }
}
