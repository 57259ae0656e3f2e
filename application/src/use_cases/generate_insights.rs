//! Generate Insights use case
//!
//! Sends one digest prompt for a window of reviews and repairs the JSON the
//! provider returns. Only a response with no decodable JSON at all fails; a
//! window with no reviews yields the default bundle without a provider call.

use crate::config::InsightsParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::use_cases::shared::complete_with_timeout;
use autoreply_domain::{
    InsightsBundle, InsightsParseError, InsightsPromptTemplate, ReportingPeriod, Review,
    parse_insights_response,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during insights generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateInsightsError {
    #[error(transparent)]
    InvalidJsonResponse(#[from] InsightsParseError),

    #[error("Provider error: {0}")]
    Provider(#[from] GatewayError),
}

/// Use case for the periodic digest
pub struct GenerateInsightsUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    params: InsightsParams,
}

impl<G: LlmGateway + 'static> GenerateInsightsUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            params: InsightsParams::default(),
        }
    }

    pub fn with_params(mut self, params: InsightsParams) -> Self {
        self.params = params;
        self
    }

    /// Analyse the reviews whose date falls inside `period`
    pub async fn execute(
        &self,
        reviews: &[Review],
        period: &ReportingPeriod,
    ) -> Result<InsightsBundle, GenerateInsightsError> {
        let window: Vec<Review> = reviews
            .iter()
            .filter(|r| period.contains(r.reviewed_at.date_naive()))
            .cloned()
            .collect();

        if window.is_empty() {
            info!("No reviews in {}, returning default insights", period.label());
            return Ok(InsightsBundle::default());
        }

        info!(
            "Generating insights over {} reviews ({})",
            window.len(),
            period.label()
        );

        let request = CompletionRequest::new(
            InsightsPromptTemplate::system(),
            InsightsPromptTemplate::user(&window, period, self.params.max_excerpts),
        )
        .with_temperature(self.params.temperature)
        .with_max_tokens(self.params.max_tokens)
        .json();

        let completion =
            complete_with_timeout(self.gateway.as_ref(), &request, self.params.request_timeout)
                .await
                .inspect_err(|e| warn!("Insights request failed: {}", e))?;

        debug!(
            "Insights completion: {} chars, {} tokens",
            completion.text.len(),
            completion.usage.total()
        );

        let bundle = parse_insights_response(&completion.text)
            .inspect_err(|e| warn!("Insights response rejected: {}", e))?;

        info!(
            "Insights ready: {} positive, {} improvement, {} highlights",
            bundle.positive_themes.len(),
            bundle.improvement_themes.len(),
            bundle.highlights.len()
        );
        Ok(bundle)
    }
}
