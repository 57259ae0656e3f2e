//! Insights bundle: the validated shape of a digest analysis.
//!
//! Every type here is produced by [`super::validator::InsightsValidator`],
//! never deserialized straight from provider output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationComplexity {
    Simple,
    #[default]
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightType {
    Positive,
    Negative,
    #[default]
    Notable,
    Trending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePerception {
    Budget,
    #[default]
    Value,
    Premium,
    Luxury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityPosition {
    Basic,
    #[default]
    Standard,
    Premium,
    Exceptional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLevel {
    Basic,
    #[default]
    Good,
    Excellent,
    Exceptional,
}

/// Something customers consistently praise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositiveTheme {
    pub theme: String,
    pub description: String,
    pub example_quote: String,
    /// 0.0 ..= 1.0
    pub confidence: f64,
    /// Share of the window this theme represents, 0.0 ..= 1.0
    pub representativeness: f64,
}

/// Something customers want improved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementTheme {
    pub theme: String,
    pub description: String,
    pub impact: String,
    pub suggested_action: String,
    pub priority: Priority,
    pub implementation_complexity: ImplementationComplexity,
    /// 1 ..= 100
    pub affected_customer_count: u32,
    pub confidence: f64,
}

/// A single review singled out by the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub quote: String,
    pub customer_name: String,
    /// 1 ..= 5
    pub rating: u8,
    #[serde(rename = "type")]
    pub highlight_type: HighlightType,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueValueProp {
    pub proposition: String,
    pub evidence: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAdvantage {
    pub advantage: String,
    pub evidence: String,
    pub confidence: f64,
}

/// Something customers ask for that the business does not offer yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketGap {
    pub gap: String,
    pub opportunity: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPositioning {
    pub price_perception: PricePerception,
    pub quality_position: QualityPosition,
    pub service_level: ServiceLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveInsights {
    pub unique_value_props: Vec<UniqueValueProp>,
    pub competitive_advantages: Vec<CompetitiveAdvantage>,
    pub market_gaps: Vec<MarketGap>,
    pub market_positioning: MarketPositioning,
}

/// Validated digest analysis. Always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsBundle {
    pub positive_themes: Vec<PositiveTheme>,
    pub improvement_themes: Vec<ImprovementTheme>,
    pub highlights: Vec<Highlight>,
    pub competitive_insights: CompetitiveInsights,
    /// 0.0 ..= 1.0
    pub overall_confidence: f64,
}

impl InsightsBundle {
    pub const MAX_POSITIVE_THEMES: usize = 5;
    pub const MAX_IMPROVEMENT_THEMES: usize = 4;
    pub const MAX_HIGHLIGHTS: usize = 6;
    pub const MAX_UNIQUE_VALUE_PROPS: usize = 5;
    pub const MAX_COMPETITIVE_ADVANTAGES: usize = 5;
    pub const MAX_MARKET_GAPS: usize = 5;
    pub const DEFAULT_OVERALL_CONFIDENCE: f64 = 0.85;

    pub fn is_empty(&self) -> bool {
        self.positive_themes.is_empty()
            && self.improvement_themes.is_empty()
            && self.highlights.is_empty()
            && self.competitive_insights.unique_value_props.is_empty()
            && self.competitive_insights.competitive_advantages.is_empty()
            && self.competitive_insights.market_gaps.is_empty()
    }
}

impl Default for InsightsBundle {
    fn default() -> Self {
        Self {
            positive_themes: Vec::new(),
            improvement_themes: Vec::new(),
            highlights: Vec::new(),
            competitive_insights: CompetitiveInsights::default(),
            overall_confidence: Self::DEFAULT_OVERALL_CONFIDENCE,
        }
    }
}
