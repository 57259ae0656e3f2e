//! Domain layer for review-autoreply
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Reviews
//!
//! A [`Review`] moves through a small lifecycle (`pending → approved → posted`,
//! with `needs_edit` and `skipped` as exits). Replies are drafted by the
//! generator and recorded on the review without changing its status.
//!
//! ## Brand voice
//!
//! Per-business tone settings are normalized by [`BrandVoiceResolver`] into a
//! [`BrandVoice`], which drives both the prompt and the fallback template.
//!
//! ## Insights
//!
//! Digest analysis returned by the model is untrusted. [`InsightsValidator`]
//! repairs it field by field against declarative rule tables so the result is
//! always a fully populated [`InsightsBundle`].

pub mod activity;
pub mod brand_voice;
pub mod config;
pub mod core;
pub mod insights;
pub mod prompt;
pub mod reply;
pub mod review;

// Re-export commonly used types
pub use activity::{ActivityKind, ActivityRecord};
pub use brand_voice::{
    entities::{BrandVoice, BusinessInfo, RawBrandSettings, TonePreset},
    resolver::BrandVoiceResolver,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    ids::{BusinessId, ReviewId},
    rating::Rating,
};
pub use insights::{
    entities::{
        CompetitiveAdvantage, CompetitiveInsights, Highlight, HighlightType,
        ImplementationComplexity, ImprovementTheme, InsightsBundle, MarketGap, MarketPositioning,
        PositiveTheme, PricePerception, Priority, QualityPosition, ServiceLevel, UniqueValueProp,
    },
    parsing::{InsightsParseError, parse_insights_response},
    period::{InvalidPeriod, ReportingPeriod},
    validator::InsightsValidator,
};
pub use prompt::{InsightsPromptTemplate, ReplyPromptTemplate, ReviewWindowStats};
pub use reply::{MAX_REPLY_CHARS, fallback::fallback_reply, sanitize_reply};
pub use review::{
    entities::{Review, ReviewStatus, ReviewUpdate},
    input::{InputValidationError, ReviewInput, validate_all},
    value_objects::{BatchItemError, BatchResult, GenerationResult},
};
