//! Output formatter trait

use autoreply_domain::{BatchResult, GenerationResult, InsightsBundle, ReportingPeriod};

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Format the outcome of a single reply
    fn format_reply(&self, result: &GenerationResult) -> String;

    /// Format the outcome of a batch run
    fn format_batch(&self, result: &BatchResult) -> String;

    /// Format a digest for its reporting period
    fn format_insights(&self, bundle: &InsightsBundle, period: &ReportingPeriod) -> String;
}
