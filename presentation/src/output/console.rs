//! Console output formatters for reply and digest results

use crate::output::formatter::OutputFormatter;
use autoreply_domain::{
    BatchResult, ConfigIssue, GenerationResult, InsightsBundle, ReportingPeriod, Severity,
};
use colored::Colorize;
use serde::Serialize;
use serde_json::json;

/// Formats results as colored, human-readable text
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn ANSI colors off for all subsequent output
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format a single reply
    pub fn format_reply(result: &GenerationResult) -> String {
        let mut output = String::new();

        let status = if result.success {
            "drafted".green().bold()
        } else {
            "fallback".yellow().bold()
        };
        output.push_str(&format!(
            "{} {} ({})\n",
            "Review".cyan().bold(),
            result.review_id,
            status
        ));
        output.push_str(&Self::indent(&result.reply, "  "));
        output.push('\n');

        if let Some(error) = &result.error {
            output.push_str(&format!("  {} {}\n", "Reason:".dimmed(), error.dimmed()));
        }

        output
    }

    /// Format a batch run: every reply, then a summary
    pub fn format_batch(result: &BatchResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Drafted Replies"));
        output.push('\n');

        for item in &result.results {
            output.push('\n');
            output.push_str(&Self::format_reply(item));
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!(
            "{} {}   {} {}   {} {}\n",
            "Total:".bold(),
            result.total,
            "Drafted:".green().bold(),
            result.success_count,
            "Fallback:".yellow().bold(),
            result.failure_count
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format a digest
    pub fn format_insights(bundle: &InsightsBundle, period: &ReportingPeriod) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Review Insights"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n{} {:.0}%\n",
            "Period:".cyan().bold(),
            period.label(),
            "Confidence:".cyan().bold(),
            bundle.overall_confidence * 100.0
        ));

        if bundle.is_empty() {
            output.push_str(&format!("\n{}\n", "No themes found for this period.".dimmed()));
        }

        if !bundle.positive_themes.is_empty() {
            output.push_str(&Self::section_header("What customers love"));
            for theme in &bundle.positive_themes {
                output.push_str(&format!("  {} {}\n", "+".green(), theme.theme.bold()));
                output.push_str(&format!("    {}\n", theme.description));
                if !theme.example_quote.is_empty() {
                    output.push_str(&format!("    \"{}\"\n", theme.example_quote.italic()));
                }
            }
        }

        if !bundle.improvement_themes.is_empty() {
            output.push_str(&Self::section_header("Where to improve"));
            for theme in &bundle.improvement_themes {
                output.push_str(&format!(
                    "  {} {} [{} priority, {}]\n",
                    "-".red(),
                    theme.theme.bold(),
                    label(&theme.priority),
                    label(&theme.implementation_complexity)
                ));
                output.push_str(&format!("    {}\n", theme.description));
                output.push_str(&format!(
                    "    {} {}\n",
                    "Action:".yellow(),
                    theme.suggested_action
                ));
            }
        }

        if !bundle.highlights.is_empty() {
            output.push_str(&Self::section_header("Highlights"));
            for highlight in &bundle.highlights {
                output.push_str(&format!(
                    "  [{}★ {}] \"{}\" - {}\n",
                    highlight.rating,
                    label(&highlight.highlight_type),
                    highlight.quote,
                    highlight.customer_name
                ));
            }
        }

        let competitive = &bundle.competitive_insights;
        output.push_str(&Self::section_header("Competitive position"));
        let positioning = &competitive.market_positioning;
        output.push_str(&format!(
            "  Price: {}   Quality: {}   Service: {}\n",
            label(&positioning.price_perception),
            label(&positioning.quality_position),
            label(&positioning.service_level)
        ));
        for prop in &competitive.unique_value_props {
            output.push_str(&format!("  {} {}\n", "*".cyan(), prop.proposition));
        }
        for advantage in &competitive.competitive_advantages {
            output.push_str(&format!("  {} {}\n", "^".green(), advantage.advantage));
        }
        for gap in &competitive.market_gaps {
            output.push_str(&format!(
                "  {} {}: {}\n",
                "?".yellow(),
                gap.gap,
                gap.opportunity
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format configuration issues, errors first
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        let mut sorted: Vec<&ConfigIssue> = issues.iter().collect();
        sorted.sort_by_key(|issue| !issue.is_error());

        sorted
            .into_iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_reply(&self, result: &GenerationResult) -> String {
        Self::format_reply(result)
    }

    fn format_batch(&self, result: &BatchResult) -> String {
        Self::format_batch(result)
    }

    fn format_insights(&self, bundle: &InsightsBundle, period: &ReportingPeriod) -> String {
        Self::format_insights(bundle, period)
    }
}

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_reply(&self, result: &GenerationResult) -> String {
        ConsoleFormatter::format_json(result)
    }

    fn format_batch(&self, result: &BatchResult) -> String {
        ConsoleFormatter::format_json(result)
    }

    fn format_insights(&self, bundle: &InsightsBundle, period: &ReportingPeriod) -> String {
        ConsoleFormatter::format_json(&json!({
            "period": {"start": period.start(), "end": period.end()},
            "insights": bundle,
        }))
    }
}

/// Serialized name of a unit enum, e.g. `Priority::High` -> "high"
fn label<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_domain::{ConfigIssueCode, Priority, ReviewId};
    use chrono::NaiveDate;

    fn period() -> ReportingPeriod {
        ReportingPeriod::trailing_days(NaiveDate::from_ymd_opt(2026, 10, 7).unwrap(), 7)
    }

    #[test]
    fn test_reply_shows_fallback_reason() {
        colored::control::set_override(false);
        let result = GenerationResult::fallback(
            ReviewId::new("r1"),
            "Thank you, Amy!",
            "Request timed out",
            1,
        );
        let text = ConsoleFormatter::format_reply(&result);
        assert!(text.contains("r1 (fallback)"));
        assert!(text.contains("  Thank you, Amy!"));
        assert!(text.contains("Reason: Request timed out"));
    }

    #[test]
    fn test_batch_summary_counts() {
        colored::control::set_override(false);
        let batch = BatchResult::from_results(vec![
            GenerationResult::success(ReviewId::new("r1"), "Thanks!", 1),
            GenerationResult::fallback(ReviewId::new("r2"), "Thank you.", "boom", 1),
        ]);
        let text = ConsoleFormatter::format_batch(&batch);
        assert!(text.contains("Total: 2"));
        assert!(text.contains("Drafted: 1"));
        assert!(text.contains("Fallback: 1"));
    }

    #[test]
    fn test_empty_digest() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_insights(&InsightsBundle::default(), &period());
        assert!(text.contains("No themes found"));
        assert!(text.contains("Price: value"));
        assert!(text.contains("Confidence: 85%"));
    }

    #[test]
    fn test_json_digest_includes_period() {
        let json = JsonFormatter.format_insights(&InsightsBundle::default(), &period());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["period"]["start"], "2026-10-01");
        assert_eq!(value["insights"]["overallConfidence"], 0.85);
    }

    #[test]
    fn test_enum_label() {
        assert_eq!(label(&Priority::High), "high");
    }

    #[test]
    fn test_config_issues_errors_first() {
        colored::control::set_override(false);
        let issues = vec![
            ConfigIssue::warning(ConfigIssueCode::ZeroChunkSize, "chunk size is 0"),
            ConfigIssue::error(ConfigIssueCode::EmptyModel, "model is empty"),
        ];
        let text = ConsoleFormatter::format_config_issues(&issues);
        assert!(text.starts_with("error: model is empty"));
        assert!(text.ends_with("warning: chunk size is 0"));
    }
}
