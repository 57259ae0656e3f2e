//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod activity_log;
mod business;
mod generation;
mod output;
mod provider;
mod rate_limit;

pub use activity_log::FileActivityLogConfig;
pub use business::FileBusinessConfig;
pub use generation::{FileBatchConfig, FileGenerationConfig, FileInsightsConfig};
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use rate_limit::FileRateLimitConfig;

use autoreply_domain::{ConfigIssue, ConfigIssueCode, TonePreset};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// AI provider endpoint
    pub provider: FileProviderConfig,
    /// Reply generation call policy
    pub generation: FileGenerationConfig,
    /// Digest call policy
    pub insights: FileInsightsConfig,
    /// Batch chunking
    pub batch: FileBatchConfig,
    /// Per-business request window
    pub rate_limit: FileRateLimitConfig,
    /// Business profile and brand voice
    pub business: FileBusinessConfig,
    /// Activity trail file
    pub activity_log: FileActivityLogConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings describe a value
    /// that will be replaced or ignored at runtime.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Provider
        let base_url = self.provider.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidBaseUrl,
                format!("provider.base_url: '{}' is not an http(s) URL", base_url),
            ));
        }
        if self.provider.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModel,
                "provider.model cannot be empty",
            ));
        }

        // 2. Sampling
        for (field, value) in [
            ("generation.temperature", self.generation.temperature),
            ("insights.temperature", self.insights.temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::TemperatureOutOfRange,
                    format!("{}: {} is outside 0.0..=2.0", field, value),
                ));
            }
        }

        // 3. Batch and rate limit
        if self.batch.chunk_size == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroChunkSize,
                "batch.chunk_size is 0, treating it as 1",
            ));
        }
        if self.rate_limit.limit == 0 || self.rate_limit.window_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidRateLimit,
                format!(
                    "rate_limit: limit ({}) and window_secs ({}) must both be positive",
                    self.rate_limit.limit, self.rate_limit.window_secs
                ),
            ));
        }

        // 4. Business
        if self.business.name.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingBusinessName,
                "business.name is empty; replies will not mention the business",
            ));
        }
        if let Some(preset) = &self.business.tone_preset
            && TonePreset::parse_lenient(preset).is_none()
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownTonePreset,
                format!(
                    "business.tone_preset: unknown value '{}', falling back to 'friendly'",
                    preset
                ),
            ));
        }
        for (field, value) in [
            ("business.formality", self.business.formality),
            ("business.warmth", self.business.warmth),
            ("business.brevity", self.business.brevity),
        ] {
            if let Some(v) = value
                && !(1..=5).contains(&v)
            {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::SliderOutOfRange,
                    format!("{}: {} is outside 1..=5", field, v),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_domain::{OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
base_url = "http://localhost:8080"
model = "llama-3.1-8b"

[generation]
max_retries = 1

[batch]
chunk_size = 3

[rate_limit]
limit = 20
window_secs = 30

[business]
id = "bella"
name = "Bella's Bistro"
industry = "restaurant"
tone_preset = "Playful"
warmth = 5

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.generation.max_retries, 1);
        assert_eq!(config.batch.chunk_size, 3);
        assert_eq!(config.rate_limit.to_config().limit, 20);
        assert_eq!(config.business.business_id().as_str(), "bella");
        assert_eq!(config.business.raw_settings().warmth, Some(5));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[business]
name = "Corner Cafe"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.business.name, "Corner Cafe");
        assert_eq!(config.business.id, "default");
        assert_eq!(config.batch.chunk_size, 5);
        assert_eq!(config.rate_limit.limit, 10);
    }

    #[test]
    fn test_default_config_only_warns_about_name() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::MissingBusinessName);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let mut config = FileConfig::default();
        config.business.name = "Bella's".to_string();
        config.provider.base_url = "localhost".to_string();
        config.batch.chunk_size = 0;
        config.generation.temperature = 3.5;
        config.rate_limit.limit = 0;
        config.business.tone_preset = Some("grumpy".to_string());
        config.business.brevity = Some(9);

        let codes: Vec<_> = config.validate().iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::InvalidBaseUrl,
                ConfigIssueCode::TemperatureOutOfRange,
                ConfigIssueCode::ZeroChunkSize,
                ConfigIssueCode::InvalidRateLimit,
                ConfigIssueCode::UnknownTonePreset,
                ConfigIssueCode::SliderOutOfRange,
            ]
        );
    }
}
