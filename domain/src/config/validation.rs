//! Structured configuration issues.
//!
//! Config validation never aborts on the first problem; it collects every
//! issue with a severity so callers can print warnings and refuse to start
//! only on errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Provider base URL is empty or not http(s).
    InvalidBaseUrl,
    /// Model name is empty.
    EmptyModel,
    /// Rate limit with zero requests or zero window.
    InvalidRateLimit,
    /// Batch chunk size of zero (treated as 1).
    ZeroChunkSize,
    /// Temperature outside 0.0..=2.0.
    TemperatureOutOfRange,
    /// Business name is empty; prompts fall back to a generic name.
    MissingBusinessName,
    /// Tone preset not recognised; `friendly` is used.
    UnknownTonePreset,
    /// Brand voice slider outside 1..=5.
    SliderOutOfRange,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// True if any issue is fatal
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}
