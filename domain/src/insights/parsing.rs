//! Parsing of the provider's digest response.
//!
//! The only hard failure is text with no decodable JSON in it; anything that
//! decodes is handed to [`InsightsValidator`] and repaired field by field.

use super::entities::InsightsBundle;
use super::validator::InsightsValidator;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsightsParseError {
    #[error("invalid_json_response: {0}")]
    InvalidJson(String),
}

/// Parse and validate a digest completion.
///
/// Accepts bare JSON, JSON wrapped in a Markdown code fence, or JSON embedded
/// in surrounding prose (the outermost `{ ... }` is tried).
pub fn parse_insights_response(text: &str) -> Result<InsightsBundle, InsightsParseError> {
    let value = extract_json(text)?;
    Ok(InsightsValidator::validate(&value))
}

fn extract_json(text: &str) -> Result<Value, InsightsParseError> {
    let trimmed = strip_code_fence(text.trim());
    if trimmed.is_empty() {
        return Err(InsightsParseError::InvalidJson("empty response".to_string()));
    }

    let first_error = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if let Some(start) = trimmed.find('{')
        && let Some(end) = trimmed.rfind('}')
        && end > start
        && let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..=end])
    {
        return Ok(value);
    }

    Err(InsightsParseError::InvalidJson(first_error.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening fence line
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
