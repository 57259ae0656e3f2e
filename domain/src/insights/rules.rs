//! Declarative field rules for repairing untrusted JSON.
//!
//! Each object shape in the insights bundle is described by a table of
//! [`FieldRule`]s. [`sanitize_object`] applies a table to an arbitrary JSON
//! object and returns a map in which every rule key is present with a value
//! of the right kind, within its constraint. Lists are described by
//! [`ListRule`] and applied by [`sanitize_list`].
//!
//! Adding a field is a one-line table change.

use crate::core::string::truncate_chars;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

/// Cap applied to every free-text field
pub const MAX_TEXT_CHARS: usize = 500;

/// Kind, constraint and default of one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Trimmed string, capped at `max_chars`. With `default: None` the field
    /// is required and the whole item is dropped when it is missing.
    Text {
        max_chars: usize,
        default: Option<&'static str>,
    },
    /// One of a fixed set of lowercase strings
    Choice {
        allowed: &'static [&'static str],
        default: &'static str,
    },
    /// Finite number within `min..=max`
    Number { min: f64, max: f64, default: f64 },
    /// Number within `min..=max`, rounded to an integer
    Count { min: i64, max: i64, default: i64 },
}

/// One field of an object shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    /// Output key (camelCase)
    pub key: &'static str,
    /// Alternative input keys accepted from the provider
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
}

impl FieldRule {
    pub const fn text(key: &'static str, default: &'static str) -> Self {
        Self {
            key,
            aliases: &[],
            kind: FieldKind::Text {
                max_chars: MAX_TEXT_CHARS,
                default: Some(default),
            },
        }
    }

    pub const fn required_text(key: &'static str) -> Self {
        Self {
            key,
            aliases: &[],
            kind: FieldKind::Text {
                max_chars: MAX_TEXT_CHARS,
                default: None,
            },
        }
    }

    pub const fn choice(
        key: &'static str,
        allowed: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            key,
            aliases: &[],
            kind: FieldKind::Choice { allowed, default },
        }
    }

    pub const fn number(key: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            key,
            aliases: &[],
            kind: FieldKind::Number { min, max, default },
        }
    }

    pub const fn count(key: &'static str, min: i64, max: i64, default: i64) -> Self {
        Self {
            key,
            aliases: &[],
            kind: FieldKind::Count { min, max, default },
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Repair a raw value. `None` means "required and missing".
    pub fn apply(&self, raw: Option<&Value>) -> Option<Value> {
        match self.kind {
            FieldKind::Text { max_chars, default } => {
                let text = raw
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .or(default)?;
                Some(Value::String(truncate_chars(text, max_chars).to_string()))
            }
            FieldKind::Choice { allowed, default } => {
                let chosen = raw
                    .and_then(Value::as_str)
                    .map(|s| s.trim().to_ascii_lowercase())
                    .and_then(|s| allowed.iter().find(|a| **a == s).copied())
                    .unwrap_or(default);
                Some(Value::String(chosen.to_string()))
            }
            FieldKind::Number { min, max, default } => {
                let n = raw
                    .and_then(Value::as_f64)
                    .filter(|n| n.is_finite() && (min..=max).contains(n))
                    .unwrap_or(default);
                Some(Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null))
            }
            FieldKind::Count { min, max, default } => {
                let n = raw
                    .and_then(Value::as_f64)
                    .filter(|n| n.is_finite() && (min as f64..=max as f64).contains(n))
                    .map(|n| n.round() as i64)
                    .unwrap_or(default);
                Some(Value::Number(n.into()))
            }
        }
    }
}

/// A bounded list of objects
#[derive(Debug, Clone, Copy)]
pub struct ListRule {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    pub max_items: usize,
    pub item: &'static [FieldRule],
}

/// Find a field by its key or any alias
pub fn lookup<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    aliases: &[&str],
) -> Option<&'a Value> {
    obj.get(key)
        .or_else(|| aliases.iter().find_map(|alias| obj.get(*alias)))
}

/// Apply a rule table to one object.
///
/// Returns `None` when a required field is missing; unknown keys are dropped.
pub fn sanitize_object(raw: &Map<String, Value>, rules: &[FieldRule]) -> Option<Map<String, Value>> {
    let mut out = Map::with_capacity(rules.len());
    for rule in rules {
        let value = rule.apply(lookup(raw, rule.key, rule.aliases))?;
        out.insert(rule.key.to_string(), value);
    }
    Some(out)
}

/// Apply a list rule: non-arrays become empty, non-objects and rejected
/// items are dropped, then the list is truncated to `max_items`.
pub fn sanitize_list<T: DeserializeOwned>(raw: Option<&Value>, rule: &ListRule) -> Vec<T> {
    let Some(items) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|obj| sanitize_object(obj, rule.item))
        .filter_map(|obj| serde_json::from_value(Value::Object(obj)).ok())
        .take(rule.max_items)
        .collect()
}
