//! Brand voice types

use serde::{Deserialize, Serialize};

/// Tone preset selected by the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TonePreset {
    #[default]
    Friendly,
    Professional,
    Playful,
    Custom,
}

impl TonePreset {
    pub const ALL: [TonePreset; 4] = [
        TonePreset::Friendly,
        TonePreset::Professional,
        TonePreset::Playful,
        TonePreset::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TonePreset::Friendly => "friendly",
            TonePreset::Professional => "professional",
            TonePreset::Playful => "playful",
            TonePreset::Custom => "custom",
        }
    }

    /// Column index in the fallback template table
    pub fn index(&self) -> usize {
        match self {
            TonePreset::Friendly => 0,
            TonePreset::Professional => 1,
            TonePreset::Playful => 2,
            TonePreset::Custom => 3,
        }
    }

    /// Lenient parse: case-insensitive, whitespace-trimmed
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "friendly" => Some(TonePreset::Friendly),
            "professional" => Some(TonePreset::Professional),
            "playful" => Some(TonePreset::Playful),
            "custom" => Some(TonePreset::Custom),
            _ => None,
        }
    }
}

impl std::fmt::Display for TonePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored tone settings row for a business, possibly legacy or partial
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBrandSettings {
    #[serde(alias = "tone", alias = "tone_preset")]
    pub tone_preset: Option<String>,
    pub formality: Option<u8>,
    pub warmth: Option<u8>,
    pub brevity: Option<u8>,
    #[serde(alias = "custom_instruction", alias = "customInstructions")]
    pub custom_instruction: Option<String>,
}

/// Business profile fields used for prompt context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInfo {
    pub name: String,
    pub industry: Option<String>,
}

impl BusinessInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: None,
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }
}

/// Normalized tone configuration for one business (read-only snapshot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandVoice {
    pub preset: TonePreset,
    /// 1 (casual) ..= 5 (formal)
    pub formality: u8,
    /// 1 (reserved) ..= 5 (effusive)
    pub warmth: u8,
    /// 1 (detailed) ..= 5 (terse)
    pub brevity: u8,
    pub custom_instruction: Option<String>,
    pub business_name: String,
    pub industry: Option<String>,
}

impl BrandVoice {
    pub const DEFAULT_SLIDER: u8 = 3;

    /// Custom instruction, only when the preset is `custom` and the text is non-blank
    pub fn active_custom_instruction(&self) -> Option<&str> {
        match self.preset {
            TonePreset::Custom => self
                .custom_instruction
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty()),
            _ => None,
        }
    }
}

impl Default for BrandVoice {
    fn default() -> Self {
        Self {
            preset: TonePreset::Friendly,
            formality: Self::DEFAULT_SLIDER,
            warmth: Self::DEFAULT_SLIDER,
            brevity: Self::DEFAULT_SLIDER,
            custom_instruction: None,
            business_name: String::new(),
            industry: None,
        }
    }
}
