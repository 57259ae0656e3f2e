//! Business profile and brand settings from TOML (`[business]` section)
//!
//! Used by the CLI in place of a hosted settings store: one business per
//! config file.

use autoreply_domain::{BusinessId, BusinessInfo, RawBrandSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBusinessConfig {
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    /// friendly | professional | playful | custom
    pub tone_preset: Option<String>,
    pub formality: Option<u8>,
    pub warmth: Option<u8>,
    pub brevity: Option<u8>,
    pub custom_instruction: Option<String>,
}

impl Default for FileBusinessConfig {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: String::new(),
            industry: None,
            tone_preset: None,
            formality: None,
            warmth: None,
            brevity: None,
            custom_instruction: None,
        }
    }
}

impl FileBusinessConfig {
    pub fn business_id(&self) -> BusinessId {
        BusinessId::new(self.id.trim())
    }

    pub fn raw_settings(&self) -> RawBrandSettings {
        RawBrandSettings {
            tone_preset: self.tone_preset.clone(),
            formality: self.formality,
            warmth: self.warmth,
            brevity: self.brevity,
            custom_instruction: self.custom_instruction.clone(),
        }
    }

    pub fn business_info(&self) -> BusinessInfo {
        BusinessInfo {
            name: self.name.clone(),
            industry: self.industry.clone(),
        }
    }
}
