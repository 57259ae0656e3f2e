//! Brand voice resolution.
//!
//! Turns a stored settings row and the business profile into a normalized
//! [`BrandVoice`]. Total and pure: unknown or missing fields degrade to
//! defaults, nothing is rejected.

use super::entities::{BrandVoice, BusinessInfo, RawBrandSettings, TonePreset};

pub struct BrandVoiceResolver;

impl BrandVoiceResolver {
    /// Resolve the brand voice used for prompt construction.
    ///
    /// - unrecognized or missing preset -> `friendly`
    /// - sliders pass through (missing -> [`BrandVoice::DEFAULT_SLIDER`])
    /// - custom instruction passes through regardless of preset
    pub fn resolve(settings: &RawBrandSettings, business: &BusinessInfo) -> BrandVoice {
        let preset = settings
            .tone_preset
            .as_deref()
            .and_then(TonePreset::parse_lenient)
            .unwrap_or_default();

        BrandVoice {
            preset,
            formality: settings.formality.unwrap_or(BrandVoice::DEFAULT_SLIDER),
            warmth: settings.warmth.unwrap_or(BrandVoice::DEFAULT_SLIDER),
            brevity: settings.brevity.unwrap_or(BrandVoice::DEFAULT_SLIDER),
            custom_instruction: settings.custom_instruction.clone(),
            business_name: business.name.trim().to_string(),
            industry: business
                .industry
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset_defaults_to_friendly() {
        let settings = RawBrandSettings {
            tone_preset: Some("grumpy".to_string()),
            ..Default::default()
        };
        let voice = BrandVoiceResolver::resolve(&settings, &BusinessInfo::new("Cafe"));
        assert_eq!(voice.preset, TonePreset::Friendly);
    }

    #[test]
    fn test_missing_everything() {
        let voice =
            BrandVoiceResolver::resolve(&RawBrandSettings::default(), &BusinessInfo::default());
        assert_eq!(voice, BrandVoice::default());
    }

    #[test]
    fn test_sliders_pass_through_unmodified() {
        let settings = RawBrandSettings {
            tone_preset: Some("professional".to_string()),
            formality: Some(9),
            warmth: Some(0),
            brevity: Some(2),
            custom_instruction: Some("ignored for professional".to_string()),
        };
        let voice = BrandVoiceResolver::resolve(
            &settings,
            &BusinessInfo::new(" Bella's Bistro ").with_industry("restaurant"),
        );
        assert_eq!(voice.preset, TonePreset::Professional);
        assert_eq!((voice.formality, voice.warmth, voice.brevity), (9, 0, 2));
        assert_eq!(
            voice.custom_instruction.as_deref(),
            Some("ignored for professional")
        );
        assert_eq!(voice.business_name, "Bella's Bistro");
        assert_eq!(voice.industry.as_deref(), Some("restaurant"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let settings = RawBrandSettings {
            tone_preset: Some("CUSTOM".to_string()),
            warmth: Some(4),
            custom_instruction: Some("Sign off as Team Bella".to_string()),
            ..Default::default()
        };
        let business = BusinessInfo::new("Bella").with_industry("  ");
        let first = BrandVoiceResolver::resolve(&settings, &business);
        let second = BrandVoiceResolver::resolve(&settings, &business);
        assert_eq!(first, second);
        assert_eq!(first.preset, TonePreset::Custom);
        assert_eq!(first.industry, None);
    }
}
