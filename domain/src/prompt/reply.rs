//! Prompt templates for single review replies

use crate::brand_voice::entities::{BrandVoice, TonePreset};
use crate::review::entities::Review;

/// Templates for the reply generation prompts
pub struct ReplyPromptTemplate;

impl ReplyPromptTemplate {
    /// System prompt: brand voice and business context
    pub fn system(voice: &BrandVoice) -> String {
        let business = if voice.business_name.is_empty() {
            "a local business".to_string()
        } else {
            voice.business_name.clone()
        };

        let mut prompt = format!(
            "You write public replies to customer reviews on behalf of {}",
            business
        );
        if let Some(industry) = &voice.industry {
            prompt.push_str(&format!(", a business in the {} industry", industry));
        }
        prompt.push_str(".\n\n");

        prompt.push_str(&format!("Tone: {}\n", Self::tone_description(voice.preset)));
        prompt.push_str(&format!(
            "Formality: {}\nWarmth: {}\nLength: {}\n",
            Self::scale(voice.formality, ["very casual", "casual", "balanced", "formal", "very formal"]),
            Self::scale(voice.warmth, ["reserved", "polite", "friendly", "warm", "effusive"]),
            Self::scale(voice.brevity, [
                "detailed (4-5 sentences)",
                "fairly detailed (3-4 sentences)",
                "moderate (2-3 sentences)",
                "short (1-2 sentences)",
                "one sentence",
            ]),
        ));

        if let Some(instruction) = voice.active_custom_instruction() {
            prompt.push_str(&format!("Additional instructions from the owner: {}\n", instruction));
        }

        prompt.push_str(
            r#"
Rules:
- Address the customer by name.
- Respond to the specifics of the review; do not invent facts, offers, or policies.
- For negative reviews, apologize sincerely and invite the customer to get in touch.
- Never mention that you are an AI.
- Reply with the reply text only: no quotes, no preamble, no signature placeholders."#,
        );

        prompt
    }

    /// User prompt: the review itself
    pub fn user(review: &Review) -> String {
        let text = if review.text.trim().is_empty() {
            "(no written review, rating only)"
        } else {
            review.text.trim()
        };

        format!(
            r#"Customer name: {}
Rating: {} out of 5 stars
Review:
{}

Write the reply."#,
            review.customer_name, review.rating, text
        )
    }

    fn tone_description(preset: TonePreset) -> &'static str {
        match preset {
            TonePreset::Friendly => "friendly and approachable, like a neighbourhood owner",
            TonePreset::Professional => "professional and courteous, polished but not stiff",
            TonePreset::Playful => "playful and upbeat, light humour where appropriate",
            TonePreset::Custom => "follow the owner's instructions below",
        }
    }

    /// Describe a 1..=5 slider; out-of-range values clamp to the nearest end
    fn scale(value: u8, labels: [&'static str; 5]) -> &'static str {
        labels[(value.clamp(1, 5) - 1) as usize]
    }
}
