//! Deterministic fallback replies.
//!
//! Used whenever the AI provider cannot produce a reply. Keyed by
//! `(rating, tone preset)`; `{name}` is replaced with the customer's name.

use crate::brand_voice::entities::TonePreset;
use crate::core::rating::Rating;

const NAME_PLACEHOLDER: &str = "{name}";

/// Rows: 1..=5 stars. Columns: friendly, professional, playful, custom.
static FALLBACK_TEMPLATES: [[&str; 4]; 5] = [
    [
        "Hi {name}, we're really sorry your experience fell short. This isn't the standard we aim for, and we'd love the chance to make it right. Please reach out to us directly.",
        "Dear {name}, we sincerely apologize for your experience. Your feedback has been shared with our management team, and we would appreciate the opportunity to resolve this with you directly.",
        "Oh no, {name}! That's definitely not the experience we want anyone to have. We're sorry, and we'd really like to turn this around. Please get in touch with us!",
        "Hi {name}, we're sorry your visit did not meet expectations. Thank you for telling us, and please contact us directly so we can make this right.",
    ],
    [
        "Hi {name}, thanks for letting us know, and we're sorry things didn't go well. We'd appreciate the chance to hear more and do better next time.",
        "Dear {name}, thank you for your feedback. We regret that your experience did not meet expectations and would welcome the opportunity to discuss it further.",
        "Thanks for the honest feedback, {name}! We clearly missed the mark this time, and we'd love another shot at impressing you.",
        "Hi {name}, thank you for your feedback. We're sorry we fell short and would like to learn more about how we can improve.",
    ],
    [
        "Hi {name}, thanks for sharing your thoughts! We're glad some things went well, and we'll use your feedback to make your next visit even better.",
        "Dear {name}, thank you for your review. We value your feedback and will use it to continue improving our service.",
        "Thanks, {name}! Sounds like we were good but not great, and we're on a mission to fix that. Hope to see you again soon!",
        "Hi {name}, thank you for taking the time to leave a review. Your feedback helps us improve, and we hope to see you again.",
    ],
    [
        "Thanks so much, {name}! We're happy you had a good experience, and we hope to see you again soon.",
        "Dear {name}, thank you for your positive review. We are pleased you had a good experience and look forward to serving you again.",
        "Woohoo, thanks {name}! We're so glad you enjoyed yourself. Come back soon, we'll be here!",
        "Hi {name}, thank you for the kind review! We're glad you had a good experience and look forward to your next visit.",
    ],
    [
        "Thank you so much, {name}! We're thrilled you had a great experience, and we can't wait to welcome you back.",
        "Dear {name}, thank you for your excellent review. We are delighted to have exceeded your expectations and look forward to serving you again.",
        "{name}, you just made our day! Thanks for the five stars, we can't wait to see you again!",
        "Hi {name}, thank you for the wonderful review! We're delighted you had a great experience and hope to see you again soon.",
    ],
];

/// Customer name used when the stored name is blank
const ANONYMOUS_CUSTOMER: &str = "there";

/// Select and fill the fallback reply for a rating and tone
pub fn fallback_reply(rating: Rating, preset: TonePreset, customer_name: &str) -> String {
    let template = FALLBACK_TEMPLATES[rating.bucket()][preset.index()];
    let name = customer_name.trim();
    let name = if name.is_empty() {
        ANONYMOUS_CUSTOMER
    } else {
        name
    };
    template.replace(NAME_PLACEHOLDER, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_combination_contains_name() {
        for rating in Rating::all() {
            for preset in TonePreset::ALL {
                let reply = fallback_reply(rating, preset, "Amy");
                assert!(!reply.is_empty());
                assert!(
                    reply.contains("Amy"),
                    "rating {} / {} missing name: {}",
                    rating,
                    preset,
                    reply
                );
                assert!(!reply.contains(NAME_PLACEHOLDER));
            }
        }
    }

    #[test]
    fn test_is_deterministic() {
        let rating = Rating::new(5).unwrap();
        assert_eq!(
            fallback_reply(rating, TonePreset::Friendly, "Amy"),
            fallback_reply(rating, TonePreset::Friendly, "Amy")
        );
    }

    #[test]
    fn test_five_star_friendly() {
        let reply = fallback_reply(Rating::new(5).unwrap(), TonePreset::Friendly, "Amy");
        assert_eq!(
            reply,
            "Thank you so much, Amy! We're thrilled you had a great experience, and we can't wait to welcome you back."
        );
    }

    #[test]
    fn test_blank_name() {
        let reply = fallback_reply(Rating::new(1).unwrap(), TonePreset::Professional, "  ");
        assert!(reply.starts_with("Dear there,"));
    }
}
