//! Insights validation/repair.
//!
//! [`InsightsValidator::validate`] is total over any JSON value: whatever
//! the provider returned, the result is a fully populated, bounded
//! [`InsightsBundle`].

use super::entities::{CompetitiveInsights, InsightsBundle, MarketPositioning};
use super::rules::{FieldRule, ListRule, lookup, sanitize_list, sanitize_object};
use serde_json::{Map, Value};

const PRIORITIES: &[&str] = &["high", "medium", "low"];
const COMPLEXITIES: &[&str] = &["simple", "moderate", "complex"];
const HIGHLIGHT_TYPES: &[&str] = &["positive", "negative", "notable", "trending"];
const PRICE_PERCEPTIONS: &[&str] = &["budget", "value", "premium", "luxury"];
const QUALITY_POSITIONS: &[&str] = &["basic", "standard", "premium", "exceptional"];
const SERVICE_LEVELS: &[&str] = &["basic", "good", "excellent", "exceptional"];

const POSITIVE_THEME_FIELDS: &[FieldRule] = &[
    FieldRule::required_text("theme").with_aliases(&["name", "title"]),
    FieldRule::text("description", "Customers mentioned this positively"),
    FieldRule::text("exampleQuote", "").with_aliases(&["example_quote", "quote"]),
    FieldRule::number("confidence", 0.0, 1.0, 0.8),
    FieldRule::number("representativeness", 0.0, 1.0, 0.7),
];

const IMPROVEMENT_THEME_FIELDS: &[FieldRule] = &[
    FieldRule::required_text("theme").with_aliases(&["name", "title"]),
    FieldRule::text("description", "Customers raised this as an area to improve"),
    FieldRule::text("impact", "Impact assessment pending"),
    FieldRule::text("suggestedAction", "Review related feedback and define next steps")
        .with_aliases(&["suggested_action", "recommendation"]),
    FieldRule::choice("priority", PRIORITIES, "medium"),
    FieldRule::choice("implementationComplexity", COMPLEXITIES, "moderate")
        .with_aliases(&["implementation_complexity"]),
    FieldRule::count("affectedCustomerCount", 1, 100, 1)
        .with_aliases(&["affected_customer_count"]),
    FieldRule::number("confidence", 0.0, 1.0, 0.8),
];

const HIGHLIGHT_FIELDS: &[FieldRule] = &[
    FieldRule::required_text("quote").with_aliases(&["excerpt", "text"]),
    FieldRule::text("customerName", "Anonymous").with_aliases(&["customer_name", "customer"]),
    FieldRule::count("rating", 1, 5, 3),
    FieldRule::choice("type", HIGHLIGHT_TYPES, "notable").with_aliases(&["highlightType"]),
    FieldRule::text("reason", "Noteworthy feedback"),
];

const VALUE_PROP_FIELDS: &[FieldRule] = &[
    FieldRule::required_text("proposition").with_aliases(&["title", "name"]),
    FieldRule::text("evidence", "Mentioned across recent reviews"),
    FieldRule::number("confidence", 0.0, 1.0, 0.8),
];

const ADVANTAGE_FIELDS: &[FieldRule] = &[
    FieldRule::required_text("advantage").with_aliases(&["title", "name"]),
    FieldRule::text("evidence", "Mentioned across recent reviews"),
    FieldRule::number("confidence", 0.0, 1.0, 0.8),
];

const MARKET_GAP_FIELDS: &[FieldRule] = &[
    FieldRule::required_text("gap").with_aliases(&["title", "name"]),
    FieldRule::text("opportunity", "Worth exploring with customers"),
    FieldRule::number("confidence", 0.0, 1.0, 0.8),
];

const MARKET_POSITIONING_FIELDS: &[FieldRule] = &[
    FieldRule::choice("pricePerception", PRICE_PERCEPTIONS, "value")
        .with_aliases(&["price_perception"]),
    FieldRule::choice("qualityPosition", QUALITY_POSITIONS, "standard")
        .with_aliases(&["quality_position"]),
    FieldRule::choice("serviceLevel", SERVICE_LEVELS, "good").with_aliases(&["service_level"]),
];

pub const POSITIVE_THEMES: ListRule = ListRule {
    key: "positiveThemes",
    aliases: &["positive_themes"],
    max_items: InsightsBundle::MAX_POSITIVE_THEMES,
    item: POSITIVE_THEME_FIELDS,
};

pub const IMPROVEMENT_THEMES: ListRule = ListRule {
    key: "improvementThemes",
    aliases: &["improvement_themes"],
    max_items: InsightsBundle::MAX_IMPROVEMENT_THEMES,
    item: IMPROVEMENT_THEME_FIELDS,
};

pub const HIGHLIGHTS: ListRule = ListRule {
    key: "highlights",
    aliases: &[],
    max_items: InsightsBundle::MAX_HIGHLIGHTS,
    item: HIGHLIGHT_FIELDS,
};

pub const UNIQUE_VALUE_PROPS: ListRule = ListRule {
    key: "uniqueValueProps",
    aliases: &["unique_value_props", "uniqueValuePropositions"],
    max_items: InsightsBundle::MAX_UNIQUE_VALUE_PROPS,
    item: VALUE_PROP_FIELDS,
};

pub const COMPETITIVE_ADVANTAGES: ListRule = ListRule {
    key: "competitiveAdvantages",
    aliases: &["competitive_advantages", "advantages"],
    max_items: InsightsBundle::MAX_COMPETITIVE_ADVANTAGES,
    item: ADVANTAGE_FIELDS,
};

pub const MARKET_GAPS: ListRule = ListRule {
    key: "marketGaps",
    aliases: &["market_gaps", "gaps"],
    max_items: InsightsBundle::MAX_MARKET_GAPS,
    item: MARKET_GAP_FIELDS,
};

const OVERALL_CONFIDENCE: FieldRule = FieldRule::number(
    "overallConfidence",
    0.0,
    1.0,
    InsightsBundle::DEFAULT_OVERALL_CONFIDENCE,
)
.with_aliases(&["overall_confidence"]);

pub struct InsightsValidator;

impl InsightsValidator {
    /// Repair an arbitrary JSON value into a bounded, fully populated bundle.
    ///
    /// A non-object top level is treated as an empty object.
    pub fn validate(raw: &Value) -> InsightsBundle {
        let empty = Map::new();
        let obj = raw.as_object().unwrap_or(&empty);

        InsightsBundle {
            positive_themes: Self::list(obj, &POSITIVE_THEMES),
            improvement_themes: Self::list(obj, &IMPROVEMENT_THEMES),
            highlights: Self::list(obj, &HIGHLIGHTS),
            competitive_insights: Self::competitive(obj),
            overall_confidence: OVERALL_CONFIDENCE
                .apply(lookup(obj, OVERALL_CONFIDENCE.key, OVERALL_CONFIDENCE.aliases))
                .and_then(|v| v.as_f64())
                .unwrap_or(InsightsBundle::DEFAULT_OVERALL_CONFIDENCE),
        }
    }

    fn list<T: serde::de::DeserializeOwned>(obj: &Map<String, Value>, rule: &ListRule) -> Vec<T> {
        sanitize_list(lookup(obj, rule.key, rule.aliases), rule)
    }

    fn competitive(obj: &Map<String, Value>) -> CompetitiveInsights {
        let empty = Map::new();
        let block = lookup(obj, "competitiveInsights", &["competitive_insights"])
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let positioning = lookup(block, "marketPositioning", &["market_positioning"])
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let market_positioning = sanitize_object(positioning, MARKET_POSITIONING_FIELDS)
            .and_then(|m| serde_json::from_value::<MarketPositioning>(Value::Object(m)).ok())
            .unwrap_or_default();

        CompetitiveInsights {
            unique_value_props: Self::list(block, &UNIQUE_VALUE_PROPS),
            competitive_advantages: Self::list(block, &COMPETITIVE_ADVANTAGES),
            market_gaps: Self::list(block, &MARKET_GAPS),
            market_positioning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::entities::{
        HighlightType, ImplementationComplexity, Priority, PricePerception, QualityPosition,
        ServiceLevel,
    };
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_wrong_types_degrade_to_defaults() {
        let bundle =
            InsightsValidator::validate(&json!({"positiveThemes": "not an array", "overallConfidence": 5}));
        assert!(bundle.positive_themes.is_empty());
        assert_eq!(bundle.overall_confidence, 0.85);
    }

    #[test]
    fn test_non_object_top_level() {
        for raw in [json!(null), json!([1, 2]), json!("text"), json!(3.5)] {
            assert_eq!(InsightsValidator::validate(&raw), InsightsBundle::default());
        }
    }

    #[test]
    fn test_well_formed_payload_is_preserved() {
        let raw = json!({
            "positiveThemes": [{
                "theme": "Friendly staff",
                "description": "Staff are welcoming",
                "exampleQuote": "Everyone was so nice",
                "confidence": 0.9,
                "representativeness": 0.6
            }],
            "improvementThemes": [{
                "theme": "Wait times",
                "description": "Long queues at lunch",
                "impact": "Customers leave before ordering",
                "suggestedAction": "Add a second register",
                "priority": "high",
                "implementationComplexity": "simple",
                "affectedCustomerCount": 12,
                "confidence": 0.75
            }],
            "highlights": [{
                "quote": "Best coffee in town",
                "customerName": "Amy",
                "rating": 5,
                "type": "positive",
                "reason": "Specific product praise"
            }],
            "competitiveInsights": {
                "uniqueValueProps": [{"proposition": "Roasted on site", "evidence": "3 mentions", "confidence": 0.7}],
                "competitiveAdvantages": [{"advantage": "Open late", "evidence": "Night owls", "confidence": 0.6}],
                "marketGaps": [{"gap": "No delivery", "opportunity": "Partner with a courier"}],
                "marketPositioning": {"pricePerception": "premium", "qualityPosition": "exceptional", "serviceLevel": "excellent"}
            },
            "overallConfidence": 0.9
        });

        let bundle = InsightsValidator::validate(&raw);
        assert_eq!(bundle.positive_themes[0].theme, "Friendly staff");
        assert_eq!(bundle.positive_themes[0].representativeness, 0.6);
        let improvement = &bundle.improvement_themes[0];
        assert_eq!(improvement.priority, Priority::High);
        assert_eq!(
            improvement.implementation_complexity,
            ImplementationComplexity::Simple
        );
        assert_eq!(improvement.affected_customer_count, 12);
        assert_eq!(bundle.highlights[0].highlight_type, HighlightType::Positive);
        let positioning = bundle.competitive_insights.market_positioning;
        assert_eq!(positioning.price_perception, PricePerception::Premium);
        assert_eq!(positioning.quality_position, QualityPosition::Exceptional);
        assert_eq!(positioning.service_level, ServiceLevel::Excellent);
        assert_eq!(bundle.competitive_insights.unique_value_props.len(), 1);
        assert_eq!(
            bundle.competitive_insights.competitive_advantages[0].advantage,
            "Open late"
        );
        let gap = &bundle.competitive_insights.market_gaps[0];
        assert_eq!(gap.gap, "No delivery");
        assert_eq!(gap.confidence, 0.8);
        assert_eq!(bundle.overall_confidence, 0.9);
    }

    #[test]
    fn test_item_level_repair() {
        let raw = json!({
            "improvementThemes": [{
                "theme": "Parking",
                "impact": 7,
                "priority": "critical",
                "implementation_complexity": "huge",
                "affectedCustomerCount": 5000,
                "confidence": "sure"
            }],
            "highlights": [{"quote": "Meh", "rating": 11, "type": "viral"}]
        });

        let bundle = InsightsValidator::validate(&raw);
        let theme = &bundle.improvement_themes[0];
        assert_eq!(theme.impact, "Impact assessment pending");
        assert_eq!(theme.priority, Priority::Medium);
        assert_eq!(
            theme.implementation_complexity,
            ImplementationComplexity::Moderate
        );
        assert_eq!(theme.affected_customer_count, 1);
        assert_eq!(theme.confidence, 0.8);

        let highlight = &bundle.highlights[0];
        assert_eq!(highlight.rating, 3);
        assert_eq!(highlight.highlight_type, HighlightType::Notable);
        assert_eq!(highlight.customer_name, "Anonymous");
    }

    #[test]
    fn test_lists_truncated_to_caps() {
        let themes: Vec<Value> = (0..20).map(|i| json!({"theme": format!("t{i}")})).collect();
        let quotes: Vec<Value> = (0..20).map(|i| json!({"quote": format!("q{i}")})).collect();
        let props: Vec<Value> = (0..20).map(|i| json!({"proposition": format!("p{i}")})).collect();
        let raw = json!({
            "positiveThemes": themes,
            "improvementThemes": themes,
            "highlights": quotes,
            "competitiveInsights": {"uniqueValueProps": props.clone(), "marketGaps": props}
        });

        let bundle = InsightsValidator::validate(&raw);
        assert_eq!(bundle.positive_themes.len(), 5);
        assert_eq!(bundle.improvement_themes.len(), 4);
        assert_eq!(bundle.highlights.len(), 6);
        assert_eq!(bundle.competitive_insights.unique_value_props.len(), 5);
        // Gap items need a "gap" field, so proposition-only items are dropped
        assert!(bundle.competitive_insights.market_gaps.is_empty());
        // Truncation keeps the first items
        assert_eq!(bundle.positive_themes[4].theme, "t4");
    }

    #[test]
    fn test_items_without_required_text_are_dropped_before_truncation() {
        let mut themes: Vec<Value> = (0..5).map(|_| json!({"description": "no theme"})).collect();
        themes.push(json!({"theme": "kept"}));
        let bundle = InsightsValidator::validate(&json!({ "positiveThemes": themes }));
        assert_eq!(bundle.positive_themes.len(), 1);
        assert_eq!(bundle.positive_themes[0].theme, "kept");
    }

    #[test]
    fn test_choice_tables_match_enum_serialization() {
        for value in PRIORITIES {
            assert!(serde_json::from_value::<Priority>(json!(value)).is_ok());
        }
        for value in COMPLEXITIES {
            assert!(serde_json::from_value::<ImplementationComplexity>(json!(value)).is_ok());
        }
        for value in HIGHLIGHT_TYPES {
            assert!(serde_json::from_value::<HighlightType>(json!(value)).is_ok());
        }
        for value in PRICE_PERCEPTIONS {
            assert!(serde_json::from_value::<PricePerception>(json!(value)).is_ok());
        }
        for value in QUALITY_POSITIONS {
            assert!(serde_json::from_value::<QualityPosition>(json!(value)).is_ok());
        }
        for value in SERVICE_LEVELS {
            assert!(serde_json::from_value::<ServiceLevel>(json!(value)).is_ok());
        }
    }

    // ==================== Property tests ====================

    fn arb_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            (-1.0e6f64..1.0e6).prop_map(|n| json!(n)),
            "[a-z ]{0,12}".prop_map(Value::String),
            prop::sample::select(vec![
                "high", "LOW", "urgent", "notable", "premium", "luxury", "exceptional", "",
            ])
            .prop_map(|s| Value::String(s.to_string())),
        ]
    }

    fn arb_key() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "positiveThemes",
            "improvementThemes",
            "highlights",
            "competitiveInsights",
            "uniqueValueProps",
            "competitiveAdvantages",
            "marketGaps",
            "marketPositioning",
            "advantage",
            "gap",
            "overallConfidence",
            "theme",
            "quote",
            "proposition",
            "priority",
            "implementationComplexity",
            "affectedCustomerCount",
            "confidence",
            "representativeness",
            "rating",
            "type",
            "pricePerception",
            "qualityPosition",
            "serviceLevel",
            "impact",
            "junk",
        ])
        .prop_map(str::to_string)
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        arb_leaf().prop_recursive(4, 64, 12, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..12).prop_map(Value::Array),
                prop::collection::btree_map(arb_key(), inner, 0..8)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_validate_is_total_and_bounded(raw in arb_json()) {
            let bundle = InsightsValidator::validate(&raw);

            prop_assert!(bundle.positive_themes.len() <= InsightsBundle::MAX_POSITIVE_THEMES);
            prop_assert!(bundle.improvement_themes.len() <= InsightsBundle::MAX_IMPROVEMENT_THEMES);
            prop_assert!(bundle.highlights.len() <= InsightsBundle::MAX_HIGHLIGHTS);
            prop_assert!(
                bundle.competitive_insights.unique_value_props.len()
                    <= InsightsBundle::MAX_UNIQUE_VALUE_PROPS
            );
            prop_assert!(
                bundle.competitive_insights.competitive_advantages.len()
                    <= InsightsBundle::MAX_COMPETITIVE_ADVANTAGES
            );
            prop_assert!(
                bundle.competitive_insights.market_gaps.len() <= InsightsBundle::MAX_MARKET_GAPS
            );
            prop_assert!((0.0..=1.0).contains(&bundle.overall_confidence));

            for t in &bundle.positive_themes {
                prop_assert!(!t.theme.is_empty());
                prop_assert!((0.0..=1.0).contains(&t.confidence));
                prop_assert!((0.0..=1.0).contains(&t.representativeness));
            }
            for t in &bundle.improvement_themes {
                prop_assert!((1..=100).contains(&t.affected_customer_count));
                prop_assert!((0.0..=1.0).contains(&t.confidence));
                prop_assert!(t.impact.chars().count() <= 500);
            }
            for h in &bundle.highlights {
                prop_assert!((1..=5).contains(&h.rating));
            }
            for p in &bundle.competitive_insights.unique_value_props {
                prop_assert!((0.0..=1.0).contains(&p.confidence));
            }

            // Re-serializing yields every top-level key
            let out = serde_json::to_value(&bundle).unwrap();
            for key in ["positiveThemes", "improvementThemes", "highlights", "competitiveInsights", "overallConfidence"] {
                prop_assert!(out.get(key).is_some());
            }
        }
    }
}
