//! classifiers.rs
//!
//! The classifier bank: commodity category, region, and event type. All three
//! are total functions resolved by first-match scans over fixed orders —
//! never "best match" — so unmatched input always lands on a documented
//! default instead of an error.

use crate::core::types::EventType;
use crate::pipeline::dictionaries::{EntityTable, KeywordTable};

pub const GENERAL_COMMODITY: &str = "general";
pub const GLOBAL_REGION: &str = "Global";

/// Regions whose producers skew oil-heavy; an entity hit there implies "oil"
/// when no keyword category matched.
const OIL_IMPLIED_REGIONS: [&str; 2] = ["Middle East", "West Africa"];

/// Event-type trigger groups, scanned in priority order.
const EVENT_GROUPS: [(&[&str], EventType); 4] = [
    (&["sanctions", "embargo", "ban"], EventType::GeopoliticalTension),
    (&["drought", "cold snap", "hurricane"], EventType::WeatherEvent),
    (&["strike", "outage", "disruption"], EventType::SupplyShock),
    (&["pipeline", "storage", "injection"], EventType::Infrastructure),
];

/// First category (in table definition order) owning at least one of the
/// extracted keywords. How many of its keywords matched is irrelevant.
/// Falls back to entity-implied "oil", then to "general".
pub fn classify_commodity(
    keywords: &[String],
    entities: &[String],
    keyword_table: &KeywordTable,
    entity_table: &EntityTable,
) -> String {
    for category in keyword_table.categories() {
        let hit = category
            .triggers
            .iter()
            .any(|t| keywords.iter().any(|k| k.eq_ignore_ascii_case(t)));
        if hit {
            return category.name.clone();
        }
    }

    let oil_implied = entities.iter().any(|e| {
        entity_table
            .region_of(e)
            .is_some_and(|region| OIL_IMPLIED_REGIONS.contains(&region))
    });
    if oil_implied {
        return "oil".to_string();
    }

    GENERAL_COMMODITY.to_string()
}

/// Region of the first matched entity, or "Global" when nothing matched.
pub fn match_region(entities: &[String], table: &EntityTable) -> String {
    entities
        .first()
        .and_then(|e| table.region_of(e))
        .unwrap_or(GLOBAL_REGION)
        .to_string()
}

/// First event group (in priority order) containing one of the extracted
/// keywords; market_movement when none does.
pub fn classify_event_type(keywords: &[String]) -> EventType {
    for (group, event_type) in EVENT_GROUPS {
        let hit = keywords
            .iter()
            .any(|k| group.iter().any(|g| k.eq_ignore_ascii_case(g)));
        if hit {
            return event_type;
        }
    }

    EventType::MarketMovement
}
