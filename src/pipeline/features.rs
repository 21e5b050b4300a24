//! features.rs
//!
//! Lexical feature extraction over normalized text:
//!   - entities (via the entity-region table)
//!   - trigger keywords (via the flattened commodity keyword table)
//!
//! Both scans are case-insensitive substring tests, performed in table
//! iteration order. Output order therefore follows the tables, not the
//! position of matches in the text.

use crate::pipeline::dictionaries::{EntityTable, KeywordTable};

/// Entity names occurring anywhere in `text`, in table order.
/// At most one hit per entity, however often it appears in the text.
pub fn recognize_entities(text: &str, table: &EntityTable) -> Vec<String> {
    let lower = text.to_lowercase();

    table
        .entries()
        .iter()
        .filter(|e| lower.contains(&e.name.to_lowercase()))
        .map(|e| e.name.clone())
        .collect()
}

/// Trigger keywords occurring anywhere in `text`, scanning the flattened
/// keyword lists in table order. Each flattened listing is tested on its own,
/// so a keyword listed under two categories can appear twice in the output.
pub fn extract_keywords(text: &str, table: &KeywordTable) -> Vec<String> {
    let lower = text.to_lowercase();

    table
        .flattened_triggers()
        .filter(|kw| lower.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::KeywordRowCfg;
    use crate::pipeline::dictionaries::EntityEntry;

    #[test]
    fn test_entities_in_table_order_not_text_order() {
        let table = EntityTable::default_entities();
        // Text mentions Nigeria before Iran; the table lists Iran first.
        let found = recognize_entities("Nigeria talks stall as Iran output rises", &table);
        assert_eq!(found, vec!["Iran".to_string(), "Nigeria".to_string()]);
    }

    #[test]
    fn test_entity_match_is_case_insensitive_and_deduplicated() {
        let table = EntityTable::default_entities();
        let found = recognize_entities("IRAN, iran and Iran again", &table);
        assert_eq!(found, vec!["Iran".to_string()]);
    }

    #[test]
    fn test_no_entities_yields_empty() {
        let table = EntityTable::default_entities();
        assert!(recognize_entities("Quiet session across the board", &table).is_empty());
        assert!(recognize_entities("", &table).is_empty());
    }

    #[test]
    fn test_keywords_are_substrings_of_input() {
        let table = KeywordTable::default_commodity();
        let text = "OPEC weighs crude embargo as refinery strike spreads";
        let lower = text.to_lowercase();
        let found = extract_keywords(text, &table);

        assert!(!found.is_empty());
        for kw in &found {
            assert!(lower.contains(&kw.to_lowercase()), "{} not in input", kw);
        }
    }

    #[test]
    fn test_keyword_order_follows_flattened_table() {
        let table = KeywordTable::default_commodity();
        // "strike" (metals) is listed after the oil triggers, so it comes last
        // even though it appears first in the text.
        let found = extract_keywords("Strike halts OPEC crude loading", &table);
        assert_eq!(
            found,
            vec!["OPEC".to_string(), "crude".to_string(), "strike".to_string()]
        );
    }

    #[test]
    fn duplicate_keyword_listed_twice_matches_twice() {
        // A keyword shared by two categories stays duplicated in the output;
        // downstream consumers rely on per-listing hits.
        let rows = vec![
            KeywordRowCfg {
                category: "oil".to_string(),
                triggers: vec!["sanctions".to_string(), "crude".to_string()],
            },
            KeywordRowCfg {
                category: "fx".to_string(),
                triggers: vec!["sanctions".to_string()],
            },
        ];
        let table = KeywordTable::from_rows(&rows);

        let found = extract_keywords("New sanctions announced", &table);
        assert_eq!(
            found,
            vec!["sanctions".to_string(), "sanctions".to_string()]
        );
    }

    #[test]
    fn test_adversarial_input_with_table_fragments() {
        let table = EntityTable::new(vec![EntityEntry {
            name: "Iran".to_string(),
            region: "Middle East".to_string(),
        }]);
        // Substring semantics: embedded occurrences count as matches.
        let found = recognize_entities("The word 'Iranians' contains it", &table);
        assert_eq!(found, vec!["Iran".to_string()]);
    }
}
