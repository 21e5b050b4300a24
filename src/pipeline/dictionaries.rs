//! dictionaries.rs
//!
//! The two static classification tables:
//!   - KeywordTable: commodity category -> ordered trigger keywords
//!   - EntityTable: entity name -> region
//!
//! Both are Vec-backed and scanned as ordered lists. Iteration order is part
//! of the contract: the commodity classifier tie-breaks on first matching
//! category, and matched entities/keywords are reported in table order, not
//! text order. Keep this minimal & composable – defaults live here, overrides
//! come from config.

use crate::config::config::{EntityRowCfg, KeywordRowCfg};

/// One commodity category with its ordered trigger keywords.
#[derive(Debug, Clone)]
pub struct KeywordCategory {
    pub name: String,
    pub triggers: Vec<String>,
}

/// Ordered commodity-category -> trigger-keyword table.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    categories: Vec<KeywordCategory>,
}

impl KeywordTable {
    pub fn new(categories: Vec<KeywordCategory>) -> Self {
        Self { categories }
    }

    pub fn from_rows(rows: &[KeywordRowCfg]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| KeywordCategory {
                    name: r.category.clone(),
                    triggers: r.triggers.clone(),
                })
                .collect(),
        )
    }

    /// Curated default table. Category order is the classifier priority.
    pub fn default_commodity() -> Self {
        let category = |name: &str, triggers: &[&str]| KeywordCategory {
            name: name.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        };

        Self::new(vec![
            category(
                "oil",
                &[
                    "OPEC", "crude", "refinery", "pipeline", "barrel", "sanctions",
                    "embargo", "hurricane", "disruption",
                ],
            ),
            category(
                "gas",
                &["LNG", "natural gas", "storage", "injection", "cold snap", "outage"],
            ),
            category(
                "agriculture",
                &["drought", "harvest", "wheat", "corn", "soybean", "crop", "grain"],
            ),
            category(
                "metals",
                &["copper", "gold", "nickel", "smelter", "mine", "strike"],
            ),
            category(
                "fx",
                &["dollar", "euro", "yuan", "devaluation", "interest rate", "central bank"],
            ),
        ])
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    /// All trigger keywords in table order: categories in definition order,
    /// keywords in per-category order. A keyword listed under two categories
    /// appears once per listing.
    pub fn flattened_triggers(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.triggers.iter().map(|t| t.as_str()))
    }
}

/// One entity name and the region it resolves to.
#[derive(Debug, Clone)]
pub struct EntityEntry {
    pub name: String,
    pub region: String,
}

/// Ordered entity -> region table. Each entity maps to exactly one region.
#[derive(Debug, Clone)]
pub struct EntityTable {
    entries: Vec<EntityEntry>,
}

impl EntityTable {
    pub fn new(entries: Vec<EntityEntry>) -> Self {
        Self { entries }
    }

    pub fn from_rows(rows: &[EntityRowCfg]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| EntityEntry {
                    name: r.name.clone(),
                    region: r.region.clone(),
                })
                .collect(),
        )
    }

    /// Curated default table (producer countries, tiny sample).
    pub fn default_entities() -> Self {
        let entry = |name: &str, region: &str| EntityEntry {
            name: name.to_string(),
            region: region.to_string(),
        };

        Self::new(vec![
            entry("Iran", "Middle East"),
            entry("Iraq", "Middle East"),
            entry("Saudi Arabia", "Middle East"),
            entry("Kuwait", "Middle East"),
            entry("Russia", "Eastern Europe"),
            entry("Ukraine", "Eastern Europe"),
            entry("Nigeria", "West Africa"),
            entry("Ghana", "West Africa"),
            entry("Venezuela", "South America"),
            entry("Brazil", "South America"),
            entry("Chile", "South America"),
            entry("China", "East Asia"),
            entry("India", "South Asia"),
            entry("Australia", "Oceania"),
            entry("United States", "North America"),
            entry("Canada", "North America"),
            entry("Norway", "Northern Europe"),
        ])
    }

    pub fn entries(&self) -> &[EntityEntry] {
        &self.entries
    }

    /// Region of `entity`, scanning entries in order. Names are compared
    /// case-insensitively so canonical and matched forms line up.
    pub fn region_of(&self, entity: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(entity))
            .map(|e| e.region.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_well_formed() {
        let keywords = KeywordTable::default_commodity();
        assert!(!keywords.categories().is_empty());
        for category in keywords.categories() {
            assert!(!category.name.is_empty());
            assert!(!category.triggers.is_empty(), "{} has no triggers", category.name);
        }

        // Category names are unique.
        let mut names: Vec<_> = keywords.categories().iter().map(|c| &c.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), keywords.categories().len());

        let entities = EntityTable::default_entities();
        for e in entities.entries() {
            assert!(!e.name.is_empty());
            assert!(!e.region.is_empty());
        }
    }

    #[test]
    fn test_flattened_triggers_order() {
        let table = KeywordTable::new(vec![
            KeywordCategory {
                name: "a".to_string(),
                triggers: vec!["x".to_string(), "y".to_string()],
            },
            KeywordCategory {
                name: "b".to_string(),
                triggers: vec!["z".to_string(), "x".to_string()],
            },
        ]);

        // Category order first, per-category order second; the repeated
        // keyword keeps both listings.
        let flat: Vec<_> = table.flattened_triggers().collect();
        assert_eq!(flat, vec!["x", "y", "z", "x"]);
    }

    #[test]
    fn test_region_lookup() {
        let table = EntityTable::default_entities();
        assert_eq!(table.region_of("Iran"), Some("Middle East"));
        assert_eq!(table.region_of("nigeria"), Some("West Africa"));
        assert_eq!(table.region_of("Atlantis"), None);
    }

    #[test]
    fn test_from_rows_preserves_order() {
        let rows = vec![
            KeywordRowCfg {
                category: "metals".to_string(),
                triggers: vec!["copper".to_string()],
            },
            KeywordRowCfg {
                category: "oil".to_string(),
                triggers: vec!["crude".to_string()],
            },
        ];
        let table = KeywordTable::from_rows(&rows);
        assert_eq!(table.categories()[0].name, "metals");
        assert_eq!(table.categories()[1].name, "oil");
    }
}
