//! Built-in item catalog.
//!
//! Maps item identifiers to the description written into each record. The
//! table is hardcoded; adding an item means adding a line to
//! [`BUILTIN_ENTRIES`].

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Identifier/description pairs in catalog order.
pub const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("StoneTool", "StoneTool"),
    ("BronzeTool", "BronzeTool"),
    ("IronTool", "IronTool"),
    ("SteelTool", "SteelTool"),
    ("SteamPower", "SteamPower"),
    ("ElectronicTechnology", "ElectronicTechnology"),
    ("Religion", "Religion"),
    ("Chiefdom", "Chiefdom"),
    ("Feudal", "Feudal"),
    ("Centralization", "Centralization"),
    ("Democracy", "Democracy"),
    ("Theocracy", "Theocracy"),
    ("Monarchy", "Monarchy"),
    ("Empire", "Empire"),
    ("Totalitarian", "Totalitarian"),
    ("PermanentMember", "PermanentMember"),
    ("Wheat", "Wheat"),
    ("Alcohol", "Alcohol"),
    ("Meat", "Meat"),
    ("Fish", "Fish"),
    ("GatheringAndHunting", "GatheringAndHunting"),
    ("Fishery", "Fishery"),
    ("Writing", "Writing"),
    ("Book", "Book"),
    ("Printing", "Printing"),
    ("Currency", "Currency"),
    ("Trading", "Trading"),
    ("Industrialization", "Industrialization"),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::from_entries(BUILTIN_ENTRIES));

/// Read-only identifier → description table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<String, String>,
}

impl Catalog {
    /// The process-wide built-in catalog, built on first access.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from identifier/description pairs.
    ///
    /// Later duplicates overwrite the description but keep the first position.
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        let entries = entries
            .iter()
            .map(|(id, description)| (id.to_string(), description.to_string()))
            .collect();

        Self { entries }
    }

    /// Look up the description for an identifier
    pub fn description(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Check if an identifier is in the catalog
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Identifiers in catalog order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_every_entry() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 28);
        assert_eq!(catalog.len(), BUILTIN_ENTRIES.len());
    }

    #[test]
    fn test_builtin_maps_keys_to_themselves() {
        let catalog = Catalog::builtin();
        for id in catalog.identifiers() {
            assert_eq!(catalog.description(id), Some(id));
        }
    }

    #[test]
    fn test_builtin_preserves_order() {
        let ids: Vec<&str> = Catalog::builtin().identifiers().collect();
        assert_eq!(ids.first(), Some(&"StoneTool"));
        assert_eq!(ids.last(), Some(&"Industrialization"));
    }

    #[test]
    fn test_empty_identifier_is_not_a_key() {
        assert!(!Catalog::builtin().contains(""));
        assert_eq!(Catalog::builtin().description(""), None);
    }

    #[test]
    fn test_from_entries_duplicate_keeps_first_position() {
        let catalog = Catalog::from_entries(&[("A", "one"), ("B", "two"), ("A", "three")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.description("A"), Some("three"));
        let ids: Vec<&str> = catalog.identifiers().collect();
        assert_eq!(ids, vec!["A", "B"]);
    }
}
