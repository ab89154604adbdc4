//! Item classification: which inventory slot an item belongs in.
//!
//! The catalog is immutable, loaded-once configuration. It performs no
//! capacity checks — those belong to the action applier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where an item is stored once acquired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Carried in hand or at the belt. At most two at a time.
    Weapon,
    /// Ordinary equipment stowed in the backpack.
    Backpack,
    /// Worn or kept at a named body location (unbounded slot).
    Special(String),
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Backpack => write!(f, "backpack"),
            Self::Special(location) => write!(f, "special ({location})"),
        }
    }
}

/// Fixed classification data for [`classify`](ItemCatalog::classify).
///
/// Matching is case-insensitive: special items match by exact folded
/// name, weapons by keyword containment, and everything else falls
/// through to the backpack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    /// Lowercase substrings that mark an item name as a weapon.
    weapon_keywords: Vec<String>,
    /// Lowercase special-item names mapped to the body location they occupy.
    special_locations: BTreeMap<String, String>,
}

impl ItemCatalog {
    /// Create a catalog from custom keyword and location data.
    ///
    /// Keys are folded to lowercase so lookups stay case-insensitive.
    pub fn new(
        weapon_keywords: impl IntoIterator<Item = String>,
        special_locations: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            weapon_keywords: weapon_keywords
                .into_iter()
                .map(|k| k.to_lowercase())
                .collect(),
            special_locations: special_locations
                .into_iter()
                .map(|(name, location)| (name.to_lowercase(), location))
                .collect(),
        }
    }

    /// Classify an item name into the slot it belongs in.
    pub fn classify(&self, item: &str) -> ItemKind {
        let folded = item.trim().to_lowercase();
        if let Some(location) = self.special_locations.get(&folded) {
            return ItemKind::Special(location.clone());
        }
        if self.weapon_keywords.iter().any(|kw| folded.contains(kw)) {
            return ItemKind::Weapon;
        }
        ItemKind::Backpack
    }
}

impl Default for ItemCatalog {
    /// The Book One reference data: the standard weapon list and the
    /// common special items with their body locations.
    fn default() -> Self {
        let weapons = [
            "axe",
            "bow",
            "broadsword",
            "dagger",
            "mace",
            "quarterstaff",
            "spear",
            "sword",
            "warhammer",
        ];
        let specials = [
            ("chainmail waistcoat", "torso"),
            ("crystal star pendant", "neck"),
            ("golden key", "pocket"),
            ("helmet", "head"),
            ("map of sommerlund", "pocket"),
            ("seal of hammerdal", "finger"),
            ("shield", "arm"),
            ("vordak gem", "pouch"),
        ];
        Self::new(
            weapons.iter().map(|s| (*s).to_string()),
            specials
                .iter()
                .map(|(n, l)| ((*n).to_string(), (*l).to_string())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapons_match_by_keyword() {
        let catalog = ItemCatalog::default();
        assert_eq!(catalog.classify("Sword"), ItemKind::Weapon);
        assert_eq!(catalog.classify("Rusty SWORD"), ItemKind::Weapon);
        assert_eq!(catalog.classify("short sword"), ItemKind::Weapon);
        assert_eq!(catalog.classify("Hunting Bow"), ItemKind::Weapon);
    }

    #[test]
    fn special_items_match_exactly() {
        let catalog = ItemCatalog::default();
        assert_eq!(
            catalog.classify("Chainmail Waistcoat"),
            ItemKind::Special("torso".to_string())
        );
        assert_eq!(
            catalog.classify("  helmet "),
            ItemKind::Special("head".to_string())
        );
        assert_eq!(
            catalog.classify("Crystal Star Pendant"),
            ItemKind::Special("neck".to_string())
        );
    }

    #[test]
    fn everything_else_is_backpack() {
        let catalog = ItemCatalog::default();
        assert_eq!(catalog.classify("Rope"), ItemKind::Backpack);
        assert_eq!(catalog.classify("Meal"), ItemKind::Backpack);
        assert_eq!(catalog.classify("Torch"), ItemKind::Backpack);
    }

    #[test]
    fn custom_catalog() {
        let catalog = ItemCatalog::new(
            vec!["whip".to_string()],
            vec![("Amulet".to_string(), "neck".to_string())],
        );
        assert_eq!(catalog.classify("Leather Whip"), ItemKind::Weapon);
        assert_eq!(
            catalog.classify("amulet"),
            ItemKind::Special("neck".to_string())
        );
        // The default weapon list does not apply to a custom catalog.
        assert_eq!(catalog.classify("Sword"), ItemKind::Backpack);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ItemKind::Weapon.to_string(), "weapon");
        assert_eq!(ItemKind::Backpack.to_string(), "backpack");
        assert_eq!(
            ItemKind::Special("head".to_string()).to_string(),
            "special (head)"
        );
    }
}
