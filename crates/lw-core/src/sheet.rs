//! The action sheet: per-session stats, inventory, flags, and
//! choice/drop bookkeeping.
//!
//! A sheet is created once per play session, mutated exclusively by
//! the action applier one batch at a time, and discarded when the
//! session ends. The serde field names match the interpreter's JSON
//! contract exactly.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;

/// Identifier of a numbered gamebook section.
pub type SectionId = u32;

/// The player's in-session mutable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSheet {
    /// Endurance points. May dip below zero inside a batch; the
    /// applier clamps to zero when the batch completes.
    pub endurance: i32,
    /// Combat skill.
    pub combat_skill: i32,
    /// Everything carried.
    pub inventory: Inventory,
    /// Named boolean flags (disciplines, story state).
    pub flags: BTreeMap<String, bool>,
    /// Destination section ids whose choices are no longer offered.
    pub removed_choices: BTreeSet<SectionId>,
    /// Items available to pick up, keyed by the section they lie in.
    /// An entry is removed when its set becomes empty.
    pub dropped_items: BTreeMap<SectionId, BTreeSet<String>>,
}

impl ActionSheet {
    /// Create a fresh sheet with starting stats and nothing carried.
    pub fn new(combat_skill: i32, endurance: i32) -> Self {
        Self {
            endurance,
            combat_skill,
            inventory: Inventory::new(),
            flags: BTreeMap::new(),
            removed_choices: BTreeSet::new(),
            dropped_items: BTreeMap::new(),
        }
    }

    /// True while endurance is above zero.
    pub fn is_alive(&self) -> bool {
        self.endurance > 0
    }

    /// Clamp endurance to zero or above.
    pub fn clamp_endurance(&mut self) {
        if self.endurance < 0 {
            self.endurance = 0;
        }
    }

    /// The value of a flag, defaulting to false when never set.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Mark a destination section as no longer offered. Idempotent;
    /// returns true if the id was newly recorded.
    pub fn remove_choice(&mut self, target: SectionId) -> bool {
        self.removed_choices.insert(target)
    }

    /// Record an item as lying in a section, idempotently (matched
    /// case-insensitively). Returns true if the item was newly
    /// recorded.
    pub fn drop_item_at(&mut self, section: SectionId, item: &str) -> bool {
        let items = self.dropped_items.entry(section).or_default();
        if items.iter().any(|n| n.eq_ignore_ascii_case(item)) {
            return false;
        }
        items.insert(item.to_string())
    }

    /// Clear an item from a section's dropped set, removing the entry
    /// when the set empties. Returns true if the item was present.
    pub fn take_dropped(&mut self, section: SectionId, item: &str) -> bool {
        let Some(items) = self.dropped_items.get_mut(&section) else {
            return false;
        };
        let Some(stored) = items.iter().find(|n| n.eq_ignore_ascii_case(item)).cloned() else {
            return false;
        };
        items.remove(&stored);
        if items.is_empty() {
            self.dropped_items.remove(&section);
        }
        true
    }

    /// Items currently lying in a section.
    pub fn dropped_at(&self, section: SectionId) -> impl Iterator<Item = &str> {
        self.dropped_items
            .get(&section)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}
