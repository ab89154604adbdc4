//! The slotted inventory: weapons, gold pouch, backpack, and special
//! items.
//!
//! Slot capacities are invariants of this type: at most two weapons,
//! at most eight backpack items, at most fifty gold crowns, no
//! duplicate item name within a slot. Item-name matching is
//! case-insensitive; stored names keep their original casing.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemKind;

/// Maximum number of weapons carried at once.
pub const WEAPON_CAPACITY: usize = 2;
/// Maximum number of backpack items carried at once.
pub const BACKPACK_CAPACITY: usize = 8;
/// Maximum number of gold crowns the pouch holds.
pub const POUCH_CAPACITY: u32 = 50;

/// One of the three item slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// The weapon slot (capacity [`WEAPON_CAPACITY`]).
    Weapons,
    /// The backpack (capacity [`BACKPACK_CAPACITY`]).
    Backpack,
    /// Special items worn on the body (unbounded).
    Special,
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapons => write!(f, "weapons"),
            Self::Backpack => write!(f, "backpack"),
            Self::Special => write!(f, "special items"),
        }
    }
}

/// What happened when an item was offered to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was stored in the given slot.
    Added(SlotKind),
    /// The slot already holds an item of this name; nothing changed.
    AlreadyHeld(SlotKind),
    /// The slot is at capacity; the item was discarded.
    SlotFull(SlotKind),
}

/// Everything the player carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Carried weapons, in acquisition order.
    pub weapons: Vec<String>,
    /// Gold crowns in the belt pouch.
    pub pouch: u32,
    /// Backpack items, in acquisition order.
    pub backpack: Vec<String>,
    /// Special items as `(body location, item name)` pairs.
    pub special: Vec<(String, String)>,
}

fn contains_item(names: &[String], item: &str) -> bool {
    names.iter().any(|n| n.eq_ignore_ascii_case(item))
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer an item to the slot chosen by the classifier.
    ///
    /// Duplicates within the slot are ignored; a full slot discards
    /// the item. Both conditions are reported in the outcome rather
    /// than raised as errors.
    pub fn add(&mut self, item: &str, kind: &ItemKind) -> AddOutcome {
        match kind {
            ItemKind::Weapon => {
                Self::add_to_slot(&mut self.weapons, item, WEAPON_CAPACITY, SlotKind::Weapons)
            }
            ItemKind::Backpack => Self::add_to_slot(
                &mut self.backpack,
                item,
                BACKPACK_CAPACITY,
                SlotKind::Backpack,
            ),
            ItemKind::Special(location) => {
                if self.special.iter().any(|(_, n)| n.eq_ignore_ascii_case(item)) {
                    return AddOutcome::AlreadyHeld(SlotKind::Special);
                }
                self.special.push((location.clone(), item.to_string()));
                AddOutcome::Added(SlotKind::Special)
            }
        }
    }

    fn add_to_slot(
        names: &mut Vec<String>,
        item: &str,
        capacity: usize,
        slot: SlotKind,
    ) -> AddOutcome {
        if contains_item(names, item) {
            return AddOutcome::AlreadyHeld(slot);
        }
        if names.len() >= capacity {
            return AddOutcome::SlotFull(slot);
        }
        names.push(item.to_string());
        AddOutcome::Added(slot)
    }

    /// Remove an item from whichever slot currently holds it.
    ///
    /// Returns the slot it was removed from, or `None` if no slot
    /// holds an item of this name.
    pub fn remove(&mut self, item: &str) -> Option<SlotKind> {
        if let Some(pos) = self.weapons.iter().position(|n| n.eq_ignore_ascii_case(item)) {
            self.weapons.remove(pos);
            return Some(SlotKind::Weapons);
        }
        if let Some(pos) = self
            .backpack
            .iter()
            .position(|n| n.eq_ignore_ascii_case(item))
        {
            self.backpack.remove(pos);
            return Some(SlotKind::Backpack);
        }
        if let Some(pos) = self
            .special
            .iter()
            .position(|(_, n)| n.eq_ignore_ascii_case(item))
        {
            self.special.remove(pos);
            return Some(SlotKind::Special);
        }
        None
    }

    /// The slot holding an item of this name, if any.
    pub fn holds(&self, item: &str) -> Option<SlotKind> {
        if contains_item(&self.weapons, item) {
            Some(SlotKind::Weapons)
        } else if contains_item(&self.backpack, item) {
            Some(SlotKind::Backpack)
        } else if self.special.iter().any(|(_, n)| n.eq_ignore_ascii_case(item)) {
            Some(SlotKind::Special)
        } else {
            None
        }
    }

    /// Add or spend gold crowns, clamping the pouch to
    /// `[0, POUCH_CAPACITY]`. Returns the crowns lost to the cap.
    pub fn adjust_gold(&mut self, delta: i64) -> u32 {
        self.set_gold(i64::from(self.pouch) + delta)
    }

    /// Set the pouch outright, clamping to `[0, POUCH_CAPACITY]`.
    /// Returns the crowns lost to the cap.
    pub fn set_gold(&mut self, value: i64) -> u32 {
        let clamped = value.clamp(0, i64::from(POUCH_CAPACITY));
        self.pouch = u32::try_from(clamped).unwrap_or(0);
        u32::try_from((value - clamped).max(0)).unwrap_or(u32::MAX)
    }
}
