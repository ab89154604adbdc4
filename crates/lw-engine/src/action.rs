//! The typed action union.
//!
//! The interpreter's wire format is a flat record with every field
//! always present (a structured-output constraint); that shape lives
//! in [`crate::wire`] and is translated into this union at ingestion.
//! Everything past the boundary works with these variants.

use lw_combat::Encounter;
use lw_core::SectionId;
use serde::{Deserialize, Serialize};

/// A numeric stat an action can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    /// Endurance points.
    Endurance,
    /// Combat skill.
    CombatSkill,
    /// Gold crowns in the belt pouch.
    Gold,
}

impl Stat {
    /// Parse a wire stat reference (`endurance`, `combatSkill`,
    /// `gold`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "endurance" => Some(Self::Endurance),
            "combatSkill" => Some(Self::CombatSkill),
            "gold" => Some(Self::Gold),
            _ => None,
        }
    }
}

/// One state-changing action proposed by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Add a signed delta to a stat.
    UpdateStat {
        /// The stat to change.
        stat: Stat,
        /// The signed change.
        delta: i32,
    },
    /// Overwrite a stat.
    SetStat {
        /// The stat to overwrite.
        stat: Stat,
        /// The new absolute value.
        value: i32,
    },
    /// Acquire an item; the applier classifies it into a slot.
    AddItem {
        /// The item name.
        item: String,
    },
    /// Give up an item, from whichever slot holds it.
    RemoveItem {
        /// The item name.
        item: String,
    },
    /// Make an item available to pick up in a section.
    DropItem {
        /// The item name.
        item: String,
        /// Explicit section; `None` means the current one.
        section: Option<SectionId>,
    },
    /// Overwrite a boolean flag.
    SetFlag {
        /// The flag name.
        flag: String,
        /// The new value.
        value: bool,
    },
    /// Stop offering the choice leading to a section.
    RemoveChoice {
        /// Destination section id of the choice.
        target: SectionId,
    },
    /// Fight an encounter.
    StartCombat {
        /// The encounter to resolve.
        encounter: Encounter,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_parses_wire_names() {
        assert_eq!(Stat::parse("endurance"), Some(Stat::Endurance));
        assert_eq!(Stat::parse("combatSkill"), Some(Stat::CombatSkill));
        assert_eq!(Stat::parse("gold"), Some(Stat::Gold));
        assert_eq!(Stat::parse("luck"), None);
        assert_eq!(Stat::parse("Endurance"), None);
    }
}
