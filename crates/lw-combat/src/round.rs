//! Per-round combat records.
//!
//! There is no logging crate behind this: the engine's observable
//! history is the ordered list of these records, rendered on demand.

use serde::{Deserialize, Serialize};

use crate::crt::Damage;

/// Which side won a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Victor {
    /// The player.
    LoneWolf,
    /// The opposing enemy.
    Enemy,
}

impl std::fmt::Display for Victor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoneWolf => write!(f, "Lone Wolf"),
            Self::Enemy => write!(f, "Enemy"),
        }
    }
}

/// The record of one combat round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRound {
    /// Round number within the encounter, starting at one.
    pub round: u32,
    /// The combat ratio used for the table lookup, after clamping.
    pub ratio: i32,
    /// The random number table draw.
    pub die: u8,
    /// Damage dealt to the enemy this round.
    pub enemy_damage: Damage,
    /// Damage dealt to Lone Wolf this round.
    pub lone_wolf_damage: Damage,
    /// Enemy endurance entering the round.
    pub enemy_before: i32,
    /// Enemy endurance leaving the round.
    pub enemy_after: i32,
    /// Lone Wolf endurance entering the round.
    pub lone_wolf_before: i32,
    /// Lone Wolf endurance leaving the round.
    pub lone_wolf_after: i32,
}

fn fmt_side(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    damage: Damage,
    before: i32,
    after: i32,
) -> std::fmt::Result {
    match damage {
        Damage::Kill => write!(f, "{name} is killed outright ({before} -> 0)"),
        Damage::Loss(points) => write!(f, "{name} loses {points} ({before} -> {after})"),
    }
}

impl std::fmt::Display for CombatRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {} (ratio {:+}, die {}): ",
            self.round, self.ratio, self.die
        )?;
        fmt_side(f, "enemy", self.enemy_damage, self.enemy_before, self.enemy_after)?;
        write!(f, ", ")?;
        fmt_side(
            f,
            "Lone Wolf",
            self.lone_wolf_damage,
            self.lone_wolf_before,
            self.lone_wolf_after,
        )
    }
}
