//! Single-encounter combat resolution.
//!
//! One fight runs to completion in simultaneous rounds: compute the
//! combat ratio, draw from the random number table, look up the
//! outcome cell, apply both damages, clamp, record. Termination is
//! guaranteed because no table cell leaves both sides untouched.

use lw_core::ActionSheet;
use serde::{Deserialize, Serialize};

use crate::crt::{CombatTable, Damage};
use crate::enemy::Enemy;
use crate::rnt::RandomNumberTable;
use crate::round::{CombatRound, Victor};

/// The result of resolving one encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResult {
    /// The sheet after the fight.
    pub sheet: ActionSheet,
    /// The enemy's endurance when the fight ended.
    pub enemy_endurance: i32,
    /// Every round fought, in order.
    pub rounds: Vec<CombatRound>,
    /// The victor. `None` means mutual destruction, or a successful
    /// evade with both sides still standing.
    pub winner: Option<Victor>,
}

/// Resolve one fight between the sheet's owner and a single enemy.
///
/// `bonus` is added to the sheet's combat skill for the whole fight.
/// An enemy already at zero endurance is an immediate win with no
/// rounds fought.
///
/// With `evade` the fight lasts exactly one round: the enemy takes no
/// damage, Lone Wolf takes the rolled damage (a kill still forces
/// zero), and the survivor escapes. The fight cannot loop under evade
/// because disengaging ends it regardless of the cell rolled.
pub fn resolve(
    table: &CombatTable,
    sheet: &ActionSheet,
    enemy: &Enemy,
    bonus: i32,
    evade: bool,
    rnt: &mut dyn RandomNumberTable,
) -> EncounterResult {
    let mut sheet = sheet.clone();
    let mut enemy_endurance = enemy.endurance;
    let mut rounds = Vec::new();

    if enemy_endurance <= 0 {
        return EncounterResult {
            sheet,
            enemy_endurance,
            rounds,
            winner: Some(Victor::LoneWolf),
        };
    }

    let ratio = CombatTable::clamp_ratio(
        sheet.combat_skill + bonus - enemy.effective_combat_skill(),
    );

    while sheet.endurance > 0 && enemy_endurance > 0 {
        let die = rnt.draw();
        let cell = table.lookup(ratio, die);
        let enemy_damage = if evade { Damage::Loss(0) } else { cell.enemy };
        let lone_wolf_damage = cell.lone_wolf;

        let enemy_before = enemy_endurance;
        let lone_wolf_before = sheet.endurance;
        enemy_endurance = enemy_damage.apply(enemy_before);
        sheet.endurance = lone_wolf_damage.apply(lone_wolf_before);

        rounds.push(CombatRound {
            round: rounds.len() as u32 + 1,
            ratio,
            die,
            enemy_damage,
            lone_wolf_damage,
            enemy_before,
            enemy_after: enemy_endurance,
            lone_wolf_before,
            lone_wolf_after: sheet.endurance,
        });

        if evade {
            break;
        }
    }

    let winner = match (sheet.endurance > 0, enemy_endurance > 0) {
        (true, false) => Some(Victor::LoneWolf),
        (false, true) => Some(Victor::Enemy),
        // Mutual destruction, or an evade with both still standing.
        _ => None,
    };

    EncounterResult {
        sheet,
        enemy_endurance,
        rounds,
        winner,
    }
}
