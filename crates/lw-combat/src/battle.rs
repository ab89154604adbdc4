//! Multi-enemy battle sequencing.
//!
//! Enemies are fought strictly in list order, each against the sheet
//! as the previous fight left it. Once Lone Wolf is down (or has
//! evaded), the remaining enemies are recorded as automatic wins for
//! the enemy side without a resolver call.

use lw_core::ActionSheet;
use serde::{Deserialize, Serialize};

use crate::crt::CombatTable;
use crate::enemy::Encounter;
use crate::resolver::resolve;
use crate::rnt::RandomNumberTable;
use crate::round::{CombatRound, Victor};

/// The outcome of one enemy's slot in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyResult {
    /// The enemy's display label.
    pub enemy: String,
    /// The victor of this slot. `None` means mutual destruction or a
    /// successful evade.
    pub winner: Option<Victor>,
    /// Rounds fought against this enemy; empty for automatic results.
    pub rounds: Vec<CombatRound>,
    /// The enemy's endurance when the slot ended.
    pub enemy_endurance: i32,
}

/// The outcome of a full battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    /// The sheet after every slot was settled.
    pub sheet: ActionSheet,
    /// Per-enemy outcomes in fighting order.
    pub enemies: Vec<EnemyResult>,
    /// Rendered, display-ready battle log.
    pub log: Vec<String>,
    /// Overall victor: Lone Wolf only if every enemy fell and he is
    /// still standing.
    pub winner: Victor,
}

/// Resolve an encounter's enemies in order, carrying the sheet
/// forward between fights.
///
/// The bonus passed to each fight is `encounter.modifier + bonus`.
/// `evade` applies to the first living enemy only; a successful evade
/// abandons the rest of the battle.
pub fn resolve_all(
    table: &CombatTable,
    sheet: &ActionSheet,
    encounter: &Encounter,
    bonus: i32,
    evade: bool,
    rnt: &mut dyn RandomNumberTable,
) -> BattleResult {
    let mut sheet = sheet.clone();
    let bonus = encounter.modifier + bonus;
    let mut enemies = Vec::new();
    let mut log = Vec::new();
    let mut escaped = false;

    for enemy in &encounter.enemies {
        if !sheet.is_alive() || escaped {
            log.push(format!("{} wins by default.", enemy.label()));
            enemies.push(EnemyResult {
                enemy: enemy.label().to_string(),
                winner: Some(Victor::Enemy),
                rounds: Vec::new(),
                enemy_endurance: enemy.endurance,
            });
            continue;
        }

        log.push(format!(
            "Lone Wolf (CS {}, EP {}) fights {} (CS {}, EP {}).",
            sheet.combat_skill + bonus,
            sheet.endurance,
            enemy.label(),
            enemy.effective_combat_skill(),
            enemy.endurance,
        ));

        let result = resolve(table, &sheet, enemy, bonus, evade, rnt);
        for round in &result.rounds {
            log.push(round.to_string());
        }
        match result.winner {
            Some(Victor::LoneWolf) => log.push(format!("{} is defeated.", enemy.label())),
            Some(Victor::Enemy) => log.push("Lone Wolf falls.".to_string()),
            None if result.sheet.is_alive() => {
                escaped = true;
                log.push(format!("Lone Wolf evades {}.", enemy.label()));
            }
            None => log.push(format!(
                "Lone Wolf and {} strike each other down.",
                enemy.label()
            )),
        }

        sheet = result.sheet;
        enemies.push(EnemyResult {
            enemy: enemy.label().to_string(),
            winner: result.winner,
            rounds: result.rounds,
            enemy_endurance: result.enemy_endurance,
        });
    }

    let all_defeated = enemies.iter().all(|e| e.winner == Some(Victor::LoneWolf));
    let winner = if all_defeated && sheet.is_alive() {
        Victor::LoneWolf
    } else {
        Victor::Enemy
    };

    BattleResult {
        sheet,
        enemies,
        log,
        winner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;
    use crate::rnt::ScriptedDraws;

    fn enemy(name: &str, combat_skill: i32, endurance: i32) -> Enemy {
        Enemy {
            kind: "Giak".to_string(),
            name: name.to_string(),
            combat_skill,
            endurance,
            modifier: 0,
        }
    }

    #[test]
    fn defeats_enemies_in_order() {
        let table = CombatTable::standard();
        let sheet = ActionSheet::new(30, 25);
        let encounter = Encounter {
            modifier: 0,
            enemies: vec![enemy("First", 1, 10), enemy("Second", 1, 10)],
        };
        // Die 0 at the clamped +11 ratio kills outright, twice.
        let mut rnt = ScriptedDraws::new(vec![0]);

        let result = resolve_all(&table, &sheet, &encounter, 0, false, &mut rnt);
        assert_eq!(result.winner, Victor::LoneWolf);
        assert_eq!(result.enemies.len(), 2);
        assert!(
            result
                .enemies
                .iter()
                .all(|e| e.winner == Some(Victor::LoneWolf))
        );
        assert_eq!(result.sheet.endurance, 25);
        assert!(result.log.iter().any(|l| l.contains("First is defeated.")));
        assert!(result.log.iter().any(|l| l.contains("Second is defeated.")));
    }

    #[test]
    fn death_mid_battle_forfeits_the_rest() {
        let table = CombatTable::standard();
        let sheet = ActionSheet::new(5, 10);
        let encounter = Encounter {
            modifier: 0,
            enemies: vec![enemy("Brute", 30, 40), enemy("Straggler", 8, 5)],
        };
        // Ratio clamps to -11; die 1 kills Lone Wolf in the first round.
        let mut rnt = ScriptedDraws::new(vec![1]);

        let result = resolve_all(&table, &sheet, &encounter, 0, false, &mut rnt);
        assert_eq!(result.winner, Victor::Enemy);
        assert_eq!(result.sheet.endurance, 0);

        let straggler = &result.enemies[1];
        assert_eq!(straggler.winner, Some(Victor::Enemy));
        assert!(straggler.rounds.is_empty());
        assert_eq!(straggler.enemy_endurance, 5);
        assert!(
            result
                .log
                .iter()
                .any(|l| l.contains("Straggler wins by default."))
        );
    }

    #[test]
    fn encounter_modifier_adds_to_the_bonus() {
        let table = CombatTable::standard();
        let sheet = ActionSheet::new(10, 25);
        let encounter = Encounter {
            modifier: 3,
            enemies: vec![enemy("Foe", 15, 13)],
        };
        let mut rnt = ScriptedDraws::new(vec![5]);

        // (10 + 3 + 2) - 15 = 0.
        let result = resolve_all(&table, &sheet, &encounter, 2, false, &mut rnt);
        assert_eq!(result.enemies[0].rounds[0].ratio, 0);
    }

    #[test]
    fn successful_evade_abandons_the_battle() {
        let table = CombatTable::standard();
        let sheet = ActionSheet::new(15, 25);
        let encounter = Encounter {
            modifier: 0,
            enemies: vec![enemy("Guard", 15, 13), enemy("Captain", 15, 13)],
        };
        let mut rnt = ScriptedDraws::new(vec![5]);

        let result = resolve_all(&table, &sheet, &encounter, 0, true, &mut rnt);
        assert_eq!(result.winner, Victor::Enemy);
        assert_eq!(result.enemies[0].winner, None);
        assert_eq!(result.enemies[0].rounds.len(), 1);
        assert_eq!(result.enemies[0].enemy_endurance, 13);
        assert_eq!(result.enemies[1].winner, Some(Victor::Enemy));
        assert!(result.enemies[1].rounds.is_empty());
        assert!(result.log.iter().any(|l| l.contains("evades Guard")));
        assert!(result.sheet.endurance > 0);
    }

    #[test]
    fn log_includes_fight_headers() {
        let table = CombatTable::standard();
        let sheet = ActionSheet::new(15, 25);
        let encounter = Encounter {
            modifier: 0,
            enemies: vec![enemy("Giak Warrior", 14, 13)],
        };
        let mut rnt = ScriptedDraws::new(vec![0, 3, 6, 9]);

        let result = resolve_all(&table, &sheet, &encounter, 0, false, &mut rnt);
        assert_eq!(
            result.log[0],
            "Lone Wolf (CS 15, EP 25) fights Giak Warrior (CS 14, EP 13)."
        );
        assert!(result.log.len() > 1);
    }
}
