//! The Combat Results Table.
//!
//! A read-only mapping from (combat ratio, die roll) to the endurance
//! loss suffered by each side in one simultaneous round. The values
//! are the fixed reference table from the gamebook, not a formula:
//! every cell in the domain is defined by construction, and a custom
//! table is rejected if any cell could stall a fight.

use serde::{Deserialize, Serialize};

use crate::error::{CombatError, CombatResult};

/// Lowest combat ratio the table distinguishes.
pub const MIN_RATIO: i32 = -11;
/// Highest combat ratio the table distinguishes.
pub const MAX_RATIO: i32 = 11;
/// Number of die faces on the random number table.
pub const DIE_FACES: usize = 10;

const RATIO_ROWS: usize = (MAX_RATIO - MIN_RATIO + 1) as usize;

/// Endurance loss dealt to one side in a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Damage {
    /// Lose this many endurance points.
    Loss(u8),
    /// Killed outright, regardless of remaining endurance.
    Kill,
}

impl Damage {
    /// Apply this damage to an endurance value, clamping at zero.
    pub fn apply(self, endurance: i32) -> i32 {
        match self {
            Self::Loss(points) => (endurance - i32::from(points)).max(0),
            Self::Kill => 0,
        }
    }

    /// True for the instant-kill marker.
    pub fn is_kill(self) -> bool {
        matches!(self, Self::Kill)
    }

    /// True when this damage leaves the target untouched.
    pub fn is_nil(self) -> bool {
        matches!(self, Self::Loss(0))
    }
}

impl std::fmt::Display for Damage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loss(points) => write!(f, "{points}"),
            Self::Kill => write!(f, "K"),
        }
    }
}

/// One cell of the table: the outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrtCell {
    /// Damage dealt to the enemy.
    pub enemy: Damage,
    /// Damage dealt to Lone Wolf.
    pub lone_wolf: Damage,
}

/// Instant kill, encoded in the raw grids as a negative value.
const K: i8 = -1;

/// Enemy endurance loss per cell. Rows are ratios -11..=11, columns
/// are die rolls 0..=9.
const ENEMY_LOSS: [[i8; DIE_FACES]; RATIO_ROWS] = [
    // die:  0  1   2   3   4   5   6   7   8   9
    [6, 0, 0, 0, 0, 1, 2, 3, 4, 5],           // -11
    [7, 0, 0, 0, 1, 2, 3, 4, 5, 6],           // -10
    [7, 0, 0, 0, 0, 2, 3, 4, 5, 6],           // -9
    [8, 0, 0, 1, 2, 3, 4, 5, 6, 7],           // -8
    [8, 0, 0, 1, 2, 3, 4, 5, 6, 7],           // -7
    [9, 0, 1, 2, 3, 4, 5, 6, 7, 8],           // -6
    [9, 0, 1, 2, 3, 4, 5, 6, 7, 8],           // -5
    [10, 1, 2, 3, 4, 5, 6, 7, 8, 9],          // -4
    [10, 1, 2, 3, 4, 5, 6, 7, 8, 9],          // -3
    [11, 2, 3, 4, 5, 6, 7, 8, 9, 10],         // -2
    [11, 2, 3, 4, 5, 6, 7, 8, 9, 10],         // -1
    [12, 3, 4, 5, 6, 7, 8, 9, 10, 11],        // 0
    [14, 4, 5, 6, 7, 8, 9, 10, 11, 12],       // +1
    [14, 4, 5, 6, 7, 8, 9, 10, 11, 12],       // +2
    [12, 4, 5, 6, 7, 8, 9, 10, 11, 12],       // +3
    [16, 5, 6, 7, 8, 9, 10, 11, 12, 14],      // +4
    [18, 6, 7, 8, 9, 10, 11, 12, 14, 16],     // +5
    [18, 6, 7, 8, 9, 10, 11, 12, 14, 16],     // +6
    [K, 7, 8, 9, 10, 11, 12, 14, 16, 18],     // +7
    [K, 7, 8, 9, 10, 11, 12, 14, 16, 18],     // +8
    [K, 8, 9, 10, 11, 12, 14, 16, 18, K],     // +9
    [K, 8, 9, 10, 11, 12, 14, 16, 18, K],     // +10
    [K, 9, 10, 11, 12, 14, 16, 18, K, K],     // +11
];

/// Lone Wolf endurance loss per cell, same layout.
const LONE_WOLF_LOSS: [[i8; DIE_FACES]; RATIO_ROWS] = [
    // die:  0  1   2   3   4   5   6   7   8   9
    [0, K, K, 8, 8, 7, 6, 5, 4, 3],           // -11
    [0, K, 8, 7, 7, 6, 6, 5, 4, 3],           // -10
    [0, K, 8, 7, 7, 6, 6, 5, 4, 3],           // -9
    [0, 8, 7, 6, 6, 5, 5, 4, 3, 2],           // -8
    [0, 8, 7, 6, 6, 5, 5, 4, 3, 2],           // -7
    [0, 6, 6, 5, 5, 4, 4, 3, 3, 2],           // -6
    [0, 6, 6, 5, 5, 4, 4, 3, 3, 2],           // -5
    [0, 6, 5, 5, 4, 4, 3, 2, 1, 0],           // -4
    [0, 6, 5, 5, 4, 4, 3, 2, 1, 0],           // -3
    [0, 5, 5, 4, 4, 3, 2, 2, 1, 0],           // -2
    [0, 5, 5, 4, 4, 3, 2, 2, 1, 0],           // -1
    [0, 5, 4, 4, 3, 2, 2, 1, 0, 0],           // 0
    [0, 5, 4, 3, 3, 2, 2, 1, 0, 0],           // +1
    [0, 5, 4, 3, 3, 2, 2, 1, 0, 0],           // +2
    [0, 4, 3, 3, 2, 2, 2, 1, 0, 0],           // +3
    [0, 4, 3, 3, 2, 2, 2, 1, 0, 0],           // +4
    [0, 4, 3, 3, 2, 2, 2, 1, 0, 0],           // +5
    [0, 4, 3, 3, 2, 2, 1, 0, 0, 0],           // +6
    [0, 4, 3, 2, 2, 2, 1, 0, 0, 0],           // +7
    [0, 4, 3, 2, 2, 2, 1, 0, 0, 0],           // +8
    [0, 3, 3, 2, 2, 2, 1, 0, 0, 0],           // +9
    [0, 3, 3, 2, 2, 2, 1, 0, 0, 0],           // +10
    [0, 3, 2, 2, 2, 1, 1, 0, 0, 0],           // +11
];

fn decode(code: i8) -> Damage {
    match u8::try_from(code) {
        Ok(points) => Damage::Loss(points),
        Err(_) => Damage::Kill,
    }
}

/// The combat results table, loaded once and injected where needed.
#[derive(Debug, Clone)]
pub struct CombatTable {
    enemy_loss: [[i8; DIE_FACES]; RATIO_ROWS],
    lone_wolf_loss: [[i8; DIE_FACES]; RATIO_ROWS],
}

impl CombatTable {
    /// The reference table from the gamebook.
    pub fn standard() -> Self {
        Self {
            enemy_loss: ENEMY_LOSS,
            lone_wolf_loss: LONE_WOLF_LOSS,
        }
    }

    /// Build a custom table from raw grids, with kills encoded as
    /// negative values. Rejects any stalemate cell in which neither
    /// side loses endurance.
    pub fn new(
        enemy_loss: [[i8; DIE_FACES]; RATIO_ROWS],
        lone_wolf_loss: [[i8; DIE_FACES]; RATIO_ROWS],
    ) -> CombatResult<Self> {
        for (row, (enemy_row, wolf_row)) in enemy_loss.iter().zip(&lone_wolf_loss).enumerate() {
            for (col, (enemy, wolf)) in enemy_row.iter().zip(wolf_row).enumerate() {
                if *enemy == 0 && *wolf == 0 {
                    return Err(CombatError::StalemateCell {
                        ratio: MIN_RATIO + row as i32,
                        die: col as u8,
                    });
                }
            }
        }
        Ok(Self {
            enemy_loss,
            lone_wolf_loss,
        })
    }

    /// Clamp a raw combat ratio into the table's domain.
    pub fn clamp_ratio(ratio: i32) -> i32 {
        ratio.clamp(MIN_RATIO, MAX_RATIO)
    }

    /// Look up the outcome cell for a ratio and die roll.
    ///
    /// The ratio is clamped into the domain first. A die outside 0..=9
    /// cannot occur with a well-behaved source; it fails closed to a
    /// neutral cell in which both sides lose one point, so a fight
    /// cannot stall.
    pub fn lookup(&self, ratio: i32, die: u8) -> CrtCell {
        let row = (Self::clamp_ratio(ratio) - MIN_RATIO) as usize;
        let col = usize::from(die);
        let enemy = self.enemy_loss.get(row).and_then(|r| r.get(col));
        let lone_wolf = self.lone_wolf_loss.get(row).and_then(|r| r.get(col));
        match (enemy, lone_wolf) {
            (Some(&e), Some(&l)) => CrtCell {
                enemy: decode(e),
                lone_wolf: decode(l),
            },
            _ => CrtCell {
                enemy: Damage::Loss(1),
                lone_wolf: Damage::Loss(1),
            },
        }
    }
}

impl Default for CombatTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_is_valid() {
        assert!(CombatTable::new(ENEMY_LOSS, LONE_WOLF_LOSS).is_ok());
    }

    #[test]
    fn every_cell_in_domain_is_defined_and_progresses() {
        let table = CombatTable::standard();
        for ratio in MIN_RATIO..=MAX_RATIO {
            for die in 0..DIE_FACES {
                let cell = table.lookup(ratio, die as u8);
                assert!(
                    !(cell.enemy.is_nil() && cell.lone_wolf.is_nil()),
                    "stalemate at ratio {ratio}, die {die}"
                );
            }
        }
    }

    #[test]
    fn known_cells() {
        let table = CombatTable::standard();

        let even = table.lookup(0, 0);
        assert_eq!(even.enemy, Damage::Loss(12));
        assert_eq!(even.lone_wolf, Damage::Loss(0));

        let desperate = table.lookup(-11, 1);
        assert_eq!(desperate.enemy, Damage::Loss(0));
        assert_eq!(desperate.lone_wolf, Damage::Kill);

        let crushing = table.lookup(11, 9);
        assert_eq!(crushing.enemy, Damage::Kill);
        assert_eq!(crushing.lone_wolf, Damage::Loss(0));
    }

    #[test]
    fn ratio_is_clamped_into_domain() {
        let table = CombatTable::standard();
        assert_eq!(table.lookup(-40, 5), table.lookup(MIN_RATIO, 5));
        assert_eq!(table.lookup(99, 3), table.lookup(MAX_RATIO, 3));
    }

    #[test]
    fn out_of_domain_die_fails_closed() {
        let table = CombatTable::standard();
        let cell = table.lookup(0, 12);
        assert_eq!(cell.enemy, Damage::Loss(1));
        assert_eq!(cell.lone_wolf, Damage::Loss(1));
    }

    #[test]
    fn stalemate_cell_is_rejected() {
        let mut enemy = [[1i8; DIE_FACES]; RATIO_ROWS];
        let mut wolf = [[1i8; DIE_FACES]; RATIO_ROWS];
        enemy[5][7] = 0;
        wolf[5][7] = 0;
        let CombatError::StalemateCell { ratio, die } = CombatTable::new(enemy, wolf).unwrap_err();
        assert_eq!(ratio, MIN_RATIO + 5);
        assert_eq!(die, 7);
    }

    #[test]
    fn kill_rows_allow_one_sided_zero() {
        // A kill on one side with zero loss on the other is not a
        // stalemate.
        let mut enemy = [[1i8; DIE_FACES]; RATIO_ROWS];
        let mut wolf = [[1i8; DIE_FACES]; RATIO_ROWS];
        enemy[0][0] = K;
        wolf[0][0] = 0;
        assert!(CombatTable::new(enemy, wolf).is_ok());
    }

    #[test]
    fn damage_apply_clamps_and_kills() {
        assert_eq!(Damage::Loss(3).apply(10), 7);
        assert_eq!(Damage::Loss(8).apply(5), 0);
        assert_eq!(Damage::Kill.apply(40), 0);
        assert!(Damage::Kill.is_kill());
        assert!(Damage::Loss(0).is_nil());
        assert!(!Damage::Loss(1).is_nil());
    }

    #[test]
    fn damage_display() {
        assert_eq!(Damage::Loss(7).to_string(), "7");
        assert_eq!(Damage::Kill.to_string(), "K");
    }
}
