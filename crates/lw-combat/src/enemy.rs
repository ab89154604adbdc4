//! Enemies and encounters as supplied by the interpreter.
//!
//! The serde names match the interpreter's structured-output contract,
//! and every field carries a default so a sloppy record cannot fault
//! ingestion.

use serde::{Deserialize, Serialize};

/// A single opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enemy {
    /// Creature type, e.g. "Giak".
    #[serde(rename = "enemyType")]
    pub kind: String,
    /// Display name, e.g. "Giak Warrior".
    #[serde(rename = "enemyName")]
    pub name: String,
    /// Combat skill.
    #[serde(rename = "combatSkill")]
    pub combat_skill: i32,
    /// Endurance points.
    pub endurance: i32,
    /// Additive combat-skill bonus or penalty specific to this enemy.
    #[serde(rename = "enemyModifier")]
    pub modifier: i32,
}

impl Enemy {
    /// Combat skill including the per-enemy modifier.
    pub fn effective_combat_skill(&self) -> i32 {
        self.combat_skill + self.modifier
    }

    /// Display label: the name, falling back to the type when unnamed.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.kind
        } else {
            &self.name
        }
    }
}

/// One combat: an ordered list of enemies fought in turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Encounter {
    /// Additive combat-skill modifier applied for every enemy in this
    /// encounter.
    #[serde(rename = "combatModifier")]
    pub modifier: i32,
    /// The enemies in fighting order.
    #[serde(rename = "enemy")]
    pub enemies: Vec<Enemy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_combat_skill_includes_modifier() {
        let enemy = Enemy {
            kind: "Giak".to_string(),
            name: "Giak Warrior".to_string(),
            combat_skill: 14,
            endurance: 13,
            modifier: -2,
        };
        assert_eq!(enemy.effective_combat_skill(), 12);
        assert_eq!(enemy.label(), "Giak Warrior");
    }

    #[test]
    fn label_falls_back_to_kind() {
        let enemy = Enemy {
            kind: "Doomwolf".to_string(),
            ..Enemy::default()
        };
        assert_eq!(enemy.label(), "Doomwolf");
    }

    #[test]
    fn deserializes_interpreter_shape() {
        let json = r#"{
            "combatModifier": -1,
            "enemy": [
                {
                    "enemyType": "Giak",
                    "enemyName": "Giak Warrior",
                    "combatSkill": 14,
                    "endurance": 13,
                    "enemyModifier": 0
                }
            ]
        }"#;
        let encounter: Encounter = serde_json::from_str(json).unwrap();
        assert_eq!(encounter.modifier, -1);
        assert_eq!(encounter.enemies.len(), 1);
        assert_eq!(encounter.enemies[0].combat_skill, 14);
    }

    #[test]
    fn missing_fields_default() {
        let encounter: Encounter = serde_json::from_str("{}").unwrap();
        assert_eq!(encounter.modifier, 0);
        assert!(encounter.enemies.is_empty());
    }
}
