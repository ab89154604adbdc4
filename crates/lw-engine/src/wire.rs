//! The interpreter's flat wire records.
//!
//! The upstream structured-output contract forbids optional fields,
//! so actions arrive "wide": every field present on every record, with
//! neutral defaults for the ones a given type does not use. This
//! module is the only place that shape exists. [`ActionRecord::decode`]
//! turns each record into the typed [`Action`] union; whatever does
//! not decode is reported, never thrown.

use lw_combat::Encounter;
use lw_core::SectionId;
use serde::{Deserialize, Serialize};

use crate::action::{Action, Stat};
use crate::error::DecodeError;

/// One flat action record as emitted by the interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRecord {
    /// The action type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// The interpreter's free-form justification. Display only.
    pub reason: String,
    /// Stat reference for the stat actions.
    pub stat: String,
    /// Additive change for `update_stat`.
    pub delta: i64,
    /// Absolute value for `set_stat`. Doubles as the destination
    /// section id for `remove_choice` and, when positive, as the
    /// explicit section for `drop_item`.
    pub value: i64,
    /// Item name for the item actions.
    pub item: String,
    /// Flag name for `set_flag`.
    pub flag: String,
    /// Flag value for `set_flag`.
    #[serde(rename = "flagValue")]
    pub flag_value: bool,
    /// Encounter payload for `start_combat`.
    pub combat: Encounter,
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn positive_section(value: i64) -> Option<SectionId> {
    u32::try_from(value).ok().filter(|id| *id > 0)
}

impl ActionRecord {
    /// Translate this record into the typed action union.
    pub fn decode(&self) -> Result<Action, DecodeError> {
        match self.kind.as_str() {
            "update_stat" => Ok(Action::UpdateStat {
                stat: self.parse_stat()?,
                delta: saturate(self.delta),
            }),
            "set_stat" => Ok(Action::SetStat {
                stat: self.parse_stat()?,
                value: saturate(self.value),
            }),
            "add_item" => Ok(Action::AddItem {
                item: self.parse_item()?,
            }),
            "remove_item" => Ok(Action::RemoveItem {
                item: self.parse_item()?,
            }),
            "drop_item" => Ok(Action::DropItem {
                item: self.parse_item()?,
                section: positive_section(self.value),
            }),
            "set_flag" => {
                if self.flag.trim().is_empty() {
                    return Err(DecodeError::MissingFlag);
                }
                Ok(Action::SetFlag {
                    flag: self.flag.clone(),
                    value: self.flag_value,
                })
            }
            "remove_choice" => match positive_section(self.value) {
                Some(target) => Ok(Action::RemoveChoice { target }),
                None => Err(DecodeError::BadSectionId(self.value)),
            },
            "start_combat" => {
                if self.combat.enemies.is_empty() {
                    return Err(DecodeError::NoEnemies);
                }
                Ok(Action::StartCombat {
                    encounter: self.combat.clone(),
                })
            }
            other => Err(DecodeError::UnknownType(other.to_string())),
        }
    }

    fn parse_stat(&self) -> Result<Stat, DecodeError> {
        Stat::parse(&self.stat).ok_or_else(|| DecodeError::UnknownStat(self.stat.clone()))
    }

    fn parse_item(&self) -> Result<String, DecodeError> {
        let item = self.item.trim();
        if item.is_empty() {
            return Err(DecodeError::MissingItem);
        }
        Ok(item.to_string())
    }
}

/// Parse a raw JSON action batch as sent by the interpreter.
pub fn parse_batch(json: &str) -> Result<Vec<ActionRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
