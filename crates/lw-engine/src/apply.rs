//! Applying action batches to the action sheet.
//!
//! The applier is the only writer of session state. Actions run
//! strictly in batch order, each observing the effects of those before
//! it; combats delegate to the battle orchestrator with the sheet as
//! mutated so far. A batch never aborts: capacity overflows and
//! malformed records become observable notes and the rest of the batch
//! still runs.

use lw_combat::{BattleResult, CombatTable, Encounter, RandomNumberTable, resolve_all};
use lw_core::{ActionSheet, AddOutcome, ItemCatalog, SectionId, SlotKind};
use serde::{Deserialize, Serialize};

use crate::action::{Action, Stat};
use crate::wire::ActionRecord;

/// Per-batch context supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyContext {
    /// The section the player is currently reading.
    pub section: SectionId,
    /// Combat-skill bonus for any fight in this batch (weapon
    /// mastery, potions, and the like).
    pub combat_skill_bonus: i32,
    /// Evade any combat started in this batch.
    pub evade: bool,
}

impl ApplyContext {
    /// Context for a section with no combat adjustments.
    pub fn at_section(section: SectionId) -> Self {
        Self {
            section,
            ..Self::default()
        }
    }
}

/// An observable side effect of applying a batch that would otherwise
/// be silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyNote {
    /// An acquired item did not fit its slot and was discarded.
    ItemDiscarded {
        /// The item that was lost.
        item: String,
        /// The slot that was full.
        slot: SlotKind,
    },
    /// A removal named an item no slot holds.
    ItemNotHeld {
        /// The missing item.
        item: String,
    },
    /// Gold beyond the pouch capacity was discarded.
    GoldDiscarded {
        /// Crowns lost to the cap.
        amount: u32,
    },
    /// A malformed record was skipped.
    ActionIgnored {
        /// Position of the record in the batch.
        index: usize,
        /// Why it was skipped.
        reason: String,
    },
}

impl std::fmt::Display for ApplyNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemDiscarded { item, slot } => {
                write!(f, "{item} was discarded: the {slot} slot is full")
            }
            Self::ItemNotHeld { item } => write!(f, "{item} is not held"),
            Self::GoldDiscarded { amount } => {
                write!(f, "{amount} gold crowns did not fit in the pouch")
            }
            Self::ActionIgnored { index, reason } => {
                write!(f, "action {index} ignored: {reason}")
            }
        }
    }
}

/// The result of applying one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    /// The sheet after the batch, endurance clamped.
    pub sheet: ActionSheet,
    /// Rendered log of every battle fought, in order.
    pub combat_log: Vec<String>,
    /// Battle results for every combat in the batch.
    pub battles: Vec<BattleResult>,
    /// Observable discards and skips.
    pub notes: Vec<ApplyNote>,
}

fn start(sheet: &ActionSheet) -> ApplyOutcome {
    ApplyOutcome {
        sheet: sheet.clone(),
        combat_log: Vec::new(),
        battles: Vec::new(),
        notes: Vec::new(),
    }
}

/// The action applier.
///
/// The combat table and item catalog are injected once at
/// construction and shared across batches; the applier itself holds
/// no session state.
#[derive(Debug, Clone, Default)]
pub struct ActionApplier {
    table: CombatTable,
    catalog: ItemCatalog,
}

impl ActionApplier {
    /// Create an applier with a custom table and catalog.
    pub fn new(table: CombatTable, catalog: ItemCatalog) -> Self {
        Self { table, catalog }
    }

    /// Apply a typed batch in order.
    pub fn apply(
        &self,
        sheet: &ActionSheet,
        actions: &[Action],
        ctx: &ApplyContext,
        rnt: &mut dyn RandomNumberTable,
    ) -> ApplyOutcome {
        let mut outcome = start(sheet);
        for action in actions {
            self.apply_one(&mut outcome, action, ctx, rnt);
        }
        outcome.sheet.clamp_endurance();
        outcome
    }

    /// Decode and apply a batch of flat wire records.
    ///
    /// Records that do not decode are skipped with an
    /// [`ApplyNote::ActionIgnored`]; the remainder of the batch still
    /// runs.
    pub fn apply_records(
        &self,
        sheet: &ActionSheet,
        records: &[ActionRecord],
        ctx: &ApplyContext,
        rnt: &mut dyn RandomNumberTable,
    ) -> ApplyOutcome {
        let mut outcome = start(sheet);
        for (index, record) in records.iter().enumerate() {
            match record.decode() {
                Ok(action) => self.apply_one(&mut outcome, &action, ctx, rnt),
                Err(err) => outcome.notes.push(ApplyNote::ActionIgnored {
                    index,
                    reason: err.to_string(),
                }),
            }
        }
        outcome.sheet.clamp_endurance();
        outcome
    }

    fn apply_one(
        &self,
        outcome: &mut ApplyOutcome,
        action: &Action,
        ctx: &ApplyContext,
        rnt: &mut dyn RandomNumberTable,
    ) {
        match action {
            Action::UpdateStat { stat, delta } => Self::update_stat(outcome, *stat, *delta),
            Action::SetStat { stat, value } => Self::set_stat(outcome, *stat, *value),
            Action::AddItem { item } => self.add_item(outcome, item, ctx.section),
            Action::RemoveItem { item } => Self::remove_item(outcome, item),
            Action::DropItem { item, section } => {
                outcome
                    .sheet
                    .drop_item_at(section.unwrap_or(ctx.section), item);
            }
            Action::SetFlag { flag, value } => {
                outcome.sheet.flags.insert(flag.clone(), *value);
            }
            Action::RemoveChoice { target } => {
                if *target > 0 {
                    outcome.sheet.remove_choice(*target);
                }
            }
            Action::StartCombat { encounter } => self.start_combat(outcome, encounter, ctx, rnt),
        }
    }

    fn update_stat(outcome: &mut ApplyOutcome, stat: Stat, delta: i32) {
        match stat {
            Stat::Endurance => {
                outcome.sheet.endurance = outcome.sheet.endurance.saturating_add(delta);
            }
            Stat::CombatSkill => {
                outcome.sheet.combat_skill = outcome.sheet.combat_skill.saturating_add(delta);
            }
            Stat::Gold => {
                let lost = outcome.sheet.inventory.adjust_gold(i64::from(delta));
                if lost > 0 {
                    outcome.notes.push(ApplyNote::GoldDiscarded { amount: lost });
                }
            }
        }
    }

    fn set_stat(outcome: &mut ApplyOutcome, stat: Stat, value: i32) {
        match stat {
            Stat::Endurance => outcome.sheet.endurance = value,
            Stat::CombatSkill => outcome.sheet.combat_skill = value,
            Stat::Gold => {
                let lost = outcome.sheet.inventory.set_gold(i64::from(value));
                if lost > 0 {
                    outcome.notes.push(ApplyNote::GoldDiscarded { amount: lost });
                }
            }
        }
    }

    fn add_item(&self, outcome: &mut ApplyOutcome, item: &str, section: SectionId) {
        let kind = self.catalog.classify(item);
        match outcome.sheet.inventory.add(item, &kind) {
            AddOutcome::Added(_) => {
                // The item is in hand now; stop offering it as a pickup.
                outcome.sheet.take_dropped(section, item);
            }
            AddOutcome::AlreadyHeld(_) => {}
            AddOutcome::SlotFull(slot) => outcome.notes.push(ApplyNote::ItemDiscarded {
                item: item.to_string(),
                slot,
            }),
        }
    }

    fn remove_item(outcome: &mut ApplyOutcome, item: &str) {
        if outcome.sheet.inventory.remove(item).is_none() {
            outcome.notes.push(ApplyNote::ItemNotHeld {
                item: item.to_string(),
            });
        }
    }

    fn start_combat(
        &self,
        outcome: &mut ApplyOutcome,
        encounter: &Encounter,
        ctx: &ApplyContext,
        rnt: &mut dyn RandomNumberTable,
    ) {
        let result = resolve_all(
            &self.table,
            &outcome.sheet,
            encounter,
            ctx.combat_skill_bonus,
            ctx.evade,
            rnt,
        );
        outcome.sheet = result.sheet.clone();
        outcome.combat_log.extend(result.log.iter().cloned());
        outcome.battles.push(result);
    }
}
