//! Core types for the Lone Wolf engine: the action sheet, the slotted
//! inventory, and the item catalog.
//!
//! This crate defines the session data model that the action applier
//! mutates. It is independent of combat resolution and of the wire
//! format — you can construct an [`ActionSheet`] programmatically or
//! deserialize one from the interpreter's JSON.

/// Item classification: weapon keywords and special-item locations.
pub mod catalog;
/// The slotted inventory and its capacity invariants.
pub mod inventory;
/// The action sheet: per-session stats, flags, and bookkeeping.
pub mod sheet;

/// Re-export catalog types.
pub use catalog::{ItemCatalog, ItemKind};
/// Re-export inventory types.
pub use inventory::{AddOutcome, Inventory, SlotKind};
/// Re-export sheet types.
pub use sheet::{ActionSheet, SectionId};
