//! The Lone Wolf action engine.
//!
//! Consumes ordered action batches proposed by an external narrative
//! interpreter, applies them deterministically to the action sheet,
//! and resolves any combat they start. The flat wire format is
//! translated into a typed union at ingestion; everything after that
//! is pure, synchronous computation apart from the injected die draw.

/// The typed action union.
pub mod action;
/// The batch applier state machine.
pub mod apply;
/// Error types for wire ingestion.
pub mod error;
/// Section descriptors and choice filtering.
pub mod section;
/// The interpreter's flat wire records.
pub mod wire;

/// Re-export action types.
pub use action::{Action, Stat};
/// Re-export applier types.
pub use apply::{ActionApplier, ApplyContext, ApplyNote, ApplyOutcome};
/// Re-export error types.
pub use error::DecodeError;
/// Re-export section types.
pub use section::{Choice, PlayerChoice, Section, available_choices};
/// Re-export wire types.
pub use wire::{ActionRecord, parse_batch};
