//! Error types for wire-record ingestion.

/// Why a flat wire record could not become a typed action.
///
/// These are never fatal: the applier converts them into per-action
/// "ignored" notes and keeps going, because the upstream interpreter
/// is untrusted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The record's `type` tag is not a known action type.
    #[error("unknown action type '{0}'")]
    UnknownType(String),

    /// The record references a stat the sheet does not have.
    #[error("unknown stat '{0}'")]
    UnknownStat(String),

    /// An item action arrived without an item name.
    #[error("missing item name")]
    MissingItem,

    /// A flag action arrived without a flag name.
    #[error("missing flag name")]
    MissingFlag,

    /// A choice removal needs a positive destination section id.
    #[error("section id {0} is not a valid choice target")]
    BadSectionId(i64),

    /// A combat arrived with no enemies.
    #[error("combat with no enemies")]
    NoEnemies,
}
