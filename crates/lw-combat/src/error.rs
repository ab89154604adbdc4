//! Error types for combat data.

/// Errors that can occur when building combat configuration.
#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    /// A table cell in which neither side loses endurance. Such a cell
    /// would let a fight run forever, so the table is rejected.
    #[error("stalemate cell at ratio {ratio}, die {die}")]
    StalemateCell {
        /// Ratio row of the offending cell.
        ratio: i32,
        /// Die column of the offending cell.
        die: u8,
    },
}

/// Convenience result type for combat operations.
pub type CombatResult<T> = Result<T, CombatError>;
