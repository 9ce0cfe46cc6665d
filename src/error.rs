//! Error types for planning and replaying edit scripts.

use thiserror::Error;

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A cumulative cost does not fit in `Cost`. The table is discarded,
    /// since a wrapped value would break optimality.
    #[error("cost overflow at cell (row {row}, col {col})")]
    CostOverflow { row: usize, col: usize },

    /// Summing the per-record costs of a script overflows `Cost`.
    #[error("script cost overflows at step {step}")]
    ScriptCostOverflow { step: usize },

    /// `(rows) * (cols)` cells do not fit in memory addressing.
    #[error("cost matrix of {rows}x{cols} cells is too large")]
    TableTooLarge { rows: usize, cols: usize },

    /// Replaying a script found a record that does not fit the source.
    #[error("edit script does not apply at step {step}: {reason}")]
    ScriptMismatch { step: usize, reason: &'static str },
}
