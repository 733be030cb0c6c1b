//! Validation errors for cost matrices.

use thiserror::Error;

use crate::matrix::Cost;

/// Reasons a table of costs cannot be handed to the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The matrix has no rows (or no columns).
    #[error("cost matrix is empty")]
    Empty,

    /// A row does not have as many entries as there are rows.
    #[error("cost matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat data does not match the requested dimension.
    #[error("cost data has {actual} entries, expected {expected} for a square matrix")]
    DataLength { expected: usize, actual: usize },

    /// Costs must be non-negative.
    #[error("negative cost {value} at row {row}, column {col}")]
    NegativeCost { row: usize, col: usize, value: Cost },

    /// The largest entry is too big for the adjustment phase to stay in range.
    #[error("cost {max} is too large for a {size}x{size} matrix")]
    CostOverflow { max: Cost, size: usize },
}

/// Result type alias for matrix validation.
pub type Result<T> = std::result::Result<T, MatrixError>;
