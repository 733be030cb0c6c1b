//! Shared types for the Hungarian assignment solver.
//!
//! - [`CostMatrix`]: validated square matrix of non-negative integer costs
//! - [`Mark`] / [`Phase`]: mark matrix labels and the solver's phase marker
//! - [`Assignment`] / [`SolverSnapshot`]: results and intermediate state for callers

pub mod assignment;
pub mod enums;
pub mod error;
pub mod matrix;

pub use assignment::{Assignment, SolverSnapshot};
pub use enums::{Mark, Phase};
pub use error::{MatrixError, Result};
pub use matrix::{Cost, CostMatrix};
