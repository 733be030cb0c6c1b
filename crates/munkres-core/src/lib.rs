//! Hungarian (Kuhn-Munkres) assignment solver.
//!
//! [`AssignmentSolver`] finds a minimum-cost perfect matching on a square
//! [`CostMatrix`]. It can run to completion in one call or be advanced one
//! [`Phase`] at a time, with covers and marks readable between phases.
//!
//! # Example
//!
//! ```
//! use munkres_core::{AssignmentSolver, solve};
//! use munkres_model::CostMatrix;
//!
//! let costs = CostMatrix::from_rows(vec![vec![4, 1], vec![2, 5]]).unwrap();
//!
//! let assignment = solve(&costs);
//! assert_eq!(assignment.pairs, vec![(0, 1), (1, 0)]);
//! assert_eq!(assignment.total_cost, 3);
//!
//! let mut solver = AssignmentSolver::new(costs);
//! while !solver.advance_one_phase().is_done() {
//!     // render solver.row_covered(), solver.col_covered(), solver.marked()
//! }
//! assert_eq!(solver.marked(), vec![(0, 1), (1, 0)]);
//! ```

mod solver;

pub use munkres_model::{Assignment, Cost, CostMatrix, Mark, Phase, SolverSnapshot};
pub use solver::AssignmentSolver;

/// Solves a copy of `costs` and prices the result against the originals.
pub fn solve(costs: &CostMatrix) -> Assignment {
    let mut solver = AssignmentSolver::new(costs.clone());
    solver.run_to_completion();
    Assignment::priced(solver.marked(), costs)
}
