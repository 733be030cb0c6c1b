use std::path::{Path, PathBuf};

use serde::Serialize;

use munkres_core::{Assignment, AssignmentSolver, Cost};
use munkres_ingest::PaddedMatrix;

/// Outcome of solving (or stepping through) one cost table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub source: PathBuf,
    /// Dimension of the square matrix handed to the solver.
    pub size: usize,
    pub original_rows: usize,
    pub original_cols: usize,
    pub phases_run: usize,
    /// False when stepping stopped before the solver converged.
    pub completed: bool,
    /// Assigned cells inside the original table, empty when not completed.
    pub cells: Vec<AssignedCell>,
    pub total_cost: Option<Cost>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignedCell {
    pub row: usize,
    pub col: usize,
    pub cost: Cost,
}

impl SolveReport {
    /// Builds a report from the solver state, dropping padded pairs.
    pub fn from_solver(source: &Path, padded: &PaddedMatrix, solver: &AssignmentSolver) -> Self {
        let completed = solver.is_done();
        let (cells, total_cost) = if completed {
            let assignment = padded.trim(&Assignment::priced(solver.marked(), &padded.matrix));
            let cells = assignment
                .pairs
                .iter()
                .map(|&(row, col)| AssignedCell {
                    row,
                    col,
                    cost: padded.matrix.get(row, col),
                })
                .collect();
            (cells, Some(assignment.total_cost))
        } else {
            (Vec::new(), None)
        };
        Self {
            source: source.to_path_buf(),
            size: padded.matrix.size(),
            original_rows: padded.original_rows,
            original_cols: padded.original_cols,
            phases_run: solver.phases_run(),
            completed,
            cells,
            total_cost,
        }
    }

    pub fn is_padded(&self) -> bool {
        self.original_rows != self.size || self.original_cols != self.size
    }
}
