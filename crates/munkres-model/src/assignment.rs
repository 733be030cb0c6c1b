use serde::{Deserialize, Serialize};

use crate::enums::Phase;
use crate::matrix::{Cost, CostMatrix};

/// A priced set of (row, column) pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Matched cells in row-major order.
    pub pairs: Vec<(usize, usize)>,
    /// Sum of the original costs at `pairs`.
    pub total_cost: Cost,
}

impl Assignment {
    /// Prices `pairs` against the original (un-reduced) costs.
    pub fn priced(pairs: Vec<(usize, usize)>, costs: &CostMatrix) -> Self {
        let total_cost = costs.total_cost(&pairs);
        Self { pairs, total_cost }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Column matched to `row`, if any.
    pub fn column_for_row(&self, row: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|&&(r, _)| r == row)
            .map(|&(_, col)| col)
    }

    /// Keeps only pairs inside the first `rows` × `cols` block.
    ///
    /// Padded rows and columns are synthetic; the total is re-priced
    /// against `costs` so fill values never leak into the result.
    pub fn within(&self, rows: usize, cols: usize, costs: &CostMatrix) -> Self {
        let pairs: Vec<(usize, usize)> = self
            .pairs
            .iter()
            .copied()
            .filter(|&(row, col)| row < rows && col < cols)
            .collect();
        Self::priced(pairs, costs)
    }
}

/// Read-only view of solver state between phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverSnapshot {
    /// Phase that will run next.
    pub phase: Phase,
    /// Number of phases executed since setup.
    pub phases_run: usize,
    /// Working (reduced) cost matrix.
    pub matrix: Vec<Vec<Cost>>,
    pub row_covered: Vec<bool>,
    pub col_covered: Vec<bool>,
    pub starred: Vec<(usize, usize)>,
    pub primed: Vec<(usize, usize)>,
}
