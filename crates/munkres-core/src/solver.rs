//! Phase-by-phase Hungarian method over an owned cost matrix.
//!
//! The solver keeps the working cost matrix, cover flags and the mark
//! matrix together and advances them one [`Phase`] at a time, so a
//! caller can render the state between phases or run straight to the
//! end. Each call to [`AssignmentSolver::advance_one_phase`] applies one
//! phase completely; no partially-applied phase is ever observable.

use munkres_model::{Cost, CostMatrix, Mark, Phase, SolverSnapshot};
use tracing::{debug, trace};

/// Stepwise Kuhn-Munkres solver.
///
/// A default-constructed solver has not been set up: it reports size 0,
/// sits in [`Phase::Done`], and every advancing call is a no-op.
#[derive(Debug, Clone, Default)]
pub struct AssignmentSolver {
    state: Option<SolverState>,
}

#[derive(Debug, Clone)]
struct SolverState {
    costs: CostMatrix,
    marks: Vec<Mark>,
    row_covered: Vec<bool>,
    col_covered: Vec<bool>,
    path: Vec<(usize, usize)>,
    path_start: (usize, usize),
    phase: Phase,
    phases_run: usize,
}

impl AssignmentSolver {
    /// Creates a solver already set up for `costs`.
    pub fn new(costs: CostMatrix) -> Self {
        let mut solver = Self::default();
        solver.setup(costs);
        solver
    }

    /// Takes ownership of `costs` and resets all derived state.
    ///
    /// May be called again to reuse the solver for another matrix.
    pub fn setup(&mut self, costs: CostMatrix) {
        let n = costs.size();
        debug!(size = n, "solver setup");
        self.state = Some(SolverState {
            costs,
            marks: vec![Mark::None; n * n],
            row_covered: vec![false; n],
            col_covered: vec![false; n],
            path: Vec::with_capacity(2 * n),
            path_start: (0, 0),
            phase: Phase::FIRST,
            phases_run: 0,
        });
    }

    /// Runs phases until the marker reaches [`Phase::Done`].
    pub fn run_to_completion(&mut self) {
        while !self.advance_one_phase().is_done() {}
    }

    /// Executes the current phase and returns the next one.
    pub fn advance_one_phase(&mut self) -> Phase {
        match self.state.as_mut() {
            Some(state) => state.advance(),
            None => Phase::Done,
        }
    }

    /// Phase that the next call to [`advance_one_phase`](Self::advance_one_phase) will run.
    pub fn phase(&self) -> Phase {
        self.state.as_ref().map_or(Phase::Done, |state| state.phase)
    }

    /// True once a complete matching has been found, or before setup.
    pub fn is_done(&self) -> bool {
        self.phase().is_done()
    }

    /// Dimension of the matrix, 0 before setup.
    pub fn size(&self) -> usize {
        self.state.as_ref().map_or(0, |state| state.costs.size())
    }

    /// Number of phases executed since the last setup.
    pub fn phases_run(&self) -> usize {
        self.state.as_ref().map_or(0, |state| state.phases_run)
    }

    /// Working cost matrix. After the first phase this holds reduced
    /// values, not the costs passed to setup.
    pub fn matrix(&self) -> Option<&CostMatrix> {
        self.state.as_ref().map(|state| &state.costs)
    }

    /// Row cover flags left by the last phase, empty before setup.
    pub fn row_covered(&self) -> &[bool] {
        self.state
            .as_ref()
            .map(|state| state.row_covered.as_slice())
            .unwrap_or_default()
    }

    /// Column cover flags left by the last phase, empty before setup.
    pub fn col_covered(&self) -> &[bool] {
        self.state
            .as_ref()
            .map(|state| state.col_covered.as_slice())
            .unwrap_or_default()
    }

    /// Mark at (row, col); [`Mark::None`] outside the matrix.
    pub fn mark(&self, row: usize, col: usize) -> Mark {
        match self.state.as_ref() {
            Some(state) if row < state.n() && col < state.n() => {
                state.marks[state.index(row, col)]
            }
            _ => Mark::None,
        }
    }

    /// Starred cells in row-major order: the tentative matching before
    /// convergence, the optimal assignment once done.
    pub fn marked(&self) -> Vec<(usize, usize)> {
        self.cells_with(Mark::Star)
    }

    /// Primed cells in row-major order.
    pub fn primed(&self) -> Vec<(usize, usize)> {
        self.cells_with(Mark::Prime)
    }

    fn cells_with(&self, mark: Mark) -> Vec<(usize, usize)> {
        let Some(state) = self.state.as_ref() else {
            return Vec::new();
        };
        let n = state.costs.size();
        state
            .marks
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == mark)
            .map(|(index, _)| (index / n, index % n))
            .collect()
    }

    /// Copies the observable state for rendering or tracing.
    pub fn snapshot(&self) -> SolverSnapshot {
        SolverSnapshot {
            phase: self.phase(),
            phases_run: self.phases_run(),
            matrix: self.matrix().map(CostMatrix::to_rows).unwrap_or_default(),
            row_covered: self.row_covered().to_vec(),
            col_covered: self.col_covered().to_vec(),
            starred: self.marked(),
            primed: self.primed(),
        }
    }
}

impl SolverState {
    fn n(&self) -> usize {
        self.costs.size()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.n() + col
    }

    fn advance(&mut self) -> Phase {
        let current = self.phase;
        let next = match current {
            Phase::ReduceRowsCols => self.reduce_rows_cols(),
            Phase::StarZeros => self.star_zeros(),
            Phase::CoverStarredColumns => self.cover_starred_columns(),
            Phase::PrimeZeros => self.prime_zeros(),
            Phase::AugmentPath => self.augment_path(),
            Phase::AdjustByMinUncovered => self.adjust_by_min_uncovered(),
            Phase::Done => return Phase::Done,
        };
        self.phases_run += 1;
        self.phase = next;
        debug!(
            phase = %current,
            next = %next,
            phases_run = self.phases_run,
            "phase complete"
        );
        next
    }

    fn reduce_rows_cols(&mut self) -> Phase {
        let n = self.n();
        for row in 0..n {
            let values = self.costs.row_mut(row);
            let min = values.iter().copied().min().unwrap_or_default();
            for value in values.iter_mut() {
                *value -= min;
            }
        }
        for col in 0..n {
            let min = self.costs.column_min(col);
            for row in 0..n {
                *self.costs.get_mut(row, col) -= min;
            }
        }
        Phase::StarZeros
    }

    fn star_zeros(&mut self) -> Phase {
        let n = self.n();
        for row in 0..n {
            for col in 0..n {
                if self.costs.get(row, col) == 0
                    && !self.row_covered[row]
                    && !self.col_covered[col]
                {
                    let index = self.index(row, col);
                    self.marks[index] = Mark::Star;
                    self.row_covered[row] = true;
                    self.col_covered[col] = true;
                    trace!(row, col, "starred zero");
                }
            }
        }
        self.clear_covers();
        Phase::CoverStarredColumns
    }

    fn cover_starred_columns(&mut self) -> Phase {
        let n = self.n();
        let mut count = 0;
        for row in 0..n {
            for col in 0..n {
                if self.marks[self.index(row, col)].is_star() {
                    self.col_covered[col] = true;
                    count += 1;
                }
            }
        }
        if count >= n {
            Phase::Done
        } else {
            trace!(covered = count, size = n, "matching incomplete");
            Phase::PrimeZeros
        }
    }

    fn prime_zeros(&mut self) -> Phase {
        loop {
            let Some((row, col)) = self.find_uncovered_zero() else {
                return Phase::AdjustByMinUncovered;
            };
            let index = self.index(row, col);
            self.marks[index] = Mark::Prime;
            trace!(row, col, "primed zero");
            match self.find_in_row(row, Mark::Star) {
                Some(star_col) => {
                    self.row_covered[row] = true;
                    self.col_covered[star_col] = false;
                }
                None => {
                    self.path_start = (row, col);
                    return Phase::AugmentPath;
                }
            }
        }
    }

    fn augment_path(&mut self) -> Phase {
        self.path.clear();
        self.path.push(self.path_start);
        loop {
            let (_, col) = self.path[self.path.len() - 1];
            let Some(star_row) = self.find_in_col(col, Mark::Star) else {
                break;
            };
            self.path.push((star_row, col));
            let prime_col = self.find_in_row(star_row, Mark::Prime).unwrap_or_else(|| {
                panic!("augmenting path: row {star_row} has a star but no prime")
            });
            self.path.push((star_row, prime_col));
        }
        trace!(length = self.path.len(), "augmenting path built");

        for step in 0..self.path.len() {
            let (row, col) = self.path[step];
            let index = self.index(row, col);
            self.marks[index] = match self.marks[index] {
                Mark::Star => Mark::None,
                Mark::Prime => Mark::Star,
                Mark::None => panic!("augmenting path visits unmarked cell ({row}, {col})"),
            };
        }
        self.clear_covers();
        self.erase_primes();
        Phase::CoverStarredColumns
    }

    fn adjust_by_min_uncovered(&mut self) -> Phase {
        let min = self
            .smallest_uncovered()
            .expect("adjust phase requires an uncovered row and column");
        debug_assert!(min > 0, "uncovered minimum must be positive");
        let n = self.n();
        for row in 0..n {
            for col in 0..n {
                // Row cover adds, column non-cover subtracts; apply the net shift.
                let shift = match (self.row_covered[row], self.col_covered[col]) {
                    (true, true) => min,
                    (false, false) => -min,
                    _ => continue,
                };
                *self.costs.get_mut(row, col) += shift;
            }
        }
        trace!(min, "adjusted by minimum uncovered value");
        Phase::PrimeZeros
    }

    fn find_uncovered_zero(&self) -> Option<(usize, usize)> {
        let n = self.n();
        (0..n)
            .filter(|&row| !self.row_covered[row])
            .find_map(|row| {
                (0..n)
                    .find(|&col| !self.col_covered[col] && self.costs.get(row, col) == 0)
                    .map(|col| (row, col))
            })
    }

    fn smallest_uncovered(&self) -> Option<Cost> {
        let n = self.n();
        let mut min: Option<Cost> = None;
        for row in (0..n).filter(|&row| !self.row_covered[row]) {
            for col in (0..n).filter(|&col| !self.col_covered[col]) {
                let value = self.costs.get(row, col);
                min = Some(min.map_or(value, |current| current.min(value)));
            }
        }
        min
    }

    fn find_in_row(&self, row: usize, mark: Mark) -> Option<usize> {
        (0..self.n()).find(|&col| self.marks[self.index(row, col)] == mark)
    }

    fn find_in_col(&self, col: usize, mark: Mark) -> Option<usize> {
        (0..self.n()).find(|&row| self.marks[self.index(row, col)] == mark)
    }

    fn clear_covers(&mut self) {
        self.row_covered.fill(false);
        self.col_covered.fill(false);
    }

    fn erase_primes(&mut self) {
        for mark in &mut self.marks {
            if mark.is_prime() {
                *mark = Mark::None;
            }
        }
    }
}
