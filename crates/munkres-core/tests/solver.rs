//! Behavioural tests for the assignment solver.

use munkres_core::{AssignmentSolver, Cost, CostMatrix, Phase, solve};
use proptest::prelude::*;

fn matrix(rows: Vec<Vec<Cost>>) -> CostMatrix {
    CostMatrix::from_rows(rows).expect("valid cost matrix")
}

/// Minimum total cost over every permutation.
fn brute_force_minimum(costs: &CostMatrix) -> Cost {
    fn search(costs: &CostMatrix, row: usize, used: &mut Vec<bool>, total: Cost, best: &mut Cost) {
        let n = costs.size();
        if row == n {
            *best = (*best).min(total);
            return;
        }
        for col in 0..n {
            if !used[col] {
                used[col] = true;
                search(costs, row + 1, used, total + costs.get(row, col), best);
                used[col] = false;
            }
        }
    }

    let mut best = Cost::MAX;
    let mut used = vec![false; costs.size()];
    search(costs, 0, &mut used, 0, &mut best);
    best
}

fn assert_perfect_matching(pairs: &[(usize, usize)], n: usize) {
    assert_eq!(pairs.len(), n, "expected one pair per row: {pairs:?}");
    let mut rows = vec![false; n];
    let mut cols = vec![false; n];
    for &(row, col) in pairs {
        assert!(!rows[row], "row {row} matched twice in {pairs:?}");
        assert!(!cols[col], "column {col} matched twice in {pairs:?}");
        rows[row] = true;
        cols[col] = true;
    }
}

fn stepwise(costs: &CostMatrix) -> (Vec<(usize, usize)>, Vec<Phase>) {
    let mut solver = AssignmentSolver::new(costs.clone());
    let mut phases = Vec::new();
    loop {
        let phase = solver.advance_one_phase();
        phases.push(phase);
        if phase.is_done() {
            break;
        }
    }
    (solver.marked(), phases)
}

fn cost_matrix_strategy(max_size: usize) -> impl Strategy<Value = CostMatrix> {
    (1..=max_size).prop_flat_map(|n| {
        prop::collection::vec(0..40i64, n * n)
            .prop_map(move |data| CostMatrix::from_vec(data, n).expect("valid cost matrix"))
    })
}

#[test]
fn trivial_matrix() {
    let mut solver = AssignmentSolver::new(matrix(vec![vec![5]]));
    solver.run_to_completion();
    assert_eq!(solver.marked(), vec![(0, 0)]);
    assert!(solver.is_done());
}

#[test]
fn three_by_three_example() {
    let costs = matrix(vec![vec![4, 2, 8], vec![4, 3, 7], vec![3, 1, 6]]);
    let assignment = solve(&costs);
    assert_perfect_matching(&assignment.pairs, 3);
    assert_eq!(assignment.total_cost, brute_force_minimum(&costs));
    assert_eq!(assignment.total_cost, 12);
}

#[test]
fn example_phase_sequence() {
    let costs = matrix(vec![vec![4, 2, 8], vec![4, 3, 7], vec![3, 1, 6]]);
    let (_, phases) = stepwise(&costs);
    assert_eq!(
        phases,
        vec![
            Phase::StarZeros,
            Phase::CoverStarredColumns,
            Phase::PrimeZeros,
            Phase::AdjustByMinUncovered,
            Phase::PrimeZeros,
            Phase::AugmentPath,
            Phase::CoverStarredColumns,
            Phase::Done,
        ]
    );
}

#[test]
fn anti_diagonal_optimum() {
    let costs = matrix(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    let assignment = solve(&costs);
    assert_perfect_matching(&assignment.pairs, 3);
    assert_eq!(assignment.total_cost, 15);
}

#[test]
fn unique_optimum_is_found_exactly() {
    let costs = matrix(vec![
        vec![10, 5, 13, 15],
        vec![3, 9, 18, 13],
        vec![10, 7, 2, 2],
        vec![7, 11, 9, 7],
    ]);
    let assignment = solve(&costs);
    assert_eq!(assignment.total_cost, brute_force_minimum(&costs));
    assert_eq!(assignment.pairs, vec![(0, 1), (1, 0), (2, 2), (3, 3)]);
}

#[test]
fn all_zero_matrix() {
    let costs = CostMatrix::filled(4, 0).unwrap();
    let assignment = solve(&costs);
    assert_eq!(assignment.pairs, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    assert_eq!(assignment.total_cost, 0);
}

#[test]
fn working_matrix_is_reduced_not_original() {
    let costs = matrix(vec![vec![4, 2, 8], vec![4, 3, 7], vec![3, 1, 6]]);
    let mut solver = AssignmentSolver::new(costs.clone());
    solver.run_to_completion();
    let reduced = solver.matrix().expect("set up");
    assert_ne!(reduced, &costs);
    for (row, col) in solver.marked() {
        assert_eq!(reduced.get(row, col), 0, "starred cells are zeros");
    }
}

#[test]
fn reduction_invariant() {
    let costs = matrix(vec![vec![7, 3, 9], vec![6, 8, 5], vec![4, 4, 4]]);
    let mut solver = AssignmentSolver::new(costs);
    assert_eq!(solver.advance_one_phase(), Phase::StarZeros);
    let reduced = solver.matrix().expect("set up");
    for row in reduced.rows() {
        assert!(row.contains(&0));
        assert!(row.iter().all(|&value| value >= 0));
    }
    for col in 0..reduced.size() {
        assert_eq!(reduced.column_min(col), 0);
    }
}

#[test]
fn advancing_after_done_is_idempotent() {
    let costs = matrix(vec![vec![3, 1], vec![1, 3]]);
    let mut solver = AssignmentSolver::new(costs);
    solver.run_to_completion();
    let marked = solver.marked();
    let phases_run = solver.phases_run();
    for _ in 0..3 {
        assert_eq!(solver.advance_one_phase(), Phase::Done);
    }
    assert_eq!(solver.marked(), marked);
    assert_eq!(solver.phases_run(), phases_run);
}

#[test]
fn snapshot_tracks_current_state() {
    let costs = matrix(vec![vec![4, 2, 8], vec![4, 3, 7], vec![3, 1, 6]]);
    let mut solver = AssignmentSolver::new(costs);
    let initial = solver.snapshot();
    assert_eq!(initial.phase, Phase::ReduceRowsCols);
    assert_eq!(initial.matrix, vec![vec![4, 2, 8], vec![4, 3, 7], vec![3, 1, 6]]);

    for _ in 0..4 {
        solver.advance_one_phase();
    }
    let snapshot = solver.snapshot();
    assert_eq!(snapshot.phase, Phase::AdjustByMinUncovered);
    assert_eq!(snapshot.phases_run, 4);
    assert_eq!(snapshot.starred, vec![(0, 1), (1, 0)]);
    assert_eq!(snapshot.primed, vec![(1, 2)]);
    assert_eq!(snapshot.row_covered, vec![false, true, false]);
    assert_eq!(snapshot.col_covered, vec![false, true, false]);
}

proptest! {
    #[test]
    fn matches_brute_force_optimum(costs in cost_matrix_strategy(6)) {
        let assignment = solve(&costs);
        assert_perfect_matching(&assignment.pairs, costs.size());
        prop_assert_eq!(assignment.total_cost, brute_force_minimum(&costs));
    }

    #[test]
    fn stepwise_equals_run_to_completion(costs in cost_matrix_strategy(6)) {
        let mut solver = AssignmentSolver::new(costs.clone());
        solver.run_to_completion();
        let (stepped, phases) = stepwise(&costs);
        prop_assert_eq!(stepped, solver.marked());
        prop_assert_eq!(phases.len(), solver.phases_run());
    }

    #[test]
    fn solving_is_deterministic(costs in cost_matrix_strategy(5)) {
        let mut solver = AssignmentSolver::default();
        solver.setup(costs.clone());
        solver.run_to_completion();
        let first = solver.marked();
        solver.setup(costs);
        solver.run_to_completion();
        prop_assert_eq!(first, solver.marked());
    }

    #[test]
    fn covers_and_stars_stay_consistent_between_phases(costs in cost_matrix_strategy(5)) {
        let n = costs.size();
        let mut solver = AssignmentSolver::new(costs);
        while !solver.advance_one_phase().is_done() {
            let starred = solver.marked();
            let mut rows = vec![0usize; n];
            let mut cols = vec![0usize; n];
            for &(row, col) in &starred {
                rows[row] += 1;
                cols[col] += 1;
            }
            prop_assert!(rows.iter().all(|&count| count <= 1));
            prop_assert!(cols.iter().all(|&count| count <= 1));
            let reduced = solver.matrix().expect("set up");
            prop_assert!(reduced.as_slice().iter().all(|&value| value >= 0));
            prop_assert_eq!(solver.row_covered().len(), n);
            prop_assert_eq!(solver.col_covered().len(), n);
        }
    }
}
