//! Rendering of intermediate solver states.
//!
//! Both renderers work from a [`SolverSnapshot`]. Starred zeros carry a
//! `*` suffix, primed zeros a `'` suffix, and covered lines are flagged
//! with `#` (uncovered with `.`) in the margin.

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use munkres_core::{Mark, SolverSnapshot};

use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

/// One-line description of where the solver stands.
pub fn state_title(snapshot: &SolverSnapshot) -> String {
    format!(
        "phases run: {}, next: {}",
        snapshot.phases_run, snapshot.phase
    )
}

/// Plain-text grid, suitable for logs and diffs.
pub fn render_plain(snapshot: &SolverSnapshot) -> String {
    let marks = mark_grid(snapshot);
    let width = snapshot
        .matrix
        .iter()
        .flatten()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1);

    let mut lines = vec![state_title(snapshot)];
    let header: Vec<String> = snapshot
        .col_covered
        .iter()
        .map(|&covered| format!("{:>width$} ", cover_flag(covered)))
        .collect();
    lines.push(format!("  {}", header.join(" ")));

    for (row, values) in snapshot.matrix.iter().enumerate() {
        let cells: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(col, value)| format!("{value:>width$}{}", suffix(marks[row][col])))
            .collect();
        let covered = snapshot.row_covered.get(row).copied().unwrap_or(false);
        lines.push(format!("{} {}", cover_flag(covered), cells.join(" ")));
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Styled grid for terminals.
pub fn render_grid(snapshot: &SolverSnapshot) -> Table {
    let marks = mark_grid(snapshot);
    let mut table = Table::new();

    let mut header = vec![Cell::new("")];
    for (col, &covered) in snapshot.col_covered.iter().enumerate() {
        header.push(line_label('c', col, covered));
    }
    table.set_header(header);
    apply_table_style(&mut table);

    for (row, values) in snapshot.matrix.iter().enumerate() {
        let row_covered = snapshot.row_covered.get(row).copied().unwrap_or(false);
        let mut cells = vec![line_label('r', row, row_covered)];
        for (col, value) in values.iter().enumerate() {
            let covered = row_covered || snapshot.col_covered.get(col).copied().unwrap_or(false);
            let text = format!("{value}{}", marks[row][col].symbol());
            let cell = match marks[row][col] {
                Mark::Star => Cell::new(text).fg(Color::Green).add_attribute(Attribute::Bold),
                Mark::Prime => Cell::new(text).fg(Color::Yellow),
                Mark::None if covered => dim_cell(text),
                Mark::None => Cell::new(text),
            };
            cells.push(cell);
        }
        table.add_row(cells);
    }
    for col in 1..=snapshot.matrix.len() {
        align_column(&mut table, col, CellAlignment::Right);
    }
    table
}

fn mark_grid(snapshot: &SolverSnapshot) -> Vec<Vec<Mark>> {
    let n = snapshot.matrix.len();
    let mut marks = vec![vec![Mark::None; n]; n];
    for &(row, col) in &snapshot.starred {
        marks[row][col] = Mark::Star;
    }
    for &(row, col) in &snapshot.primed {
        marks[row][col] = Mark::Prime;
    }
    marks
}

fn line_label(prefix: char, index: usize, covered: bool) -> Cell {
    if covered {
        Cell::new(format!("{prefix}{index} #"))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        header_cell(&format!("{prefix}{index}"))
    }
}

fn cover_flag(covered: bool) -> char {
    if covered { '#' } else { '.' }
}

fn suffix(mark: Mark) -> &'static str {
    match mark {
        Mark::None => " ",
        Mark::Star | Mark::Prime => mark.symbol(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use munkres_core::{AssignmentSolver, CostMatrix};

    fn example_solver() -> AssignmentSolver {
        let costs =
            CostMatrix::from_rows(vec![vec![4, 2, 8], vec![4, 3, 7], vec![3, 1, 6]]).unwrap();
        AssignmentSolver::new(costs)
    }

    fn advance(solver: &mut AssignmentSolver, phases: usize) {
        for _ in 0..phases {
            solver.advance_one_phase();
        }
    }

    #[test]
    fn plain_initial_state() {
        let solver = example_solver();
        insta::assert_snapshot!(render_plain(&solver.snapshot()), @r"
        phases run: 0, next: reduce rows and columns
          .  .  .
        . 4  2  8
        . 4  3  7
        . 3  1  6
        ");
    }

    #[test]
    fn plain_shows_stars_primes_and_covers() {
        let mut solver = example_solver();
        advance(&mut solver, 4);
        insta::assert_snapshot!(render_plain(&solver.snapshot()), @r"
        phases run: 4, next: adjust by minimum uncovered
          .  #  .
        . 1  0* 2
        # 0* 0  0'
        . 1  0  1
        ");
    }

    #[test]
    fn plain_final_state() {
        let mut solver = example_solver();
        solver.run_to_completion();
        insta::assert_snapshot!(render_plain(&solver.snapshot()), @r"
        phases run: 8, next: done
          #  #  #
        . 0  0* 1
        . 0  1  0*
        . 0* 0  0
        ");
    }

    #[test]
    fn plain_pads_wide_values() {
        let costs = CostMatrix::from_rows(vec![vec![10, 5], vec![3, 12]]).unwrap();
        let solver = AssignmentSolver::new(costs);
        let text = render_plain(&solver.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "   .   .");
        assert_eq!(lines[2], ". 10   5");
        assert_eq!(lines[3], ".  3  12");
    }

    #[test]
    fn grid_labels_covered_lines_and_marks() {
        let mut solver = example_solver();
        advance(&mut solver, 4);
        let table = render_grid(&solver.snapshot());
        let text = table.to_string();
        assert!(text.contains("r1 #"));
        assert!(text.contains("c1 #"));
        assert!(text.contains("0*"));
        assert!(text.contains("0'"));
        assert!(text.contains("r2"));
        assert!(!text.contains("r3"));
    }
}
