use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use munkres_core::{AssignmentSolver, SolverSnapshot};
use munkres_ingest::{
    IngestOptions, PaddedMatrix, RawTable, read_table, write_table, write_table_to_writer,
};

use crate::cli::{NewArgs, PadArgs, SolveArgs, StepArgs, StepFormatArg, TableArgs};
use crate::render::{render_grid, render_plain, state_title};
use crate::types::SolveReport;

/// Reads, pads and validates the table named by `args`.
pub fn load_table(args: &TableArgs) -> Result<PaddedMatrix> {
    let options = args.ingest_options();
    let table = read_table(&args.file, &options)
        .with_context(|| format!("read cost table {}", args.file.display()))?;
    let padded = table
        .into_padded(options.pad_value)
        .with_context(|| format!("prepare cost table {}", args.file.display()))?;
    if padded.is_padded() {
        info!(
            rows = padded.original_rows,
            cols = padded.original_cols,
            size = padded.matrix.size(),
            pad_value = options.pad_value,
            "padded cost table to square"
        );
    }
    Ok(padded)
}

pub fn run_solve(args: &SolveArgs) -> Result<SolveReport> {
    let span = info_span!("solve", file = %args.table.file.display());
    let _guard = span.enter();
    let padded = load_table(&args.table)?;
    let report = solve_padded(&args.table.file, &padded);
    info!(
        total_cost = report.total_cost,
        phases_run = report.phases_run,
        "assignment found"
    );
    Ok(report)
}

/// Runs the solver to completion on an already loaded matrix.
pub fn solve_padded(source: &Path, padded: &PaddedMatrix) -> SolveReport {
    let mut solver = AssignmentSolver::new(padded.matrix.clone());
    solver.run_to_completion();
    SolveReport::from_solver(source, padded, &solver)
}

pub fn run_step<W: Write>(args: &StepArgs, out: &mut W) -> Result<SolveReport> {
    let span = info_span!("step", file = %args.table.file.display());
    let _guard = span.enter();
    let padded = load_table(&args.table)?;
    step_padded(&args.table.file, &padded, args.max_phases, args.format, out)
}

/// Advances one phase at a time, writing the state before the first
/// phase and after every phase.
pub fn step_padded<W: Write>(
    source: &Path,
    padded: &PaddedMatrix,
    max_phases: Option<usize>,
    format: StepFormatArg,
    out: &mut W,
) -> Result<SolveReport> {
    let mut solver = AssignmentSolver::new(padded.matrix.clone());
    write_state(out, &solver.snapshot(), format).context("write solver state")?;
    while !solver.is_done() {
        if max_phases.is_some_and(|limit| solver.phases_run() >= limit) {
            info!(phases_run = solver.phases_run(), "phase limit reached");
            break;
        }
        solver.advance_one_phase();
        write_state(out, &solver.snapshot(), format).context("write solver state")?;
    }
    Ok(SolveReport::from_solver(source, padded, &solver))
}

fn write_state<W: Write>(
    out: &mut W,
    snapshot: &SolverSnapshot,
    format: StepFormatArg,
) -> io::Result<()> {
    match format {
        StepFormatArg::Table => {
            writeln!(out, "{}", state_title(snapshot))?;
            writeln!(out, "{}", render_grid(snapshot))?;
            writeln!(out)
        }
        StepFormatArg::Plain => {
            writeln!(out, "{}", render_plain(snapshot))?;
            writeln!(out)
        }
        StepFormatArg::Json => {
            serde_json::to_writer(&mut *out, snapshot)?;
            writeln!(out)
        }
    }
}

/// Squares a ragged table. Blank cells inside the original extent stay blank.
pub fn run_pad(args: &PadArgs) -> Result<()> {
    let options = args.table.ingest_options();
    let table = read_table(&args.table.file, &options)
        .with_context(|| format!("read cost table {}", args.table.file.display()))?;
    let padded = table.padded(options.pad_value);
    debug!(
        rows = table.height(),
        cols = table.width(),
        size = padded.height(),
        "padded table"
    );
    match &args.output {
        Some(path) => {
            write_table(path, &padded, &options)
                .with_context(|| format!("write padded table {}", path.display()))?;
            info!(path = %path.display(), size = padded.height(), "wrote padded table");
        }
        None => {
            let stdout = io::stdout();
            write_table_to_writer(stdout.lock(), &padded, &options)
                .context("write padded table to stdout")?;
        }
    }
    Ok(())
}

/// Writes a blank square table for the user to fill in.
pub fn run_new(args: &NewArgs) -> Result<()> {
    let size = usize::from(args.size);
    let options = IngestOptions::default().with_delimiter(args.delimiter);
    write_table(&args.output, &RawTable::blank(size), &options)
        .with_context(|| format!("write blank table {}", args.output.display()))?;
    info!(path = %args.output.display(), size, "wrote blank table");
    Ok(())
}
