use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::cli::ReportFormatArg;
use crate::types::SolveReport;

pub fn print_report(report: &SolveReport, format: ReportFormatArg) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)
}

/// Writes the assignment as a styled table or as one JSON document.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SolveReport,
    format: ReportFormatArg,
) -> io::Result<()> {
    match format {
        ReportFormatArg::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
        ReportFormatArg::Table => write_report_table(out, report),
    }
}

fn write_report_table<W: Write>(out: &mut W, report: &SolveReport) -> io::Result<()> {
    writeln!(out, "Source: {}", report.source.display())?;
    if report.is_padded() {
        writeln!(
            out,
            "Matrix: {n}x{n} (padded from {}x{})",
            report.original_rows,
            report.original_cols,
            n = report.size
        )?;
    } else {
        writeln!(out, "Matrix: {n}x{n}", n = report.size)?;
    }
    writeln!(out, "Phases run: {}", report.phases_run)?;
    let Some(total_cost) = report.total_cost else {
        writeln!(out, "Stopped before the solver converged; no assignment yet.")?;
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Cost"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for cell in &report.cells {
        table.add_row(vec![
            Cell::new(cell.row),
            Cell::new(cell.col),
            Cell::new(cell.cost),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_cost).add_attribute(Attribute::Bold),
    ]);
    writeln!(out, "{table}")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub(crate) fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub(crate) fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub(crate) fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::types::AssignedCell;

    fn report(total_cost: Option<u8>) -> SolveReport {
        let cells = if total_cost.is_some() {
            vec![
                AssignedCell { row: 0, col: 1, cost: 2 },
                AssignedCell { row: 1, col: 0, cost: 3 },
            ]
        } else {
            Vec::new()
        };
        SolveReport {
            source: PathBuf::from("costs.csv"),
            size: 3,
            original_rows: 2,
            original_cols: 3,
            phases_run: 5,
            completed: total_cost.is_some(),
            cells,
            total_cost: total_cost.map(i64::from),
        }
    }

    fn render(report: &SolveReport, format: ReportFormatArg) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_report_lists_cells_and_total() {
        let text = render(&report(Some(5)), ReportFormatArg::Table);
        assert!(text.starts_with("Source: costs.csv\nMatrix: 3x3 (padded from 2x3)\nPhases run: 5\n"));
        assert!(text.contains("TOTAL"));
        assert!(text.contains("Column"));
    }

    #[test]
    fn incomplete_report_has_no_table() {
        let text = render(&report(None), ReportFormatArg::Table);
        assert!(text.ends_with("Stopped before the solver converged; no assignment yet.\n"));
        assert!(!text.contains("TOTAL"));
    }

    #[test]
    fn json_report_is_machine_readable() {
        let text = render(&report(Some(5)), ReportFormatArg::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total_cost"], 5);
        assert_eq!(value["completed"], true);
        assert_eq!(value["cells"][1]["row"], 1);
        assert_eq!(value["cells"][1]["cost"], 3);
    }
}
