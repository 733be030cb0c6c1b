//! CLI argument definitions for the assignment solver.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use munkres_ingest::IngestOptions;
use munkres_model::Cost;

#[derive(Parser)]
#[command(
    name = "munkres",
    version,
    about = "Minimum-cost assignment with the Hungarian method",
    long_about = "Solve square or ragged cost tables with the Hungarian (Kuhn-Munkres) method.\n\n\
                  Tables are plain CSV files of non-negative integers, one row per line.\n\
                  Ragged tables are padded to square with a fill value before solving."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Solve a cost table and print the optimal assignment.
    Solve(SolveArgs),

    /// Run the solver phase by phase, printing the working matrix after each.
    Step(StepArgs),

    /// Square a ragged cost table and write it out.
    Pad(PadArgs),

    /// Write a blank square cost table to fill in.
    New(NewArgs),
}

/// Options shared by every command that reads a table.
#[derive(Args, Clone)]
pub struct TableArgs {
    /// Path to the cost table (CSV, no header).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Cost used to square ragged tables.
    #[arg(long = "pad-value", value_name = "COST", default_value_t = 0)]
    pub pad_value: Cost,
}

impl TableArgs {
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default()
            .with_delimiter(self.delimiter)
            .with_pad_value(self.pad_value)
    }
}

#[derive(Parser)]
pub struct SolveArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Output format for the assignment.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct StepArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Stop after this many phases even if the solver has not finished.
    #[arg(long = "max-phases", value_name = "N")]
    pub max_phases: Option<usize>,

    /// Output format for each intermediate state.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: StepFormatArg,
}

#[derive(Parser)]
pub struct PadArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Where to write the padded table (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct NewArgs {
    /// Number of rows and columns.
    #[arg(value_name = "SIZE", value_parser = clap::value_parser!(u16).range(1..))]
    pub size: u16,

    /// Where to write the blank table.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StepFormatArg {
    Table,
    Plain,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let value = if value == "\\t" { "\t" } else { value };
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got '{value}'")),
    }
}
