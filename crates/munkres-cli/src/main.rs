//! Hungarian method assignment solver CLI.

use clap::{ColorChoice, Parser};
use munkres_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg, StepFormatArg};
use munkres_cli::commands::{run_new, run_pad, run_solve, run_step};
use munkres_cli::logging::{LogConfig, LogFormat, init_logging};
use munkres_cli::summary::print_report;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match cli.command {
        Command::Solve(args) => run_solve(&args).and_then(|report| {
            print_report(&report, args.format)?;
            Ok(())
        }),
        Command::Step(args) => {
            let stepped = run_step(&args, &mut io::stdout().lock());
            stepped.and_then(|report| {
                if args.format != StepFormatArg::Json {
                    print_report(&report, ReportFormatArg::Table)?;
                }
                Ok(())
            })
        }
        Command::Pad(args) => run_pad(&args),
        Command::New(args) => run_new(&args),
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
