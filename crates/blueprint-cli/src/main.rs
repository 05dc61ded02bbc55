//! Blueprint data-wrangling CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use blueprint_cli::commands::{run_coversheet, run_export, run_phenotips};
use blueprint_cli::config::load_config;
use blueprint_cli::logging::{LogConfig, LogFormat, init_logging};
use blueprint_cli::types::RunSummary;
use blueprint_report::{CommandLineBackend, PdfTools};

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(summary) => match print_summary(&summary, cli.json) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: failed to print summary: {error}");
                1
            }
        },
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let config = load_config(cli.config.as_deref())?;
    let summary = match &cli.command {
        Command::Export(args) => RunSummary::Export(run_export(
            &config,
            &args.input,
            args.output.as_deref(),
            args.schema.map(Into::into),
        )?),
        Command::Phenotips(args) => {
            RunSummary::Phenotips(run_phenotips(&config, &args.sendaway_list)?)
        }
        Command::Coversheet(args) => {
            let backend = CommandLineBackend::new(PdfTools::from(&config.tools));
            let todays_date = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
            RunSummary::Coversheet(run_coversheet(
                &config,
                &backend,
                &args.report_dir,
                &todays_date,
            )?)
        }
    };
    Ok(summary)
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
