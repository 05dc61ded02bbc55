//! CLI argument definitions for the Blueprint data-wrangling tool.

use std::path::PathBuf;

use blueprint_model::SchemaVersion;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "blueprint",
    version,
    about = "Blueprint lab data wrangling - sendaway exports, phenotips blocks and coversheets",
    long_about = "Prepare laboratory sendaway data for Blueprint Genetics.\n\n\
                  Transcodes sendaway sheets into the export table, extracts per-patient\n\
                  phenotips blocks and prepends coversheets to report PDFs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Run configuration (default: ./blueprint.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON instead of a table.
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Transcode a sendaway sheet into the Blueprint export table.
    Export(ExportArgs),

    /// Extract phenotips blocks for the candidates of a sendaway list.
    Phenotips(PhenotipsArgs),

    /// Prepend a coversheet to every report PDF in a directory.
    Coversheet(CoversheetArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Sendaway sheet to transcode.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <export_output_dir>/BLUEPRINT_EXPORT.csv).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Export schema version (overrides the configured schema).
    #[arg(long = "schema", value_enum)]
    pub schema: Option<SchemaArg>,
}

#[derive(Parser)]
pub struct PhenotipsArgs {
    /// Tab-separated sendaway list naming the candidates.
    #[arg(value_name = "SENDAWAY_LIST")]
    pub sendaway_list: PathBuf,
}

#[derive(Parser)]
pub struct CoversheetArgs {
    /// Directory holding the `report*.pdf` files.
    #[arg(value_name = "REPORT_DIR")]
    pub report_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    V1,
    V2,
}

impl From<SchemaArg> for SchemaVersion {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::V1 => SchemaVersion::V1,
            SchemaArg::V2 => SchemaVersion::V2,
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_export_with_schema_override() {
        let cli = Cli::try_parse_from([
            "blueprint",
            "export",
            "sendaway.csv",
            "--schema",
            "v2",
            "-o",
            "out.csv",
        ])
        .unwrap();
        let Command::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.input, PathBuf::from("sendaway.csv"));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert_eq!(args.schema.map(SchemaVersion::from), Some(SchemaVersion::V2));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "blueprint",
            "phenotips",
            "list.tsv",
            "--config",
            "/etc/blueprint.toml",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/blueprint.toml")));
        assert!(matches!(cli.command, Command::Phenotips(_)));
    }

    #[test]
    fn coversheet_requires_report_dir() {
        assert!(Cli::try_parse_from(["blueprint", "coversheet"]).is_err());
    }

    #[test]
    fn unknown_schema_is_rejected() {
        assert!(Cli::try_parse_from(["blueprint", "export", "x.csv", "--schema", "v3"]).is_err());
    }
}
