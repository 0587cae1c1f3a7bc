//! CLI argument definitions for the roster intake tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster-intake",
    version,
    about = "Roster Intake - Validate and normalize user roster data",
    long_about = "Validate user roster records read from a JSON source and write the\n\
                  normalized result.\n\n\
                  Records failing the schema, email-format, or id-uniqueness rules are\n\
                  filtered out and reported with the first rule they violated."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
    /// Validate and normalize a roster file.
    Process(ProcessArgs),

    /// List the canonical user fields and their expected types.
    Fields,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the roster JSON file (a top-level array of user objects).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for normalized users (default: result.json next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a machine-readable rejections.json next to the output.
    #[arg(long = "rejection-report")]
    pub rejection_report: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
