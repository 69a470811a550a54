//! CLI argument definitions for the vitals normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vitals",
    version,
    about = "Vitals normalizer - convert vital-sign measurements between display and storage units",
    long_about = "Convert vital-sign measurements between display units and their canonical\n\
                  storage units (kg, cm, \u{b0}C, mmHg, mg/dL).\n\n\
                  Supports one-shot conversion, unit family listing, and batch CSV\n\
                  normalization of visit entry rows to canonical storage rows."
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
    /// Convert a value between two units of the same measurement kind.
    Convert(ConvertArgs),

    /// List measurement kinds and their unit families.
    Units,

    /// Normalize a CSV of vitals entry rows to canonical storage rows.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Value to convert, expressed in the --from unit.
    #[arg(value_name = "VALUE")]
    pub value: f64,

    /// Unit the value is currently in (e.g. lb, in, F, kPa, mmol/L).
    #[arg(long = "from", value_name = "UNIT")]
    pub from: String,

    /// Unit to convert to; must belong to the same measurement kind.
    #[arg(long = "to", value_name = "UNIT")]
    pub to: String,

    /// Maximum fractional digits in the formatted result.
    #[arg(long = "decimals", value_name = "N", default_value_t = 2)]
    pub decimals: usize,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to the CSV file of vitals entry rows.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path for canonical rows (default: <INPUT>.canonical.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Validate and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip rows with no vitals instead of writing them through.
    #[arg(long = "skip-empty")]
    pub skip_empty: bool,
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
