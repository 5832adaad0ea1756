//! CLI argument definitions for the MDR comparison.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mdr-compare",
    version,
    about = "Compare an RCC study build against MDR repository requirements",
    long_about = "Compare the forms and items implemented in an RCC study build \
                  against the MDR repository.\n\n\
                  Reports every mandatory or conditionally required repository \
                  item that no build form instance collects."
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
    /// Compare a build export against a repository export.
    Compare(CompareArgs),

    /// Check that both exports carry the columns the comparison reads.
    Check(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// RCC build export: a workbook with an `Item` sheet, or CSV, holding
    /// `RefName Path` and `Variable Name`.
    #[arg(value_name = "BUILD")]
    pub build: PathBuf,

    /// MDR repository export: a workbook with a `Data` sheet, or CSV.
    #[arg(value_name = "REPOSITORY")]
    pub repository: PathBuf,
}

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// TOML file with comparison settings; flags below override it.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Text the repository `f_ver` column must contain (default: "Volume 3").
    #[arg(long = "volume", value_name = "TEXT")]
    pub volume: Option<String>,

    /// Restrict repository items to this library (repeatable).
    #[arg(long = "library", value_name = "NAME")]
    pub libraries: Vec<String>,

    /// Delimiter after the form identifier in `RefName Path` (default: " >> ").
    #[arg(long = "delimiter", value_name = "TEXT")]
    pub delimiter: Option<String>,

    /// Also compare conditionally required items.
    #[arg(long = "include-conditional")]
    pub include_conditional: bool,

    /// Report file path (default: timestamped name next to the build export).
    #[arg(long = "output", short = 'o', value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for the timestamped report file.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report file format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Print the summary without writing a report file.
    #[arg(long = "no-export")]
    pub no_export: bool,

    /// Append an empty reviewer column to the CSV report.
    #[arg(
        long = "annotation-column",
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = mdr_output::DEFAULT_ANNOTATION_COLUMN
    )]
    pub annotation_column: Option<String>,

    /// Replace an existing report file.
    #[arg(long = "overwrite")]
    pub overwrite: bool,

    /// Exit with status 2 when any required item is missing.
    #[arg(long = "fail-on-missing")]
    pub fail_on_missing: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
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
