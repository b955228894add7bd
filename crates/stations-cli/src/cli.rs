//! CLI argument definitions for the station checker.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stations-check",
    version,
    about = "Check the railway station dataset for integrity errors",
    long_about = "Check the railway station dataset for integrity errors.\n\n\
                  Loads a ;-delimited station file, evaluates every rule of the\n\
                  catalog and exits non-zero when a fatal issue is found."
)]
pub struct Cli {
    /// Path to the station file.
    #[arg(value_name = "PATH", default_value = "stations.csv")]
    pub path: PathBuf,

    /// JSON file overriding the default validation configuration.
    #[arg(long = "config", value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Treat duplicate UIC codes as errors instead of warnings.
    #[arg(long = "fail-on-duplicate-uic")]
    pub fail_on_duplicate_uic: bool,

    /// Require countries to be exactly two uppercase letters.
    #[arg(long = "exact-country")]
    pub exact_country: bool,

    /// Print the rule catalog for the configuration and exit.
    #[arg(long = "list-rules")]
    pub list_rules: bool,

    /// Evaluate rules on parallel threads.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Report format written to stdout.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
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
