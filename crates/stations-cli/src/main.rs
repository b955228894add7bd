//! Railway station dataset checker.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use stations_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use stations_cli::commands::{exit_code, list_rules, run_check};
use stations_cli::logging::{LogConfig, LogFormat, init_logging};
use stations_cli::summary::{print_catalog, print_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    if cli.list_rules {
        let code = match list_rules(&cli) {
            Ok(rules) => {
                print_catalog(&rules);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        };
        std::process::exit(code);
    }
    let code = match run_check(&cli) {
        Ok(report) => match print_report(&report, cli.output) {
            Ok(()) => exit_code(&report),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(code);
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
