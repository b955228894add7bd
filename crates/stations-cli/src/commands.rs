use anyhow::{Context, Result};
use tracing::info_span;

use stations_model::Dataset;
use stations_validate::{
    CountryMatch, DuplicatePolicy, RuleEngine, RuleId, ValidationConfig, ValidationReport,
};

use crate::cli::Cli;

/// Load the configuration file, if any, then apply the CLI overrides.
pub fn load_config(cli: &Cli) -> Result<ValidationConfig> {
    let mut config = match &cli.config {
        Some(path) => ValidationConfig::from_json_path(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ValidationConfig::default(),
    };
    if cli.fail_on_duplicate_uic {
        config = config.with_duplicate_uic(DuplicatePolicy::Fail);
    }
    if cli.exact_country {
        config = config.with_country_match(CountryMatch::Exact);
    }
    Ok(config)
}

pub fn load_dataset(cli: &Cli) -> Result<Dataset> {
    stations_ingest::read_stations(&cli.path)
        .with_context(|| format!("load station file {}", cli.path.display()))
}

/// Load the dataset and evaluate every rule.
pub fn run_check(cli: &Cli) -> Result<ValidationReport> {
    let span = info_span!("check", path = %cli.path.display());
    let _guard = span.enter();

    let config = load_config(cli)?;
    let dataset = load_dataset(cli)?;
    let engine = RuleEngine::new(config);
    let report = if cli.parallel {
        engine.run_parallel(&dataset)
    } else {
        engine.run(&dataset)
    };
    Ok(report)
}

/// Rules a run with these flags would evaluate, in catalog order.
pub fn list_rules(cli: &Cli) -> Result<Vec<RuleId>> {
    let config = load_config(cli)?;
    Ok(RuleId::catalog(&config))
}

/// Process exit code for a finished run.
pub fn exit_code(report: &ValidationReport) -> i32 {
    if report.is_success() { 0 } else { 1 }
}
