//! End-to-end runs of the checker against files on disk.

use std::io::Write;
use std::path::Path;

use clap::Parser;
use tempfile::NamedTempFile;

use stations_cli::cli::{Cli, OutputArg};
use stations_cli::commands::{exit_code, list_rules, load_config, run_check};
use stations_model::{Carrier, STANDARD_COLUMNS};
use stations_validate::{CountryMatch, DuplicatePolicy, RuleId};

/// Build a row from `(column, value)` pairs over a valid plain station.
fn row(id: &str, overrides: &[(&str, &str)]) -> String {
    STANDARD_COLUMNS
        .iter()
        .map(|column| {
            if let Some((_, value)) = overrides.iter().find(|(name, _)| name == column) {
                return (*value).to_string();
            }
            match *column {
                "id" => id.to_string(),
                "name" => format!("Station {id}"),
                "longitude" => "2.35".to_string(),
                "latitude" => "48.85".to_string(),
                "country" => "FR".to_string(),
                "time_zone" => "Europe/Paris".to_string(),
                name if name.starts_with("is_") || name.ends_with("_is_enabled") => {
                    "f".to_string()
                }
                _ => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn write_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "{}", STANDARD_COLUMNS.join(";")).expect("write header");
    for line in lines {
        writeln!(file, "{line}").expect("write row");
    }
    file
}

fn cli(path: &Path, flags: &[&str]) -> Cli {
    let mut args = vec!["stations-check".to_string(), path.display().to_string()];
    args.extend(flags.iter().map(|flag| (*flag).to_string()));
    Cli::parse_from(args)
}

fn shared_uic() -> NamedTempFile {
    write_file(&[
        row("1", &[("uic", "8727100")]),
        row("2", &[("uic", "8727100")]),
    ])
}

#[test]
fn defaults() {
    let parsed = Cli::parse_from(["stations-check"]);
    assert_eq!(parsed.path, Path::new("stations.csv"));
    assert_eq!(parsed.output, OutputArg::Table);
    assert!(!parsed.parallel);
    assert!(parsed.config.is_none());
}

#[test]
fn clean_file_exits_zero() {
    let file = write_file(&[row("1", &[]), row("2", &[])]);
    let report = run_check(&cli(file.path(), &[])).expect("run check");
    assert!(report.is_success());
    assert_eq!(exit_code(&report), 0);
}

#[test]
fn duplicate_uic_exit_code_follows_flag() {
    let file = shared_uic();

    let report = run_check(&cli(file.path(), &[])).expect("run check");
    assert_eq!(report.warning_count(), 1);
    assert_eq!(exit_code(&report), 0);

    let report =
        run_check(&cli(file.path(), &["--fail-on-duplicate-uic", "--parallel"])).expect("run");
    assert_eq!(report.error_count(), 1);
    assert_eq!(exit_code(&report), 1);
}

#[test]
fn flags_override_config_file() {
    let mut config = NamedTempFile::new().expect("create temp file");
    config
        .write_all(br#"{"min_meta_station_children": 3}"#)
        .expect("write config");
    let path = config.path().display().to_string();

    let parsed = cli(
        Path::new("stations.csv"),
        &["--config", &path, "--exact-country", "--fail-on-duplicate-uic"],
    );
    let loaded = load_config(&parsed).expect("load config");
    assert_eq!(loaded.min_meta_station_children, 3);
    assert_eq!(loaded.country_match, CountryMatch::Exact);
    assert_eq!(loaded.duplicate_uic, DuplicatePolicy::Fail);
}

#[test]
fn missing_station_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = run_check(&cli(&dir.path().join("missing.csv"), &[]))
        .expect_err("missing file");
    assert!(format!("{error:#}").contains("load station file"));
}

#[test]
fn broken_config_is_an_error() {
    let mut config = NamedTempFile::new().expect("create temp file");
    config.write_all(b"{ nope").expect("write config");
    let path = config.path().display().to_string();
    let file = shared_uic();

    let error = run_check(&cli(file.path(), &["--config", &path])).expect_err("bad config");
    assert!(format!("{error:#}").contains("load config"));
}

#[test]
fn rule_listing_follows_configured_carriers() {
    let mut config = NamedTempFile::new().expect("create temp file");
    config
        .write_all(br#"{"carriers": [{"carrier": "sncf", "id_length": 5}]}"#)
        .expect("write config");
    let path = config.path().display().to_string();

    let parsed = cli(Path::new("stations.csv"), &["--list-rules", "--config", &path]);
    assert!(parsed.list_rules);
    let rules = list_rules(&parsed).expect("list rules");
    assert_eq!(rules.len(), 19);
    assert_eq!(rules[2], RuleId::Carrier(Carrier::Sncf));
    assert_eq!(rules.last(), Some(&RuleId::Uic8Sncf));
}
