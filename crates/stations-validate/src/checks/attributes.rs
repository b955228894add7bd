//! Flag, country and time zone checks.

use std::sync::LazyLock;

use regex::Regex;
use stations_model::Flag;

use super::{RuleContext, each_station};
use crate::config::CountryMatch;
use crate::issue::Issue;

/// Two uppercase letters at the start of the value.
static COUNTRY_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}").expect("Invalid country prefix regex"));

/// Exactly two uppercase letters.
static COUNTRY_EXACT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("Invalid country regex"));

/// Check that every configured flag column holds `t` or `f`.
pub fn check_flags(ctx: &RuleContext<'_>) -> Vec<Issue> {
    each_station(&ctx.dataset.records, |station, issues| {
        for field in &ctx.config.flag_fields {
            let value = station.raw(field).unwrap_or_default();
            if Flag::parse(value).is_none() {
                issues.push(Issue::InvalidFlag {
                    station: station.id().to_string(),
                    field: field.clone(),
                    value: value.to_string(),
                });
            }
        }
    })
}

/// Check the country code of every station.
pub fn check_country(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let pattern: &Regex = match ctx.config.country_match {
        CountryMatch::Prefix => &*COUNTRY_PREFIX_REGEX,
        CountryMatch::Exact => &*COUNTRY_EXACT_REGEX,
    };

    each_station(&ctx.dataset.records, |station, issues| {
        let value = station.country().unwrap_or_default();
        if !pattern.is_match(value) {
            issues.push(Issue::InvalidCountry {
                station: station.id().to_string(),
                value: value.to_string(),
            });
        }
    })
}

/// Check that every station has a time zone.
pub fn check_time_zone(ctx: &RuleContext<'_>) -> Vec<Issue> {
    each_station(&ctx.dataset.records, |station, issues| {
        if station.time_zone().is_none_or(|tz| tz.trim().is_empty()) {
            issues.push(Issue::MissingTimeZone {
                station: station.id().to_string(),
            });
        }
    })
}
