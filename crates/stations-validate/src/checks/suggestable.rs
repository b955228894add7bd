//! Checks that only apply to suggestable stations.

use std::collections::HashMap;

use stations_model::StationRecord;

use super::{RuleContext, each_station};
use crate::issue::Issue;
use crate::slug::normalize;

fn suggestable<'a>(ctx: &RuleContext<'a>) -> impl Iterator<Item = &'a StationRecord> {
    ctx.dataset
        .records
        .iter()
        .filter(|station| station.is_suggestable())
}

/// Suggestable stations must have a name.
pub fn check_name_present(ctx: &RuleContext<'_>) -> Vec<Issue> {
    each_station(suggestable(ctx), |station, issues| {
        if station.name().is_none() {
            issues.push(Issue::MissingName {
                station: station.id().to_string(),
            });
        }
    })
}

/// Names of suggestable stations must be distinct.
pub fn check_unique_names(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let mut first_station: HashMap<&str, &str> = HashMap::new();

    each_station(suggestable(ctx), |station, issues| {
        let Some(name) = station.name() else {
            return;
        };
        match first_station.get(name) {
            Some(first) => issues.push(Issue::DuplicateName {
                station: station.id().to_string(),
                name: name.to_string(),
                first_station: (*first).to_string(),
            }),
            None => {
                first_station.insert(name, station.id());
            }
        }
    })
}

/// Localized info of a suggestable station must not repeat its name.
pub fn check_info_differs(ctx: &RuleContext<'_>) -> Vec<Issue> {
    each_station(suggestable(ctx), |station, issues| {
        let Some(name) = station.name() else {
            return;
        };
        for locale in &ctx.config.locales {
            if station.info(*locale) == Some(name) {
                issues.push(Issue::InfoEqualsName {
                    station: station.id().to_string(),
                    locale: *locale,
                });
            }
        }
    })
}

/// A suggestable station needs an enabled carrier, on itself or on one of
/// its direct children.
pub fn check_carrier(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let carriers = ctx.config.carrier_list();

    each_station(suggestable(ctx), |station, issues| {
        let served = station.has_enabled_carrier(&carriers)
            || ctx
                .index
                .children(station.id())
                .iter()
                .any(|child| child.has_enabled_carrier(&carriers));
        if !served {
            issues.push(Issue::NoEnabledCarrier {
                station: station.id().to_string(),
            });
        }
    })
}

/// Suggestable slugs must equal the normalized name and be unique.
pub fn check_slug(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let mut first_station: HashMap<&str, &str> = HashMap::new();

    each_station(suggestable(ctx), |station, issues| {
        // Without a name there is nothing to derive; the name rule reports it
        if let Some(name) = station.name() {
            let expected = normalize(name);
            if station.slug() != Some(expected.as_str()) {
                issues.push(Issue::SlugMismatch {
                    station: station.id().to_string(),
                    slug: station.slug().map(str::to_string),
                    expected,
                });
            }
        }

        let Some(slug) = station.slug() else {
            return;
        };
        match first_station.get(slug) {
            Some(first) => issues.push(Issue::DuplicateSlug {
                station: station.id().to_string(),
                slug: slug.to_string(),
                first_station: (*first).to_string(),
            }),
            None => {
                first_station.insert(slug, station.id());
            }
        }
    })
}
