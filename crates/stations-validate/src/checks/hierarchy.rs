//! Parent / child relationship checks.

use super::{RuleContext, each_station};
use crate::issue::Issue;

/// The parent of a suggestable station must exist and have a name.
pub fn check_parent_reference(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let suggestable = ctx
        .dataset
        .records
        .iter()
        .filter(|station| station.is_suggestable());

    each_station(suggestable, |station, issues| {
        let Some(parent_id) = station.parent_station_id() else {
            return;
        };
        match ctx.index.get(parent_id) {
            None => issues.push(Issue::ParentNotFound {
                station: station.id().to_string(),
                parent: parent_id.to_string(),
            }),
            Some(parent) if parent.name().is_none() => issues.push(Issue::ParentWithoutName {
                station: station.id().to_string(),
                parent: parent_id.to_string(),
            }),
            Some(_) => {}
        }
    })
}

/// A suggestable meta-station must have enough suggestable children.
pub fn check_meta_station(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let minimum = ctx.config.min_meta_station_children;
    let meta_stations = ctx
        .index
        .parents()
        .filter_map(|parent_id| ctx.index.get(parent_id))
        .filter(|parent| parent.is_suggestable());

    each_station(meta_stations, |parent, issues| {
        let count = ctx.index.suggestable_children_count(parent.id());
        if count < minimum {
            issues.push(Issue::TooFewSuggestableChildren {
                station: parent.id().to_string(),
                count,
                minimum,
            });
        }
    })
}
