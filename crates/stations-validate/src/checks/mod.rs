//! Validation check modules.
//!
//! Each module implements a group of related rules. Every check is a pure
//! function of the [`RuleContext`] and returns all violations it finds.
//! Per-station work goes through [`each_station`], so a station that trips a
//! bug is reported on its own and the rule moves on to the next one.

mod attributes;
mod carrier;
mod coordinates;
mod hierarchy;
mod identity;
mod linkage;
mod structure;
mod suggestable;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use stations_model::{Dataset, StationRecord};

use crate::config::ValidationConfig;
use crate::index::StationIndex;
use crate::issue::Issue;
use crate::rules::RuleId;

/// Shared read-only input of every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub dataset: &'a Dataset,
    pub index: &'a StationIndex<'a>,
    pub config: &'a ValidationConfig,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        dataset: &'a Dataset,
        index: &'a StationIndex<'a>,
        config: &'a ValidationConfig,
    ) -> Self {
        Self {
            dataset,
            index,
            config,
        }
    }
}

/// Run a single rule.
pub fn check(rule: RuleId, ctx: &RuleContext<'_>) -> Vec<Issue> {
    match rule {
        RuleId::Header => structure::check_header(ctx),
        RuleId::FieldCount => structure::check_field_count(ctx),
        RuleId::Carrier(carrier) => carrier::check(ctx, carrier),
        RuleId::UniqueId => identity::check_unique_ids(ctx),
        RuleId::DuplicateUic => identity::check_duplicate_uic(ctx),
        RuleId::Coordinates => coordinates::check(ctx),
        RuleId::SortOrder => identity::check_sort_order(ctx),
        RuleId::Flags => attributes::check_flags(ctx),
        RuleId::Country => attributes::check_country(ctx),
        RuleId::TimeZone => attributes::check_time_zone(ctx),
        RuleId::SuggestableName => suggestable::check_name_present(ctx),
        RuleId::UniqueSuggestableName => suggestable::check_unique_names(ctx),
        RuleId::InfoDiffersFromName => suggestable::check_info_differs(ctx),
        RuleId::SuggestableCarrier => suggestable::check_carrier(ctx),
        RuleId::IdtgvSncfLink => linkage::check_idtgv_sncf(ctx),
        RuleId::ParentReference => hierarchy::check_parent_reference(ctx),
        RuleId::Slug => suggestable::check_slug(ctx),
        RuleId::MetaStation => hierarchy::check_meta_station(ctx),
        RuleId::Uic8Sncf => linkage::check_uic8_sncf(ctx),
    }
}

/// Run `body` once per station, collecting the issues it pushes.
///
/// A panic inside `body` becomes an [`Issue::StationAborted`] for that
/// station; issues it pushed before panicking are kept.
pub(crate) fn each_station<'a, I, F>(stations: I, mut body: F) -> Vec<Issue>
where
    I: IntoIterator<Item = &'a StationRecord>,
    F: FnMut(&'a StationRecord, &mut Vec<Issue>),
{
    let mut issues = Vec::new();
    for station in stations {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(station, &mut issues)));
        if let Err(payload) = outcome {
            let message = panic_message(payload.as_ref());
            tracing::error!(station = station.id(), %message, "station check aborted");
            issues.push(Issue::StationAborted {
                station: station.id().to_string(),
                message,
            });
        }
    }
    issues
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
