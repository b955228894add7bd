//! Per-carrier enable flag and identifier checks.

use std::collections::HashMap;

use stations_model::{Carrier, Flag};

use super::{RuleContext, each_station};
use crate::issue::Issue;

/// Check one carrier's columns across the dataset.
///
/// - `<carrier>_is_enabled` is `t` or `f`
/// - an enabled carrier has an id, of the fixed length when one is configured
/// - non-empty ids are unique, enabled or not
pub fn check(ctx: &RuleContext<'_>, carrier: Carrier) -> Vec<Issue> {
    let enabled_field = carrier.enabled_field();
    let id_length = ctx.config.carrier_id_length(carrier);
    let mut first_station: HashMap<&str, &str> = HashMap::new();

    each_station(&ctx.dataset.records, |station, issues| {
        let raw_flag = station.raw(&enabled_field).unwrap_or_default();
        let flag = Flag::parse(raw_flag);
        if flag.is_none() {
            issues.push(Issue::InvalidFlag {
                station: station.id().to_string(),
                field: enabled_field.clone(),
                value: raw_flag.to_string(),
            });
        }

        let carrier_id = station.carrier_id(carrier);
        if flag == Some(Flag::True) {
            match carrier_id {
                None => issues.push(Issue::MissingCarrierId {
                    station: station.id().to_string(),
                    carrier,
                }),
                Some(id) => {
                    if let Some(expected) = id_length
                        && id.chars().count() != expected
                    {
                        issues.push(Issue::CarrierIdLength {
                            station: station.id().to_string(),
                            carrier,
                            carrier_id: id.to_string(),
                            expected,
                        });
                    }
                }
            }
        }

        let Some(id) = carrier_id else {
            return;
        };
        match first_station.get(id) {
            Some(first) => issues.push(Issue::DuplicateCarrierId {
                station: station.id().to_string(),
                carrier,
                carrier_id: id.to_string(),
                first_station: (*first).to_string(),
            }),
            None => {
                first_station.insert(id, station.id());
            }
        }
    })
}
