//! Identifiers derived from other identifiers of the same station.

use stations_model::Carrier;

use super::{RuleContext, each_station};
use crate::issue::Issue;

/// Char offsets of the idtgv id inside the sncf id.
const IDTGV_OFFSET: usize = 2;
const IDTGV_MAX_LEN: usize = 4;

/// Part of an sncf id an idtgv id must equal. Clamped to the id's length.
pub(crate) fn idtgv_part_of_sncf_id(sncf_id: &str) -> String {
    sncf_id
        .chars()
        .skip(IDTGV_OFFSET)
        .take(IDTGV_MAX_LEN)
        .collect()
}

/// `uic8_sncf` without its trailing check character.
pub(crate) fn uic_of_uic8_sncf(uic8_sncf: &str) -> &str {
    let mut chars = uic8_sncf.chars();
    chars.next_back();
    chars.as_str()
}

/// An enabled idtgv id must match its slice of the sncf id.
pub fn check_idtgv_sncf(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let idtgv_enabled = ctx
        .dataset
        .records
        .iter()
        .filter(|station| station.carrier_enabled(Carrier::Idtgv));

    each_station(idtgv_enabled, |station, issues| {
        let idtgv_id = station.carrier_id(Carrier::Idtgv).unwrap_or_default();
        let expected = idtgv_part_of_sncf_id(station.carrier_id(Carrier::Sncf).unwrap_or_default());
        if idtgv_id != expected {
            issues.push(Issue::IdtgvSncfMismatch {
                station: station.id().to_string(),
                idtgv_id: idtgv_id.to_string(),
                expected,
            });
        }
    })
}

/// `uic` must be `uic8_sncf` minus its last character, unless the station is
/// listed in the configured exceptions.
pub fn check_uic8_sncf(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let exceptions = &ctx.config.uic8_sncf_exceptions;

    each_station(&ctx.dataset.records, |station, issues| {
        let Some(uic8_sncf) = station.uic8_sncf() else {
            return;
        };
        if exceptions.contains(station.id()) {
            return;
        }
        if station.uic() != Some(uic_of_uic8_sncf(uic8_sncf)) {
            issues.push(Issue::Uic8SncfMismatch {
                station: station.id().to_string(),
                uic: station.uic().map(str::to_string),
                uic8_sncf: uic8_sncf.to_string(),
            });
        }
    })
}
