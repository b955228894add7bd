//! Longitude / latitude checks.

use stations_model::{StationRecord, columns};

use super::{RuleContext, each_station};
use crate::issue::Issue;

/// Check coordinate pairing, presence for suggestable stations, and range.
pub fn check(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let bounds = &ctx.config.bounds;

    each_station(&ctx.dataset.records, |station, issues| {
        match (station.longitude(), station.latitude()) {
            (Some(_), None) => issues.push(missing(station, columns::LONGITUDE, columns::LATITUDE)),
            (None, Some(_)) => issues.push(missing(station, columns::LATITUDE, columns::LONGITUDE)),
            (None, None) => {
                if station.is_suggestable() {
                    issues.push(Issue::MissingCoordinates {
                        station: station.id().to_string(),
                    });
                }
            }
            (Some(longitude), Some(latitude)) => {
                issues.extend(check_axis(
                    station,
                    columns::LONGITUDE,
                    longitude,
                    bounds.min_longitude,
                    bounds.max_longitude,
                ));
                issues.extend(check_axis(
                    station,
                    columns::LATITUDE,
                    latitude,
                    bounds.min_latitude,
                    bounds.max_latitude,
                ));
            }
        }
    })
}

fn missing(station: &StationRecord, present: &str, missing: &str) -> Issue {
    Issue::MissingCoordinate {
        station: station.id().to_string(),
        present: present.to_string(),
        missing: missing.to_string(),
    }
}

/// Parse one coordinate and check it lies strictly between `min` and `max`.
fn check_axis(
    station: &StationRecord,
    field: &str,
    raw: &str,
    min: f64,
    max: f64,
) -> Option<Issue> {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return Some(Issue::InvalidCoordinate {
            station: station.id().to_string(),
            field: field.to_string(),
            value: raw.to_string(),
        });
    };

    // NaN fails both comparisons and is reported as out of range
    if min < value && value < max {
        None
    } else {
        Some(Issue::CoordinateOutOfRange {
            station: station.id().to_string(),
            field: field.to_string(),
            value,
            min,
            max,
        })
    }
}
