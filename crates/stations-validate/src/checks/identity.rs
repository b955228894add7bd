//! Station id and UIC checks.

use std::collections::HashMap;

use super::{RuleContext, each_station};
use crate::issue::Issue;

/// Check that no two stations share an id.
pub fn check_unique_ids(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let mut first_row: HashMap<&str, usize> = HashMap::new();

    each_station(&ctx.dataset.records, |station, issues| {
        let id = station.id();
        if id.is_empty() {
            return;
        }
        match first_row.get(id) {
            Some(first) => issues.push(Issue::DuplicateId {
                station: id.to_string(),
                row: station.row,
                first_row: *first,
            }),
            None => {
                first_row.insert(id, station.row);
            }
        }
    })
}

/// Report UIC codes shared by several stations.
///
/// Severity follows [`ValidationConfig::duplicate_uic`](crate::ValidationConfig::duplicate_uic).
pub fn check_duplicate_uic(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let fatal = ctx.config.duplicate_uic.is_fatal();
    let mut first_station: HashMap<&str, &str> = HashMap::new();

    let issues = each_station(&ctx.dataset.records, |station, issues| {
        let Some(uic) = station.uic() else {
            return;
        };
        match first_station.get(uic) {
            Some(first) => issues.push(Issue::DuplicateUic {
                station: station.id().to_string(),
                uic: uic.to_string(),
                first_station: (*first).to_string(),
                fatal,
            }),
            None => {
                first_station.insert(uic, station.id());
            }
        }
    });

    if !issues.is_empty() {
        tracing::info!(
            duplicates = issues.len(),
            policy = %ctx.config.duplicate_uic,
            "duplicate UIC codes found"
        );
    }
    issues
}

/// Ordering key of an all-digit id: significant digits, shortest first.
///
/// Compares like the integer value without any width limit. `None` for
/// anything that is not a plain unsigned integer.
fn numeric_key(id: &str) -> Option<(usize, &str)> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = id.trim_start_matches('0');
    Some((digits.len(), digits))
}

/// Check that ids, read as integers, never decrease from one row to the next.
pub fn check_sort_order(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let mut previous: Option<((usize, &str), &str)> = None;

    each_station(&ctx.dataset.records, |station, issues| {
        let id = station.id();
        let Some(key) = numeric_key(id) else {
            issues.push(Issue::NonNumericId {
                station: id.to_string(),
                row: station.row,
            });
            return;
        };
        if let Some((previous_key, previous_id)) = previous
            && key < previous_key
        {
            issues.push(Issue::UnsortedId {
                station: id.to_string(),
                previous: previous_id.to_string(),
            });
        }
        previous = Some((key, id));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_key_orders_like_integers() {
        assert!(numeric_key("9") < numeric_key("10"));
        assert_eq!(numeric_key("007"), numeric_key("7"));
        assert!(numeric_key("0") < numeric_key("1"));
        assert!(numeric_key("99999999999999999999") < numeric_key("100000000000000000000"));
        assert_eq!(numeric_key(""), None);
        assert_eq!(numeric_key("-3"), None);
        assert_eq!(numeric_key("12a"), None);
    }
}
