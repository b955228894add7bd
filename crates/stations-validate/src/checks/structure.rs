//! Header and row arity checks.

use std::collections::BTreeSet;

use super::{RuleContext, each_station};
use crate::issue::Issue;

/// Check the header arity and that every referenced column is present once.
pub fn check_header(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let header = &ctx.dataset.header;
    let mut issues = Vec::new();

    if header.len() != ctx.config.column_count {
        issues.push(Issue::HeaderArity {
            found: header.len(),
            expected: ctx.config.column_count,
        });
    }

    let mut seen = BTreeSet::new();
    for (idx, column) in header.iter().enumerate() {
        if column.trim().is_empty() {
            issues.push(Issue::HeaderColumnEmpty { position: idx + 1 });
        } else if !seen.insert(column.as_str()) {
            issues.push(Issue::HeaderColumnDuplicated {
                column: column.clone(),
            });
        }
    }

    for column in ctx.config.referenced_columns() {
        if !seen.contains(column.as_str()) {
            issues.push(Issue::HeaderColumnMissing { column });
        }
    }

    issues
}

/// Check that every row has exactly the configured number of fields.
pub fn check_field_count(ctx: &RuleContext<'_>) -> Vec<Issue> {
    let expected = ctx.config.column_count;
    each_station(&ctx.dataset.records, |station, issues| {
        if station.field_count != expected {
            issues.push(Issue::FieldCount {
                station: station.id().to_string(),
                row: station.row,
                found: station.field_count,
                expected,
            });
        }
    })
}
