use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use stations_validate::{Category, Issue, RuleId, RuleReport, Severity, ValidationReport};

use crate::cli::OutputArg;

pub fn print_report(report: &ValidationReport, output: OutputArg) -> Result<()> {
    match output {
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize report")?;
            println!("{json}");
        }
        OutputArg::Table => {
            println!("{}", rule_table(report));
            if let Some(table) = issue_table(report) {
                println!();
                println!("Issues:");
                println!("{table}");
            }
            println!("{}", verdict(report));
        }
    }
    Ok(())
}

pub fn print_catalog(rules: &[RuleId]) {
    println!("{}", catalog_table(rules));
    println!();
    println!("Categories:");
    println!("{}", category_table());
}

/// One row per rule: code, name, category and what it asserts.
pub fn catalog_table(rules: &[RuleId]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Description"),
    ]);
    apply_summary_table_style(&mut table);
    for rule in rules {
        table.add_row(vec![
            dim_cell(rule.code()),
            Cell::new(rule.label()),
            Cell::new(rule.category().label()),
            Cell::new(rule.description()),
        ]);
    }
    table
}

fn category_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Covers")]);
    apply_summary_table_style(&mut table);
    for category in Category::all() {
        table.add_row(vec![
            Cell::new(category.label()),
            Cell::new(category.description()),
        ]);
    }
    table
}

/// One row per rule with its status and counts.
pub fn rule_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Status"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for rule in &report.rules {
        table.add_row(vec![
            Cell::new(rule.rule.label()),
            Cell::new(rule.rule.category().label()),
            status_cell(rule),
            count_cell(rule.error_count(), Color::Red),
            count_cell(rule.warning_count(), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} records", report.records)).fg(Color::Cyan),
        dim_cell("-"),
        count_cell(report.error_count(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(report.warning_count(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
}

/// One row per issue, errors first; `None` when the run found nothing.
pub fn issue_table(report: &ValidationReport) -> Option<Table> {
    let mut issues: Vec<(RuleId, &Issue)> = report.issues().collect();
    if issues.is_empty() {
        return None;
    }
    issues.sort_by_key(|(_, issue)| severity_rank(issue.severity()));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Station"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for (rule, issue) in issues {
        table.add_row(vec![
            Cell::new(rule.code()),
            severity_cell(issue.severity()),
            Cell::new(issue.category().label()),
            match issue.station_id() {
                Some(station) => Cell::new(station),
                None => dim_cell("-"),
            },
            Cell::new(issue.message()),
        ]);
    }
    Some(table)
}

/// Closing line of the table output.
pub fn verdict(report: &ValidationReport) -> String {
    let failed = report.failed_rules().count();
    let counts = format!(
        "{} errors, {} warnings",
        report.error_count(),
        report.warning_count()
    );
    if failed == 0 {
        format!("PASSED: {} rules ({counts})", report.rules.len())
    } else {
        format!(
            "FAILED: {failed} of {} rules ({counts})",
            report.rules.len()
        )
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(26)),
        ColumnConstraint::UpperBoundary(Width::Fixed(9)),
        ColumnConstraint::UpperBoundary(Width::Fixed(16)),
        ColumnConstraint::UpperBoundary(Width::Fixed(12)),
        ColumnConstraint::UpperBoundary(Width::Percentage(60)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(rule: &RuleReport) -> Cell {
    if !rule.passed() {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else if rule.warning_count() > 0 {
        Cell::new("WARN").fg(Color::Yellow)
    } else {
        Cell::new("PASS").fg(Color::Green)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    };
    Cell::new(severity.label()).fg(color)
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(issues: Vec<Issue>) -> ValidationReport {
        ValidationReport {
            records: 3,
            rules: vec![
                RuleReport::new(RuleId::UniqueId, vec![]),
                RuleReport::new(RuleId::DuplicateUic, issues),
            ],
        }
    }

    fn duplicate_uic(fatal: bool) -> Issue {
        Issue::DuplicateUic {
            station: "3".to_string(),
            uic: "8727100".to_string(),
            first_station: "1".to_string(),
            fatal,
        }
    }

    #[test]
    fn test_verdict() {
        insta::assert_snapshot!(verdict(&report(vec![])), @"PASSED: 2 rules (0 errors, 0 warnings)");
        insta::assert_snapshot!(
            verdict(&report(vec![duplicate_uic(false)])),
            @"PASSED: 2 rules (0 errors, 1 warnings)"
        );
        insta::assert_snapshot!(
            verdict(&report(vec![duplicate_uic(true)])),
            @"FAILED: 1 of 2 rules (1 errors, 0 warnings)"
        );
    }

    #[test]
    fn test_rule_table_has_total_row() {
        let table = rule_table(&report(vec![]));
        assert_eq!(table.row_iter().count(), 3);
    }

    #[test]
    fn test_issue_table_puts_errors_first() {
        assert!(issue_table(&report(vec![])).is_none());

        let mut mixed = report(vec![duplicate_uic(false)]);
        mixed.rules.push(RuleReport::new(
            RuleId::TimeZone,
            vec![Issue::MissingTimeZone {
                station: "2".to_string(),
            }],
        ));
        let table = issue_table(&mixed).expect("issue table");
        let first: Vec<String> = table
            .row_iter()
            .next()
            .expect("first row")
            .cell_iter()
            .map(Cell::content)
            .collect();
        assert_eq!(first[0], "time-zone");
        assert_eq!(first[1], "Error");
        assert_eq!(first[2], "Presence");
        assert_eq!(first[3], "2");
    }

    #[test]
    fn test_rule_table_uses_labels() {
        let table = rule_table(&report(vec![]));
        let names: Vec<String> = table
            .row_iter()
            .filter_map(|row| row.cell_iter().next().map(Cell::content))
            .collect();
        assert_eq!(names, vec!["Unique ids", "Duplicate UIC", "TOTAL"]);
    }

    #[test]
    fn test_catalog_table() {
        let rules = [RuleId::Header, RuleId::Uic8Sncf];
        let table = catalog_table(&rules);
        let rows: Vec<Vec<String>> = table
            .row_iter()
            .map(|row| row.cell_iter().map(Cell::content).collect())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "uic8-sncf");
        assert_eq!(rows[1][1], "uic8_sncf coherence");
        assert_eq!(rows[1][2], "Consistency");
        assert_eq!(rows[1][3], RuleId::Uic8Sncf.description());
        assert_eq!(category_table().row_iter().count(), Category::all().len());
    }
}
