//! Row builders shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use stations_model::{Carrier, Dataset, STANDARD_COLUMNS};
use stations_validate::slug::normalize;
use stations_validate::{Issue, RuleEngine, RuleId, ValidationConfig};

/// One dataset row, defaulting to a valid non-suggestable station.
#[derive(Debug, Clone)]
pub struct Row {
    values: BTreeMap<String, String>,
}

impl Row {
    pub fn new(id: &str) -> Self {
        let mut values: BTreeMap<String, String> = STANDARD_COLUMNS
            .iter()
            .map(|column| ((*column).to_string(), String::new()))
            .collect();
        for column in STANDARD_COLUMNS.iter().filter(|c| c.starts_with("is_")) {
            values.insert((*column).to_string(), "f".to_string());
        }
        for carrier in Carrier::all() {
            values.insert(carrier.enabled_field(), "f".to_string());
        }
        Self { values }
            .set("id", id)
            .set("name", &format!("Station {id}"))
            .set("longitude", "2.35")
            .set("latitude", "48.85")
            .set("country", "FR")
            .set("time_zone", "Europe/Paris")
    }

    /// A suggestable station with a matching slug and db enabled.
    pub fn suggestable(id: &str, name: &str) -> Self {
        Self::new(id)
            .set("name", name)
            .set("slug", &normalize(name))
            .set("is_suggestable", "t")
            .enable(Carrier::Db, &format!("db{id}"))
    }

    pub fn set(mut self, column: &str, value: &str) -> Self {
        self.values.insert(column.to_string(), value.to_string());
        self
    }

    pub fn enable(self, carrier: Carrier, id: &str) -> Self {
        self.set(&carrier.enabled_field(), "t")
            .set(&carrier.id_field(), id)
    }

    pub fn disable(self, carrier: Carrier) -> Self {
        self.set(&carrier.enabled_field(), "f")
            .set(&carrier.id_field(), "")
    }

    pub fn child_of(self, parent: &str) -> Self {
        self.set("parent_station_id", parent)
    }

    fn values(&self) -> Vec<String> {
        STANDARD_COLUMNS
            .iter()
            .map(|column| self.values.get(*column).cloned().unwrap_or_default())
            .collect()
    }

    /// The row as a line of the station file.
    pub fn line(&self) -> String {
        self.values().join(";")
    }
}

/// Station file text with the standard header.
pub fn file_text(rows: &[Row]) -> String {
    let mut text = STANDARD_COLUMNS.join(";");
    for row in rows {
        text.push('\n');
        text.push_str(&row.line());
    }
    text.push('\n');
    text
}

pub fn dataset(rows: &[Row]) -> Dataset {
    let rows: Vec<Vec<String>> = rows.iter().map(Row::values).collect();
    Dataset::from_rows(&STANDARD_COLUMNS, &rows)
}

/// A small dataset every rule accepts: one plain station and a meta-station
/// with two suggestable children.
pub fn clean_rows() -> Vec<Row> {
    vec![
        Row::new("1"),
        Row::suggestable("100", "Paris"),
        Row::suggestable("101", "Paris Nord").child_of("100"),
        Row::suggestable("102", "Paris Est").child_of("100"),
    ]
}

pub fn run_rule(rule: RuleId, rows: &[Row]) -> Vec<Issue> {
    run_rule_with(ValidationConfig::default(), rule, rows)
}

pub fn run_rule_with(config: ValidationConfig, rule: RuleId, rows: &[Row]) -> Vec<Issue> {
    RuleEngine::new(config).run_rule(rule, &dataset(rows))
}
