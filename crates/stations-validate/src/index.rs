//! Lookup structures shared by every rule.

use std::collections::BTreeMap;

use stations_model::StationRecord;

/// Read-only index over the records of a dataset.
///
/// Built once per run. Duplicate ids keep their first occurrence so that
/// parent lookups stay usable; the duplication itself is reported by the
/// unique-id rule.
#[derive(Debug, Default)]
pub struct StationIndex<'a> {
    by_id: BTreeMap<&'a str, &'a StationRecord>,
    children_of: BTreeMap<&'a str, Vec<&'a StationRecord>>,
    suggestable_children: BTreeMap<&'a str, usize>,
}

impl<'a> StationIndex<'a> {
    pub fn build(records: &'a [StationRecord]) -> Self {
        let mut index = Self::default();

        for record in records {
            let id = record.id();
            if !id.is_empty() {
                index.by_id.entry(id).or_insert(record);
            }

            let Some(parent) = record.parent_station_id() else {
                continue;
            };
            index.children_of.entry(parent).or_default().push(record);
            let count = index.suggestable_children.entry(parent).or_insert(0);
            if record.is_suggestable() {
                *count += 1;
            }
        }

        tracing::debug!(
            stations = index.by_id.len(),
            parents = index.children_of.len(),
            "built station index"
        );
        index
    }

    /// First record carrying `id`.
    pub fn get(&self, id: &str) -> Option<&'a StationRecord> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Records whose `parent_station_id` is `id`, in dataset order.
    pub fn children(&self, id: &str) -> &[&'a StationRecord] {
        self.children_of.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of suggestable records whose parent is `id`.
    pub fn suggestable_children_count(&self, id: &str) -> usize {
        self.suggestable_children.get(id).copied().unwrap_or(0)
    }

    /// Ids referenced as a parent by at least one record, ascending.
    ///
    /// The referenced id may not exist in the dataset.
    pub fn parents(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.children_of.keys().copied()
    }

    /// Number of distinct non-empty ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stations_model::Dataset;

    fn dataset(rows: &[[&str; 4]]) -> Dataset {
        let rows: Vec<Vec<&str>> = rows.iter().map(|row| row.to_vec()).collect();
        Dataset::from_rows(&["id", "name", "parent_station_id", "is_suggestable"], &rows)
    }

    #[test]
    fn aggregates_children() {
        let data = dataset(&[
            ["100", "Paris", "", "t"],
            ["101", "Paris Nord", "100", "t"],
            ["102", "Paris Est", "100", "f"],
            ["103", "Paris Lyon", "100", "t"],
            ["200", "Lyon", "", "t"],
        ]);
        let index = StationIndex::build(&data.records);

        assert_eq!(index.len(), 5);
        let children: Vec<&str> = index.children("100").iter().map(|r| r.id()).collect();
        assert_eq!(children, vec!["101", "102", "103"]);
        assert_eq!(index.suggestable_children_count("100"), 2);
        assert_eq!(index.suggestable_children_count("200"), 0);
        assert!(index.children("200").is_empty());
        assert_eq!(index.parents().collect::<Vec<_>>(), vec!["100"]);
    }

    #[test]
    fn first_duplicate_wins() {
        let data = dataset(&[["1", "First", "", "t"], ["1", "Second", "", "t"]]);
        let index = StationIndex::build(&data.records);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("1").and_then(|r| r.name()), Some("First"));
    }

    #[test]
    fn dangling_parent_is_still_listed() {
        let data = dataset(&[["5", "Orphan", "999", "t"]]);
        let index = StationIndex::build(&data.records);

        assert!(!index.contains("999"));
        assert_eq!(index.parents().collect::<Vec<_>>(), vec!["999"]);
        assert_eq!(index.suggestable_children_count("999"), 1);
    }

    #[test]
    fn blank_ids_are_not_indexed() {
        let data = dataset(&[["", "Nameless", "", "f"]]);
        let index = StationIndex::build(&data.records);
        assert!(index.is_empty());
    }
}
