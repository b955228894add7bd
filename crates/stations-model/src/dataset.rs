//! Loaded dataset snapshot.

use serde::{Deserialize, Serialize};

use crate::StationRecord;

/// Header row plus every station record, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub header: Vec<String>,
    pub records: Vec<StationRecord>,
}

impl Dataset {
    pub fn new(header: Vec<String>, records: Vec<StationRecord>) -> Self {
        Self { header, records }
    }

    /// Build a dataset from header names and raw rows, numbering rows from 1.
    pub fn from_rows<H, V>(header: &[H], rows: &[Vec<V>]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let records = rows
            .iter()
            .enumerate()
            .map(|(idx, values)| StationRecord::from_row(idx + 1, header, values))
            .collect();
        Self {
            header: header.iter().map(|name| name.as_ref().to_string()).collect(),
            records,
        }
    }

    /// Number of columns declared by the header.
    pub fn header_arity(&self) -> usize {
        self.header.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
