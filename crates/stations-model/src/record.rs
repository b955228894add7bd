//! A single station row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::{Carrier, Flag, Locale};

/// One row of the station dataset.
///
/// Values are kept as the raw strings found in the file. Empty strings are
/// preserved so that rules can tell "column present but blank" apart from
/// "column missing"; most accessors collapse both into `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    /// 1-based data row number (the header row is not counted).
    pub row: usize,
    /// Header name to raw value.
    pub fields: BTreeMap<String, String>,
    /// Number of values present in the raw row.
    pub field_count: usize,
}

impl StationRecord {
    /// Build a record from header names and row values.
    ///
    /// Values beyond the header length are counted in `field_count` but not
    /// addressable by name; missing trailing values are simply absent.
    pub fn from_row<H, V>(row: usize, header: &[H], values: &[V]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let fields = header
            .iter()
            .zip(values)
            .map(|(name, value)| (name.as_ref().to_string(), value.as_ref().to_string()))
            .collect();
        Self {
            row,
            fields,
            field_count: values.len(),
        }
    }

    /// Raw value of a column, empty strings included.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of a column, `None` when the column is missing or blank.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.raw(name).filter(|value| !value.is_empty())
    }

    pub fn id(&self) -> &str {
        self.raw(columns::ID).unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.value(columns::NAME)
    }

    pub fn slug(&self) -> Option<&str> {
        self.value(columns::SLUG)
    }

    pub fn parent_station_id(&self) -> Option<&str> {
        self.value(columns::PARENT_STATION_ID)
    }

    pub fn uic(&self) -> Option<&str> {
        self.value(columns::UIC)
    }

    pub fn uic8_sncf(&self) -> Option<&str> {
        self.value(columns::UIC8_SNCF)
    }

    pub fn country(&self) -> Option<&str> {
        self.value(columns::COUNTRY)
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.value(columns::TIME_ZONE)
    }

    pub fn longitude(&self) -> Option<&str> {
        self.value(columns::LONGITUDE)
    }

    pub fn latitude(&self) -> Option<&str> {
        self.value(columns::LATITUDE)
    }

    /// Parsed `t`/`f` flag, `None` when blank or not a valid flag.
    pub fn flag(&self, name: &str) -> Option<Flag> {
        self.raw(name).and_then(Flag::parse)
    }

    pub fn is_suggestable(&self) -> bool {
        self.flag(columns::IS_SUGGESTABLE)
            .is_some_and(|flag| flag.is_set())
    }

    pub fn carrier_id(&self, carrier: Carrier) -> Option<&str> {
        self.value(&carrier.id_field())
    }

    pub fn carrier_enabled(&self, carrier: Carrier) -> bool {
        self.flag(&carrier.enabled_field())
            .is_some_and(|flag| flag.is_set())
    }

    /// True when any of the given carriers is enabled for this station.
    pub fn has_enabled_carrier(&self, carriers: &[Carrier]) -> bool {
        carriers
            .iter()
            .any(|carrier| self.carrier_enabled(*carrier))
    }

    pub fn info(&self, locale: Locale) -> Option<&str> {
        self.value(&locale.info_field())
    }
}
