//! Validation configuration.
//!
//! Every table the rules consult (carriers, locales, bounding box, exception
//! ids, policies) lives here and is handed to the
//! [`RuleEngine`](crate::RuleEngine) at construction. The defaults describe
//! the published European dataset; a JSON file may override any field.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stations_model::columns;
use stations_model::{Carrier, Locale, STANDARD_COLUMNS};

use crate::error::{ConfigError, Result};

/// Fixed id length for a carrier, `None` when unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRule {
    pub carrier: Carrier,
    #[serde(default)]
    pub id_length: Option<usize>,
}

impl CarrierRule {
    pub const fn new(carrier: Carrier, id_length: Option<usize>) -> Self {
        Self { carrier, id_length }
    }
}

/// Open rectangle of accepted coordinates. Bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min_longitude: -10.0,
            max_longitude: 39.0,
            min_latitude: 35.0,
            max_latitude: 68.0,
        }
    }
}

/// How the `country` column is matched against two uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryMatch {
    /// Value must start with two uppercase letters (`FRA` passes).
    #[default]
    Prefix,
    /// Value must be exactly two uppercase letters.
    Exact,
}

/// Whether duplicated UIC codes fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Report as warnings only.
    #[default]
    Warn,
    /// Report as errors.
    Fail,
}

impl DuplicatePolicy {
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => f.write_str("warn"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

/// Immutable rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Number of fields every row (and the header) must have.
    pub column_count: usize,
    /// Carriers checked by the carrier rules, in catalog order.
    pub carriers: Vec<CarrierRule>,
    /// Locales whose `info:<locale>` must differ from the name.
    pub locales: Vec<Locale>,
    /// Columns restricted to `t` / `f`.
    pub flag_fields: Vec<String>,
    pub bounds: BoundingBox,
    /// Station ids exempt from the `uic` / `uic8_sncf` coherence rule.
    ///
    /// Empty by default: the whitelist of known exceptions belongs to the
    /// dataset and is supplied through the config file, e.g.
    /// `{"uic8_sncf_exceptions": ["4920", "6661"]}`.
    pub uic8_sncf_exceptions: BTreeSet<String>,
    pub country_match: CountryMatch,
    pub duplicate_uic: DuplicatePolicy,
    /// Minimum number of suggestable children of a suggestable meta-station.
    pub min_meta_station_children: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            column_count: STANDARD_COLUMNS.len(),
            carriers: vec![
                CarrierRule::new(Carrier::Db, None),
                CarrierRule::new(Carrier::Idbus, Some(3)),
                CarrierRule::new(Carrier::Idtgv, Some(3)),
                CarrierRule::new(Carrier::Ntv, Some(3)),
                CarrierRule::new(Carrier::Ouigo, Some(3)),
                CarrierRule::new(Carrier::Sncf, Some(5)),
                CarrierRule::new(Carrier::Trenitalia, Some(7)),
            ],
            locales: Locale::all().to_vec(),
            flag_fields: vec![
                columns::IS_SUGGESTABLE.to_string(),
                columns::IS_MAIN_STATION.to_string(),
            ],
            bounds: BoundingBox::default(),
            uic8_sncf_exceptions: BTreeSet::new(),
            country_match: CountryMatch::default(),
            duplicate_uic: DuplicatePolicy::default(),
            min_meta_station_children: 2,
        }
    }
}

impl ValidationConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a configuration from JSON text. Missing keys keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations no dataset could satisfy.
    pub fn check(&self) -> Result<()> {
        let bounds = &self.bounds;
        if bounds.min_longitude >= bounds.max_longitude {
            return Err(ConfigError::invalid(format!(
                "longitude bounds are empty ({} >= {})",
                bounds.min_longitude, bounds.max_longitude
            )));
        }
        if bounds.min_latitude >= bounds.max_latitude {
            return Err(ConfigError::invalid(format!(
                "latitude bounds are empty ({} >= {})",
                bounds.min_latitude, bounds.max_latitude
            )));
        }
        let mut seen = BTreeSet::new();
        for rule in &self.carriers {
            if !seen.insert(rule.carrier) {
                return Err(ConfigError::invalid(format!(
                    "carrier {} is listed twice",
                    rule.carrier
                )));
            }
            if rule.id_length == Some(0) {
                return Err(ConfigError::invalid(format!(
                    "carrier {} has a zero id length",
                    rule.carrier
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_duplicate_uic(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_uic = policy;
        self
    }

    #[must_use]
    pub fn with_country_match(mut self, country_match: CountryMatch) -> Self {
        self.country_match = country_match;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_uic8_sncf_exception(mut self, id: impl Into<String>) -> Self {
        self.uic8_sncf_exceptions.insert(id.into());
        self
    }

    /// Configured carriers, in catalog order.
    pub fn carrier_list(&self) -> Vec<Carrier> {
        self.carriers.iter().map(|rule| rule.carrier).collect()
    }

    /// Fixed id length of a carrier, if configured.
    pub fn carrier_id_length(&self, carrier: Carrier) -> Option<usize> {
        self.carriers
            .iter()
            .find(|rule| rule.carrier == carrier)
            .and_then(|rule| rule.id_length)
    }

    /// Every column some rule reads, used by the header check.
    pub fn referenced_columns(&self) -> Vec<String> {
        let mut names: Vec<String> = [
            columns::ID,
            columns::NAME,
            columns::SLUG,
            columns::UIC,
            columns::UIC8_SNCF,
            columns::LONGITUDE,
            columns::LATITUDE,
            columns::PARENT_STATION_ID,
            columns::COUNTRY,
            columns::TIME_ZONE,
        ]
        .iter()
        .map(|name| (*name).to_string())
        .collect();
        names.extend(self.flag_fields.iter().cloned());
        for rule in &self.carriers {
            names.push(rule.carrier.id_field());
            names.push(rule.carrier.enabled_field());
        }
        names.extend(self.locales.iter().map(Locale::info_field));
        let mut seen = BTreeSet::new();
        names.retain(|name| seen.insert(name.clone()));
        names
    }
}
