//! Validation issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only its needed data plus the offending station id.

use serde::{Deserialize, Serialize};
use stations_model::{Carrier, Locale};

use crate::rules::Category;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Fails the run
    Error,
    /// Reported only
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Issue {
    // Structure
    /// Header has the wrong number of columns
    HeaderArity { found: usize, expected: usize },
    /// Header lacks a column some rule reads
    HeaderColumnMissing { column: String },
    /// Header names the same column twice
    HeaderColumnDuplicated { column: String },
    /// Header has a blank column name
    HeaderColumnEmpty { position: usize },
    /// Row has the wrong number of fields
    FieldCount {
        station: String,
        row: usize,
        found: usize,
        expected: usize,
    },

    // Format
    /// Flag column holds something other than `t` / `f`
    InvalidFlag {
        station: String,
        field: String,
        value: String,
    },
    /// Country is not two uppercase letters
    InvalidCountry { station: String, value: String },
    /// Coordinate is not a decimal number
    InvalidCoordinate {
        station: String,
        field: String,
        value: String,
    },
    /// Id cannot be read as an integer
    NonNumericId { station: String, row: usize },
    /// Carrier id does not have the carrier's fixed length
    CarrierIdLength {
        station: String,
        carrier: Carrier,
        carrier_id: String,
        expected: usize,
    },

    // Presence
    MissingTimeZone { station: String },
    /// Carrier enabled without an id
    MissingCarrierId { station: String, carrier: Carrier },
    /// Suggestable station without a name
    MissingName { station: String },
    /// Only one of longitude / latitude is set
    MissingCoordinate {
        station: String,
        present: String,
        missing: String,
    },
    /// Suggestable station without coordinates
    MissingCoordinates { station: String },
    /// Suggestable station with no enabled carrier, on itself or a child
    NoEnabledCarrier { station: String },

    // Uniqueness
    DuplicateId {
        station: String,
        row: usize,
        first_row: usize,
    },
    DuplicateCarrierId {
        station: String,
        carrier: Carrier,
        carrier_id: String,
        first_station: String,
    },
    /// UIC code shared by two stations; fatal only under the `fail` policy
    DuplicateUic {
        station: String,
        uic: String,
        first_station: String,
        fatal: bool,
    },
    DuplicateName {
        station: String,
        name: String,
        first_station: String,
    },
    DuplicateSlug {
        station: String,
        slug: String,
        first_station: String,
    },

    // Range
    CoordinateOutOfRange {
        station: String,
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Id smaller than the id of the previous row
    UnsortedId { station: String, previous: String },

    // Consistency
    /// Localized info repeats the name
    InfoEqualsName { station: String, locale: Locale },
    SlugMismatch {
        station: String,
        slug: Option<String>,
        expected: String,
    },
    IdtgvSncfMismatch {
        station: String,
        idtgv_id: String,
        expected: String,
    },
    Uic8SncfMismatch {
        station: String,
        uic: Option<String>,
        uic8_sncf: String,
    },
    /// Suggestable meta-station with too few suggestable children
    TooFewSuggestableChildren {
        station: String,
        count: usize,
        minimum: usize,
    },

    // Cross reference
    ParentNotFound { station: String, parent: String },
    ParentWithoutName { station: String, parent: String },

    // Engine
    /// The rule stopped before finishing
    RuleAborted { message: String },
    /// The rule could not finish checking one station
    StationAborted { station: String, message: String },
}

impl Issue {
    /// Id of the offending station, `None` for dataset-level issues.
    pub fn station_id(&self) -> Option<&str> {
        match self {
            Issue::HeaderArity { .. }
            | Issue::HeaderColumnMissing { .. }
            | Issue::HeaderColumnDuplicated { .. }
            | Issue::HeaderColumnEmpty { .. }
            | Issue::RuleAborted { .. } => None,
            Issue::FieldCount { station, .. }
            | Issue::InvalidFlag { station, .. }
            | Issue::InvalidCountry { station, .. }
            | Issue::InvalidCoordinate { station, .. }
            | Issue::NonNumericId { station, .. }
            | Issue::CarrierIdLength { station, .. }
            | Issue::MissingTimeZone { station }
            | Issue::MissingCarrierId { station, .. }
            | Issue::MissingName { station }
            | Issue::MissingCoordinate { station, .. }
            | Issue::MissingCoordinates { station }
            | Issue::NoEnabledCarrier { station }
            | Issue::DuplicateId { station, .. }
            | Issue::DuplicateCarrierId { station, .. }
            | Issue::DuplicateUic { station, .. }
            | Issue::DuplicateName { station, .. }
            | Issue::DuplicateSlug { station, .. }
            | Issue::CoordinateOutOfRange { station, .. }
            | Issue::UnsortedId { station, .. }
            | Issue::InfoEqualsName { station, .. }
            | Issue::SlugMismatch { station, .. }
            | Issue::IdtgvSncfMismatch { station, .. }
            | Issue::Uic8SncfMismatch { station, .. }
            | Issue::TooFewSuggestableChildren { station, .. }
            | Issue::ParentNotFound { station, .. }
            | Issue::ParentWithoutName { station, .. }
            | Issue::StationAborted { station, .. } => Some(station.as_str()),
        }
    }

    /// Severity for this issue type.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DuplicateUic { fatal: false, .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// Category of the violated constraint.
    pub fn category(&self) -> Category {
        match self {
            Issue::HeaderArity { .. }
            | Issue::HeaderColumnMissing { .. }
            | Issue::HeaderColumnDuplicated { .. }
            | Issue::HeaderColumnEmpty { .. }
            | Issue::FieldCount { .. }
            | Issue::RuleAborted { .. }
            | Issue::StationAborted { .. } => Category::Structure,
            Issue::InvalidFlag { .. }
            | Issue::InvalidCountry { .. }
            | Issue::InvalidCoordinate { .. }
            | Issue::NonNumericId { .. }
            | Issue::CarrierIdLength { .. } => Category::Format,
            Issue::MissingTimeZone { .. }
            | Issue::MissingCarrierId { .. }
            | Issue::MissingName { .. }
            | Issue::MissingCoordinate { .. }
            | Issue::MissingCoordinates { .. }
            | Issue::NoEnabledCarrier { .. } => Category::Presence,
            Issue::DuplicateId { .. }
            | Issue::DuplicateCarrierId { .. }
            | Issue::DuplicateUic { .. }
            | Issue::DuplicateName { .. }
            | Issue::DuplicateSlug { .. } => Category::Uniqueness,
            Issue::CoordinateOutOfRange { .. } | Issue::UnsortedId { .. } => Category::Range,
            Issue::InfoEqualsName { .. }
            | Issue::SlugMismatch { .. }
            | Issue::IdtgvSncfMismatch { .. }
            | Issue::Uic8SncfMismatch { .. }
            | Issue::TooFewSuggestableChildren { .. } => Category::Consistency,
            Issue::ParentNotFound { .. } | Issue::ParentWithoutName { .. } => {
                Category::CrossReference
            }
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::HeaderArity { found, expected } => {
                format!("Header has {} columns, expected {}", found, expected)
            }
            Issue::HeaderColumnMissing { column } => {
                format!("Header is missing column {}", column)
            }
            Issue::HeaderColumnDuplicated { column } => {
                format!("Header lists column {} more than once", column)
            }
            Issue::HeaderColumnEmpty { position } => {
                format!("Header column {} has no name", position)
            }
            Issue::FieldCount {
                station,
                row,
                found,
                expected,
            } => format!(
                "Station {} (row {}) has {} fields, expected {}",
                station, row, found, expected
            ),

            Issue::InvalidFlag {
                station,
                field,
                value,
            } => format!(
                "Station {} has {} = {:?}, expected \"t\" or \"f\"",
                station, field, value
            ),
            Issue::InvalidCountry { station, value } => format!(
                "Station {} has country {:?}, expected two uppercase letters",
                station, value
            ),
            Issue::InvalidCoordinate {
                station,
                field,
                value,
            } => format!(
                "Station {} has {} {:?}, which is not a decimal number",
                station, field, value
            ),
            Issue::NonNumericId { station, row } => {
                format!("Station {:?} (row {}) has a non-integer id", station, row)
            }
            Issue::CarrierIdLength {
                station,
                carrier,
                carrier_id,
                expected,
            } => format!(
                "Station {} has {} id {:?} of length {}, expected {}",
                station,
                carrier,
                carrier_id,
                carrier_id.chars().count(),
                expected
            ),

            Issue::MissingTimeZone { station } => {
                format!("Station {} has no time zone", station)
            }
            Issue::MissingCarrierId { station, carrier } => {
                format!("Station {} has {} enabled but no {} id", station, carrier, carrier)
            }
            Issue::MissingName { station } => {
                format!("Suggestable station {} has no name", station)
            }
            Issue::MissingCoordinate {
                station,
                present,
                missing,
            } => format!(
                "Station {} has a {} but no {}",
                station, present, missing
            ),
            Issue::MissingCoordinates { station } => {
                format!("Suggestable station {} has no coordinates", station)
            }
            Issue::NoEnabledCarrier { station } => format!(
                "Suggestable station {} has no enabled carrier, nor has any of its children",
                station
            ),

            Issue::DuplicateId {
                station,
                row,
                first_row,
            } => format!(
                "Station id {} on row {} already used on row {}",
                station, row, first_row
            ),
            Issue::DuplicateCarrierId {
                station,
                carrier,
                carrier_id,
                first_station,
            } => format!(
                "Station {} reuses {} id {:?} of station {}",
                station, carrier, carrier_id, first_station
            ),
            Issue::DuplicateUic {
                station,
                uic,
                first_station,
                ..
            } => format!(
                "Station {} reuses UIC {} of station {}",
                station, uic, first_station
            ),
            Issue::DuplicateName {
                station,
                name,
                first_station,
            } => format!(
                "Suggestable station {} reuses name {:?} of station {}",
                station, name, first_station
            ),
            Issue::DuplicateSlug {
                station,
                slug,
                first_station,
            } => format!(
                "Suggestable station {} reuses slug {:?} of station {}",
                station, slug, first_station
            ),

            Issue::CoordinateOutOfRange {
                station,
                field,
                value,
                min,
                max,
            } => format!(
                "Station {} has {} {} outside ({}, {})",
                station, field, value, min, max
            ),
            Issue::UnsortedId { station, previous } => format!(
                "Station {} comes after station {} but has a smaller id",
                station, previous
            ),

            Issue::InfoEqualsName { station, locale } => format!(
                "Suggestable station {} has info:{} equal to its name",
                station, locale
            ),
            Issue::SlugMismatch {
                station,
                slug,
                expected,
            } => match slug {
                Some(slug) => format!(
                    "Suggestable station {} has slug {:?}, expected {:?}",
                    station, slug, expected
                ),
                None => format!(
                    "Suggestable station {} has no slug, expected {:?}",
                    station, expected
                ),
            },
            Issue::IdtgvSncfMismatch {
                station,
                idtgv_id,
                expected,
            } => format!(
                "Station {} has idtgv id {:?}, expected {:?} from its sncf id",
                station, idtgv_id, expected
            ),
            Issue::Uic8SncfMismatch {
                station,
                uic,
                uic8_sncf,
            } => match uic {
                Some(uic) => format!(
                    "Station {} has uic {} inconsistent with uic8_sncf {}",
                    station, uic, uic8_sncf
                ),
                None => format!(
                    "Station {} has uic8_sncf {} but no uic",
                    station, uic8_sncf
                ),
            },
            Issue::TooFewSuggestableChildren {
                station,
                count,
                minimum,
            } => format!(
                "Meta-station {} has {} suggestable child(ren), expected at least {}",
                station, count, minimum
            ),

            Issue::ParentNotFound { station, parent } => format!(
                "Station {} references parent {} which does not exist",
                station, parent
            ),
            Issue::ParentWithoutName { station, parent } => format!(
                "Station {} references parent {} which has no name",
                station, parent
            ),

            Issue::RuleAborted { message } => format!("Rule aborted: {}", message),
            Issue::StationAborted { station, message } => {
                format!("Station {} could not be checked: {}", station, message)
            }
        }
    }
}
