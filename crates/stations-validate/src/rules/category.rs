//! Rule categories.

use serde::{Deserialize, Serialize};

/// Validation rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Structure,
    Presence,
    Format,
    Uniqueness,
    Range,
    Consistency,
    CrossReference,
}

impl Category {
    /// Get all validation categories.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Structure,
            Self::Presence,
            Self::Format,
            Self::Uniqueness,
            Self::Range,
            Self::Consistency,
            Self::CrossReference,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::Presence => "Presence",
            Self::Format => "Format",
            Self::Uniqueness => "Uniqueness",
            Self::Range => "Range",
            Self::Consistency => "Consistency",
            Self::CrossReference => "Cross Reference",
        }
    }

    /// Description for reports.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Structure => "Header and row shape",
            Self::Presence => "Conditionally required values",
            Self::Format => "Value domains and formats",
            Self::Uniqueness => "Values that must not repeat across the dataset",
            Self::Range => "Numeric bounds and ordering",
            Self::Consistency => "Agreement between columns of a station",
            Self::CrossReference => "References between stations",
        }
    }
}
