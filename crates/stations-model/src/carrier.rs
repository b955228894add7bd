//! Carriers with their own station identifier namespace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport operator whose identifiers are stored per station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Carrier {
    Db,
    Idbus,
    Idtgv,
    Ntv,
    Ouigo,
    Sncf,
    Trenitalia,
}

impl Carrier {
    /// Every known carrier, in column-prefix alphabetical order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Db,
            Self::Idbus,
            Self::Idtgv,
            Self::Ntv,
            Self::Ouigo,
            Self::Sncf,
            Self::Trenitalia,
        ]
    }

    /// Column prefix used in the dataset header.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Db => "db",
            Self::Idbus => "idbus",
            Self::Idtgv => "idtgv",
            Self::Ntv => "ntv",
            Self::Ouigo => "ouigo",
            Self::Sncf => "sncf",
            Self::Trenitalia => "trenitalia",
        }
    }

    /// Parse a carrier from its column prefix.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|carrier| carrier.code() == needle)
    }

    /// Name of the `<carrier>_id` column.
    pub fn id_field(&self) -> String {
        format!("{}_id", self.code())
    }

    /// Name of the `<carrier>_is_enabled` column.
    pub fn enabled_field(&self) -> String {
        format!("{}_is_enabled", self.code())
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
