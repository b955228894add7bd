//! Locales carrying a localized `info:<locale>` display string.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    Fr,
    En,
    De,
    It,
}

impl Locale {
    pub const fn all() -> &'static [Self] {
        &[Self::Fr, Self::En, Self::De, Self::It]
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::De => "de",
            Self::It => "it",
        }
    }

    /// Name of the `info:<locale>` column.
    pub fn info_field(&self) -> String {
        format!("info:{}", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
