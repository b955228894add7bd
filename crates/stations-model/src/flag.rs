//! Boolean columns encoded as `t` / `f`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "t")]
    True,
    #[serde(rename = "f")]
    False,
}

impl Flag {
    /// Parse a flag value. Only the exact strings `t` and `f` are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "t" => Some(Self::True),
            "f" => Some(Self::False),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::True => "t",
            Self::False => "f",
        }
    }

    pub const fn is_set(&self) -> bool {
        matches!(self, Self::True)
    }
}
