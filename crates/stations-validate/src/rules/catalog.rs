//! Identifiers of the validation rules.

use std::fmt;

use serde::Serialize;
use stations_model::Carrier;

use super::Category;
use crate::config::ValidationConfig;

/// One rule of the catalog.
///
/// Serialized as its [`code`](Self::code), e.g. `"carrier-sncf"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum RuleId {
    Header,
    FieldCount,
    Carrier(Carrier),
    UniqueId,
    DuplicateUic,
    Coordinates,
    SortOrder,
    Flags,
    Country,
    TimeZone,
    SuggestableName,
    UniqueSuggestableName,
    InfoDiffersFromName,
    SuggestableCarrier,
    IdtgvSncfLink,
    ParentReference,
    Slug,
    MetaStation,
    Uic8Sncf,
}

impl RuleId {
    /// The ordered catalog for a configuration: one carrier rule per
    /// configured carrier, every other rule once.
    pub fn catalog(config: &ValidationConfig) -> Vec<Self> {
        let mut rules = vec![Self::Header, Self::FieldCount];
        rules.extend(config.carriers.iter().map(|rule| Self::Carrier(rule.carrier)));
        rules.extend([
            Self::UniqueId,
            Self::DuplicateUic,
            Self::Coordinates,
            Self::SortOrder,
            Self::Flags,
            Self::Country,
            Self::TimeZone,
            Self::SuggestableName,
            Self::UniqueSuggestableName,
            Self::InfoDiffersFromName,
            Self::SuggestableCarrier,
            Self::IdtgvSncfLink,
            Self::ParentReference,
            Self::Slug,
            Self::MetaStation,
            Self::Uic8Sncf,
        ]);
        rules
    }

    /// Stable kebab-case identifier.
    pub fn code(&self) -> String {
        let code = match self {
            Self::Carrier(carrier) => return format!("carrier-{}", carrier.code()),
            Self::Header => "header",
            Self::FieldCount => "field-count",
            Self::UniqueId => "unique-id",
            Self::DuplicateUic => "duplicate-uic",
            Self::Coordinates => "coordinates",
            Self::SortOrder => "sort-order",
            Self::Flags => "flags",
            Self::Country => "country",
            Self::TimeZone => "time-zone",
            Self::SuggestableName => "suggestable-name",
            Self::UniqueSuggestableName => "unique-suggestable-name",
            Self::InfoDiffersFromName => "info-differs-from-name",
            Self::SuggestableCarrier => "suggestable-carrier",
            Self::IdtgvSncfLink => "idtgv-sncf-link",
            Self::ParentReference => "parent-reference",
            Self::Slug => "slug",
            Self::MetaStation => "meta-station",
            Self::Uic8Sncf => "uic8-sncf",
        };
        code.to_string()
    }

    /// Short human-readable name.
    pub fn label(&self) -> String {
        match self {
            Self::Carrier(carrier) => format!("Carrier {}", carrier.code()),
            Self::Header => "Header".to_string(),
            Self::FieldCount => "Field count".to_string(),
            Self::UniqueId => "Unique ids".to_string(),
            Self::DuplicateUic => "Duplicate UIC".to_string(),
            Self::Coordinates => "Coordinates".to_string(),
            Self::SortOrder => "Sort order".to_string(),
            Self::Flags => "Flags".to_string(),
            Self::Country => "Country".to_string(),
            Self::TimeZone => "Time zone".to_string(),
            Self::SuggestableName => "Suggestable name".to_string(),
            Self::UniqueSuggestableName => "Unique suggestable names".to_string(),
            Self::InfoDiffersFromName => "Info differs from name".to_string(),
            Self::SuggestableCarrier => "Suggestable carrier".to_string(),
            Self::IdtgvSncfLink => "idtgv/sncf link".to_string(),
            Self::ParentReference => "Parent reference".to_string(),
            Self::Slug => "Slug".to_string(),
            Self::MetaStation => "Meta-station children".to_string(),
            Self::Uic8Sncf => "uic8_sncf coherence".to_string(),
        }
    }

    /// What the rule asserts.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Header => "Header has the configured arity and every column the rules read",
            Self::FieldCount => "Every row has the configured number of fields",
            Self::Carrier(_) => {
                "Enabled flag is t/f, enabled carriers have an id of the fixed length, ids are unique"
            }
            Self::UniqueId => "Station ids are unique",
            Self::DuplicateUic => "UIC codes are unique",
            Self::Coordinates => {
                "Longitude and latitude come in pairs, inside the bounding box, required when suggestable"
            }
            Self::SortOrder => "Rows are sorted by numeric id",
            Self::Flags => "Flag columns are t or f",
            Self::Country => "Country is two uppercase letters",
            Self::TimeZone => "Every station has a time zone",
            Self::SuggestableName => "Suggestable stations have a name",
            Self::UniqueSuggestableName => "Suggestable station names are unique",
            Self::InfoDiffersFromName => "Localized info of suggestable stations differs from the name",
            Self::SuggestableCarrier => {
                "Suggestable stations, or one of their children, have an enabled carrier"
            }
            Self::IdtgvSncfLink => "Enabled idtgv ids are derived from the sncf id",
            Self::ParentReference => "Parents of suggestable stations exist and have a name",
            Self::Slug => "Suggestable slugs are derived from the name and unique",
            Self::MetaStation => "Suggestable meta-stations have enough suggestable children",
            Self::Uic8Sncf => "uic is uic8_sncf without its check digit",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Header | Self::FieldCount => Category::Structure,
            Self::Carrier(_) => Category::Consistency,
            Self::UniqueId
            | Self::DuplicateUic
            | Self::UniqueSuggestableName => Category::Uniqueness,
            Self::Coordinates | Self::SortOrder => Category::Range,
            Self::Flags | Self::Country => Category::Format,
            Self::TimeZone | Self::SuggestableName | Self::SuggestableCarrier => Category::Presence,
            Self::InfoDiffersFromName
            | Self::IdtgvSncfLink
            | Self::Slug
            | Self::MetaStation
            | Self::Uic8Sncf => Category::Consistency,
            Self::ParentReference => Category::CrossReference,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl From<RuleId> for String {
    fn from(rule: RuleId) -> Self {
        rule.code()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn default_catalog_lists_every_rule_once() {
        let catalog = RuleId::catalog(&ValidationConfig::default());
        // 18 catalog rules with the carrier rule expanded to 7 carriers, plus the header check
        assert_eq!(catalog.len(), 1 + 17 + 7);
        let codes: BTreeSet<String> = catalog.iter().map(RuleId::code).collect();
        assert_eq!(codes.len(), catalog.len());
        assert_eq!(catalog[0], RuleId::Header);
        assert!(catalog.contains(&RuleId::Carrier(Carrier::Trenitalia)));
    }

    #[test]
    fn carrier_rules_follow_config() {
        let mut config = ValidationConfig::default();
        config.carriers.retain(|rule| rule.carrier == Carrier::Sncf);
        let catalog = RuleId::catalog(&config);
        let carriers: Vec<RuleId> = catalog
            .into_iter()
            .filter(|rule| matches!(rule, RuleId::Carrier(_)))
            .collect();
        assert_eq!(carriers, vec![RuleId::Carrier(Carrier::Sncf)]);
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&RuleId::Carrier(Carrier::Idtgv)).unwrap();
        assert_eq!(json, "\"carrier-idtgv\"");
        assert_eq!(RuleId::MetaStation.to_string(), "meta-station");
    }
}
