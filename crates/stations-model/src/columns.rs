//! Column names of the published station dataset.

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const SLUG: &str = "slug";
pub const UIC: &str = "uic";
pub const UIC8_SNCF: &str = "uic8_sncf";
pub const LONGITUDE: &str = "longitude";
pub const LATITUDE: &str = "latitude";
pub const PARENT_STATION_ID: &str = "parent_station_id";
pub const COUNTRY: &str = "country";
pub const TIME_ZONE: &str = "time_zone";
pub const IS_MAIN_STATION: &str = "is_main_station";
pub const IS_SUGGESTABLE: &str = "is_suggestable";

/// Header of the published dataset, in file order.
pub const STANDARD_COLUMNS: [&str; 32] = [
    "id",
    "name",
    "slug",
    "uic",
    "uic8_sncf",
    "longitude",
    "latitude",
    "parent_station_id",
    "is_city",
    "country",
    "is_main_station",
    "time_zone",
    "is_suggestable",
    "sncf_id",
    "sncf_is_enabled",
    "idtgv_id",
    "idtgv_is_enabled",
    "db_id",
    "db_is_enabled",
    "idbus_id",
    "idbus_is_enabled",
    "ouigo_id",
    "ouigo_is_enabled",
    "trenitalia_id",
    "trenitalia_is_enabled",
    "ntv_id",
    "ntv_is_enabled",
    "info:fr",
    "info:en",
    "info:de",
    "info:it",
    "same_as",
];
