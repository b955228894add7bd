//! Data model for the railway station dataset.
//!
//! One [`StationRecord`] per row of the `;`-delimited dataset, grouped into a
//! [`Dataset`] together with the header row. The vocabulary types
//! ([`Carrier`], [`Locale`], [`Flag`]) name the column families the
//! validation rules work on.

pub mod carrier;
pub mod columns;
pub mod dataset;
pub mod flag;
pub mod locale;
pub mod record;

pub use carrier::Carrier;
pub use columns::STANDARD_COLUMNS;
pub use dataset::Dataset;
pub use flag::Flag;
pub use locale::Locale;
pub use record::StationRecord;
