//! Integrity rules for the railway station dataset.
//!
//! # Example
//!
//! ```no_run
//! use stations_validate::{RuleEngine, ValidationConfig};
//!
//! let dataset = stations_ingest::read_stations("stations.csv".as_ref())?;
//! let report = RuleEngine::new(ValidationConfig::default()).run(&dataset);
//! for (rule, issue) in report.issues() {
//!     println!("{rule}: {}", issue.message());
//! }
//! # Ok::<(), stations_ingest::IngestError>(())
//! ```

pub mod checks;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod issue;
pub mod report;
pub mod rules;
pub mod slug;

pub use checks::RuleContext;
pub use config::{BoundingBox, CarrierRule, CountryMatch, DuplicatePolicy, ValidationConfig};
pub use engine::RuleEngine;
pub use error::ConfigError;
pub use index::StationIndex;
pub use issue::{Issue, Severity};
pub use report::{RuleReport, ValidationReport};
pub use rules::{Category, RuleId};

use stations_model::Dataset;

/// Evaluate the full rule catalog of `config` against `dataset`.
pub fn validate(dataset: &Dataset, config: &ValidationConfig) -> ValidationReport {
    RuleEngine::new(config.clone()).run(dataset)
}
