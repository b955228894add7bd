//! Rule engine.
//!
//! Builds the [`StationIndex`] once, then evaluates every rule of the
//! catalog against the same read-only input. Rules never see each other's
//! results, so they run in any order; reports are always returned in
//! catalog order.

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use stations_model::Dataset;

use crate::checks::{self, RuleContext, panic_message};
use crate::config::ValidationConfig;
use crate::index::StationIndex;
use crate::issue::Issue;
use crate::report::{RuleReport, ValidationReport};
use crate::rules::RuleId;

/// Evaluates the rule catalog of a [`ValidationConfig`].
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: ValidationConfig,
    rules: Vec<RuleId>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl RuleEngine {
    pub fn new(config: ValidationConfig) -> Self {
        let rules = RuleId::catalog(&config);
        Self { config, rules }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[RuleId] {
        &self.rules
    }

    /// Evaluate every rule, one after the other.
    pub fn run(&self, dataset: &Dataset) -> ValidationReport {
        let span = tracing::info_span!("validate", records = dataset.len());
        let _guard = span.enter();

        let index = StationIndex::build(&dataset.records);
        let ctx = RuleContext::new(dataset, &index, &self.config);
        let rules = self
            .rules
            .iter()
            .map(|&rule| RuleReport::new(rule, evaluate(rule, &ctx)))
            .collect();
        finish(dataset, rules)
    }

    /// Evaluate every rule on its own thread.
    pub fn run_parallel(&self, dataset: &Dataset) -> ValidationReport {
        let span = tracing::info_span!("validate", records = dataset.len(), parallel = true);
        let _guard = span.enter();

        let index = StationIndex::build(&dataset.records);
        let ctx = RuleContext::new(dataset, &index, &self.config);
        let rules = thread::scope(|scope| {
            let handles: Vec<_> = self
                .rules
                .iter()
                .map(|&rule| {
                    let ctx = &ctx;
                    (rule, scope.spawn(move || evaluate(rule, ctx)))
                })
                .collect();
            handles
                .into_iter()
                .map(|(rule, handle)| {
                    let issues = handle.join().unwrap_or_else(|payload| {
                        vec![Issue::RuleAborted {
                            message: panic_message(payload.as_ref()),
                        }]
                    });
                    RuleReport::new(rule, issues)
                })
                .collect()
        });
        finish(dataset, rules)
    }

    /// Evaluate a single rule, whether or not it is part of the catalog.
    pub fn run_rule(&self, rule: RuleId, dataset: &Dataset) -> Vec<Issue> {
        let index = StationIndex::build(&dataset.records);
        let ctx = RuleContext::new(dataset, &index, &self.config);
        evaluate(rule, &ctx)
    }
}

/// Run one rule. Per-station panics are already caught by the checks; one
/// that escapes them becomes a single [`Issue::RuleAborted`].
fn evaluate(rule: RuleId, ctx: &RuleContext<'_>) -> Vec<Issue> {
    let span = tracing::debug_span!("rule", rule = %rule);
    let _guard = span.enter();

    match panic::catch_unwind(AssertUnwindSafe(|| checks::check(rule, ctx))) {
        Ok(issues) => {
            tracing::debug!(issues = issues.len(), "rule evaluated");
            issues
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(%message, "rule aborted");
            vec![Issue::RuleAborted { message }]
        }
    }
}

fn finish(dataset: &Dataset, rules: Vec<RuleReport>) -> ValidationReport {
    let report = ValidationReport {
        records: dataset.len(),
        rules,
    };
    tracing::info!(
        rules = report.rules.len(),
        failed = report.failed_rules().count(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_become_messages() {
        let payload = panic::catch_unwind(|| panic!("index out of bounds")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "index out of bounds");

        let id = 42;
        let payload = panic::catch_unwind(|| panic!("station {id} is broken")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "station 42 is broken");

        let payload = panic::catch_unwind(|| std::panic::panic_any(7_u8)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn run_rule_outside_the_catalog() {
        let config = ValidationConfig {
            carriers: Vec::new(),
            ..ValidationConfig::default()
        };
        let engine = RuleEngine::new(config);
        assert!(!engine.rules().contains(&RuleId::Carrier(stations_model::Carrier::Sncf)));

        let dataset = Dataset::from_rows(
            &["id", "sncf_id", "sncf_is_enabled"],
            &[vec!["1", "", "t"]],
        );
        let issues = engine.run_rule(RuleId::Carrier(stations_model::Carrier::Sncf), &dataset);
        assert_eq!(issues.len(), 1);
    }
}
