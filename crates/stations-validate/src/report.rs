//! Per-rule and per-run validation results.

use serde::Serialize;

use crate::issue::{Issue, Severity};
use crate::rules::RuleId;

/// Issues found by one rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleReport {
    pub rule: RuleId,
    pub issues: Vec<Issue>,
}

impl RuleReport {
    pub fn new(rule: RuleId, issues: Vec<Issue>) -> Self {
        Self { rule, issues }
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Warning)
            .count()
    }

    /// True when the rule found no error. Warnings do not fail a rule.
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }
}

/// Outcome of one validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Number of station records checked.
    pub records: usize,
    /// One entry per rule, in catalog order.
    pub rules: Vec<RuleReport>,
}

impl ValidationReport {
    /// True when no rule reported an error.
    pub fn is_success(&self) -> bool {
        self.rules.iter().all(RuleReport::passed)
    }

    pub fn error_count(&self) -> usize {
        self.rules.iter().map(RuleReport::error_count).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.rules.iter().map(RuleReport::warning_count).sum()
    }

    /// Rules with at least one error.
    pub fn failed_rules(&self) -> impl Iterator<Item = &RuleReport> {
        self.rules.iter().filter(|report| !report.passed())
    }

    /// Every issue with the rule that produced it, in catalog order.
    pub fn issues(&self) -> impl Iterator<Item = (RuleId, &Issue)> {
        self.rules
            .iter()
            .flat_map(|report| report.issues.iter().map(move |issue| (report.rule, issue)))
    }

    /// Issues of a single rule; empty if the rule did not run.
    pub fn issues_for(&self, rule: RuleId) -> &[Issue] {
        self.rules
            .iter()
            .find(|report| report.rule == rule)
            .map(|report| report.issues.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duplicate_uic(fatal: bool) -> Issue {
        Issue::DuplicateUic {
            station: "2".to_string(),
            uic: "8727100".to_string(),
            first_station: "1".to_string(),
            fatal,
        }
    }

    #[test]
    fn warnings_do_not_fail_the_run() {
        let report = ValidationReport {
            records: 2,
            rules: vec![
                RuleReport::new(RuleId::UniqueId, vec![]),
                RuleReport::new(RuleId::DuplicateUic, vec![duplicate_uic(false)]),
            ],
        };
        assert!(report.is_success());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.failed_rules().count(), 0);
    }

    #[test]
    fn errors_fail_the_run() {
        let report = ValidationReport {
            records: 2,
            rules: vec![
                RuleReport::new(RuleId::DuplicateUic, vec![duplicate_uic(true)]),
                RuleReport::new(
                    RuleId::TimeZone,
                    vec![Issue::MissingTimeZone {
                        station: "3".to_string(),
                    }],
                ),
            ],
        };
        assert!(!report.is_success());
        assert_eq!(report.error_count(), 2);
        let failed: Vec<RuleId> = report.failed_rules().map(|r| r.rule).collect();
        assert_eq!(failed, vec![RuleId::DuplicateUic, RuleId::TimeZone]);
        assert_eq!(report.issues_for(RuleId::TimeZone).len(), 1);
        assert!(report.issues_for(RuleId::Slug).is_empty());
        assert_eq!(report.issues().count(), 2);
    }
}
