//! Validation metrics - per-validator pass/fail tallies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pass/fail tally for a single validator tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRunCount {
    passed: u64,
    failed: u64,
}

impl ValidatorRunCount {
    /// Create an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    /// Get the number of passing validation runs.
    #[must_use]
    pub const fn passed(&self) -> u64 {
        self.passed
    }

    /// Get the number of failing validation runs.
    #[must_use]
    pub const fn failed(&self) -> u64 {
        self.failed
    }

    /// Get the total number of validation runs.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.passed + self.failed
    }

    /// Percentage of runs that passed, `0.0` when no runs were recorded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn passing_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.passed as f64 / total as f64 * 100.0
    }

    /// Record one validation run outcome.
    pub fn record(&mut self, is_valid: bool) {
        if is_valid {
            self.passed = self.passed.saturating_add(1);
        } else {
            self.failed = self.failed.saturating_add(1);
        }
    }

    /// Add another tally's counts into this one.
    pub fn merge(&mut self, other: &Self) {
        self.passed = self.passed.saturating_add(other.passed);
        self.failed = self.failed.saturating_add(other.failed);
    }
}

/// Validation outcomes keyed by validator tool name.
///
/// A `BTreeMap` keeps validator iteration (and snapshot serialization)
/// in a stable alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStatusCount {
    validators: BTreeMap<String, ValidatorRunCount>,
}

impl ValidationStatusCount {
    /// Create an empty validation tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any validator has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Get the number of distinct validator tools seen.
    #[must_use]
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Record one validation run for the named validator tool.
    pub fn record(&mut self, validator_tool: &str, is_valid: bool) {
        self.validators
            .entry(validator_tool.to_string())
            .or_default()
            .record(is_valid);
    }

    /// Get the tally for a validator tool, if it has been seen.
    #[must_use]
    pub fn get(&self, validator_tool: &str) -> Option<&ValidatorRunCount> {
        self.validators.get(validator_tool)
    }

    /// Iterate over `(validator tool, tally)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidatorRunCount)> {
        self.validators
            .iter()
            .map(|(name, count)| (name.as_str(), count))
    }

    /// Merge another validation tally into this one, validator by validator.
    pub fn merge(&mut self, other: &Self) {
        for (name, count) in &other.validators {
            self.validators
                .entry(name.clone())
                .or_default()
                .merge(count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally_has_zero_rate() {
        let count = ValidatorRunCount::new();
        assert_eq!(count.total(), 0);
        assert!((count.passing_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_passing_rate_is_percentage() {
        let mut count = ValidatorRunCount::new();
        count.record(true);
        count.record(true);
        count.record(true);
        count.record(false);
        assert_eq!(count.passed(), 3);
        assert_eq!(count.failed(), 1);
        assert!((count.passing_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_groups_by_validator() {
        let mut validation = ValidationStatusCount::new();
        validation.record("womtool", true);
        validation.record("womtool", false);
        validation.record("cwltool", true);

        assert_eq!(validation.validator_count(), 2);
        assert_eq!(validation.get("womtool").map(ValidatorRunCount::total), Some(2));
        assert_eq!(validation.get("cwltool").map(ValidatorRunCount::total), Some(1));
        assert!(validation.get("miniwdl").is_none());
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let mut validation = ValidationStatusCount::new();
        validation.record("womtool", true);
        validation.record("cwltool", true);
        validation.record("miniwdl", false);

        let names: Vec<&str> = validation.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["cwltool", "miniwdl", "womtool"]);
    }

    #[test]
    fn test_merge_combines_per_validator() {
        let mut left = ValidationStatusCount::new();
        left.record("womtool", true);
        left.record("cwltool", false);

        let mut right = ValidationStatusCount::new();
        right.record("womtool", false);
        right.record("miniwdl", true);

        left.merge(&right);
        assert_eq!(left.validator_count(), 3);
        let womtool = left.get("womtool").unwrap();
        assert_eq!(womtool.passed(), 1);
        assert_eq!(womtool.failed(), 1);
        assert!((womtool.passing_rate() - 50.0).abs() < f64::EPSILON);
    }
}
