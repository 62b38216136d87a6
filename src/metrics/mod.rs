//! Execution Metrics Aggregation
//!
//! This module folds per-execution outcomes (runs, task sets, validator
//! verdicts) into compact per-version aggregates that can be stored,
//! merged, and served without retaining the raw submissions.
//!
//! ## Schema Overview
//!
//! ```text
//! VersionMetrics
//! ├── execution_status_count   per-status buckets (SUCCESSFUL / FAILED_*)
//! ├── execution_time           StatisticMetric in seconds
//! ├── memory                   StatisticMetric in GB
//! ├── cpu                      StatisticMetric in CPU count
//! ├── validation_status        per-validator pass/fail tallies
//! └── last_aggregated          UTC timestamp of the last accepted batch
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sendero::metrics::{ExecutionBatch, ExecutionStatus, RunExecution, VersionMetrics};
//!
//! // Collect a batch of execution reports
//! let mut batch = ExecutionBatch::new();
//! let mut run = RunExecution::new(ExecutionStatus::Successful);
//! run.execution_time_seconds = Some(42.0);
//! run.memory_gb = Some(2.0);
//! batch.run_executions.push(run);
//!
//! // Fold it into a fresh aggregate
//! let metrics = VersionMetrics::new().record_executions(&batch).unwrap();
//! assert_eq!(metrics.execution_status_count().number_of_successful_executions(), 1);
//! assert_eq!(metrics.execution_time().unwrap().unit(), Some("s"));
//! ```

mod aggregator;
mod count;
mod execution;
mod statistic;
mod validation;

pub use aggregator::{EXECUTION_TIME_UNIT, MEMORY_UNIT};
pub use count::ExecutionStatusCount;
pub use execution::{
    ExecutionBatch, ExecutionStatus, RunExecution, TaskExecutionSet, ValidationExecution,
};
pub use statistic::StatisticMetric;
pub use validation::{ValidationStatusCount, ValidatorRunCount};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated execution metrics for one tool or workflow version.
///
/// All fields are running aggregates: recording a new batch produces an
/// updated copy (see [`VersionMetrics::record_executions`]), and two
/// aggregates computed independently can be combined with
/// [`VersionMetrics::merge`]. Statistics are `None` until at least one
/// execution has reported the corresponding measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionMetrics {
    #[serde(default)]
    execution_status_count: ExecutionStatusCount,
    #[serde(default)]
    execution_time: Option<StatisticMetric>,
    #[serde(default)]
    memory: Option<StatisticMetric>,
    #[serde(default)]
    cpu: Option<StatisticMetric>,
    #[serde(default)]
    validation_status: ValidationStatusCount,
    #[serde(default)]
    last_aggregated: Option<DateTime<Utc>>,
}

impl VersionMetrics {
    /// Create an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether anything has been aggregated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.execution_status_count.is_empty() && self.validation_status.is_empty()
    }

    /// Get the per-status execution counts.
    #[must_use]
    pub const fn execution_status_count(&self) -> ExecutionStatusCount {
        self.execution_status_count
    }

    /// Get the execution time statistics (seconds), if any run reported one.
    #[must_use]
    pub fn execution_time(&self) -> Option<&StatisticMetric> {
        self.execution_time.as_ref()
    }

    /// Get the memory statistics (GB), if any run reported one.
    #[must_use]
    pub fn memory(&self) -> Option<&StatisticMetric> {
        self.memory.as_ref()
    }

    /// Get the CPU count statistics, if any run reported one.
    #[must_use]
    pub fn cpu(&self) -> Option<&StatisticMetric> {
        self.cpu.as_ref()
    }

    /// Get the per-validator validation tallies.
    #[must_use]
    pub const fn validation_status(&self) -> &ValidationStatusCount {
        &self.validation_status
    }

    /// Get the time the last batch was folded in, if any.
    #[must_use]
    pub const fn last_aggregated(&self) -> Option<DateTime<Utc>> {
        self.last_aggregated
    }

    /// Merge another independently computed aggregate into this one.
    ///
    /// Counts add elementwise, statistics combine with count-weighted
    /// averages, validator tallies merge per validator, and the later
    /// `last_aggregated` timestamp wins.
    pub fn merge(&mut self, other: &Self) {
        self.execution_status_count
            .merge(&other.execution_status_count);
        merge_statistic(&mut self.execution_time, other.execution_time.as_ref());
        merge_statistic(&mut self.memory, other.memory.as_ref());
        merge_statistic(&mut self.cpu, other.cpu.as_ref());
        self.validation_status.merge(&other.validation_status);
        if other.last_aggregated > self.last_aggregated {
            self.last_aggregated = other.last_aggregated;
        }
    }
}

fn merge_statistic(slot: &mut Option<StatisticMetric>, other: Option<&StatisticMetric>) {
    if let Some(other) = other {
        match slot {
            Some(existing) => existing.merge(other),
            None => *slot = Some(other.clone()),
        }
    }
}
