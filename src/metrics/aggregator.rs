//! Batch folding - turns execution batches into updated aggregates
//!
//! Validation is whole-batch: every numeric in the batch is checked before
//! any bucket or statistic is touched, so a rejected batch leaves the
//! caller's aggregate exactly as it was.

use super::{
    ExecutionBatch, ExecutionStatus, RunExecution, StatisticMetric, TaskExecutionSet,
    VersionMetrics,
};
use crate::error::{Error, Result};
use chrono::Utc;
use tracing::{debug, warn};

/// Unit label stamped on execution time statistics.
pub const EXECUTION_TIME_UNIT: &str = "s";

/// Unit label stamped on memory statistics.
pub const MEMORY_UNIT: &str = "GB";

impl VersionMetrics {
    /// Fold a batch of execution reports into an updated aggregate.
    ///
    /// The batch is validated in full before any folding happens, and the
    /// method never mutates in place, so a rejected batch leaves the
    /// current aggregate untouched. Task-execution sets contribute one
    /// synthetic run each: the set takes its first non-successful task
    /// status (or `Successful` when every task succeeded), execution time
    /// is the sum of task times, and memory and CPU are the per-set peaks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMetric`] if any `execution_time_seconds`,
    /// `memory_gb`, or `cpu_count` in the batch is negative or non-finite.
    pub fn record_executions(&self, batch: &ExecutionBatch) -> Result<Self> {
        if let Err(error) = validate_batch(batch) {
            warn!("Rejected execution batch: {}", error);
            return Err(error);
        }

        let mut next = self.clone();
        for run in &batch.run_executions {
            next.fold_run(run);
        }
        for task_set in &batch.task_executions {
            if let Some(synthetic) = collapse_task_set(task_set) {
                next.fold_run(&synthetic);
            }
        }
        for validation in &batch.validation_executions {
            next.validation_status
                .record(&validation.validator_tool, validation.is_valid);
        }
        next.last_aggregated = Some(Utc::now());

        debug!(
            "Applied execution batch: {} runs, {} task sets, {} validations",
            batch.run_executions.len(),
            batch.task_executions.len(),
            batch.validation_executions.len()
        );
        Ok(next)
    }

    fn fold_run(&mut self, run: &RunExecution) {
        self.execution_status_count.increment(run.status);
        fold_point(
            &mut self.execution_time,
            run.execution_time_seconds,
            Some(EXECUTION_TIME_UNIT),
        );
        fold_point(&mut self.memory, run.memory_gb, Some(MEMORY_UNIT));
        fold_point(&mut self.cpu, run.cpu_count, None);
    }
}

fn validate_batch(batch: &ExecutionBatch) -> Result<()> {
    for run in &batch.run_executions {
        validate_run(run)?;
    }
    for task_set in &batch.task_executions {
        for task in &task_set.task_executions {
            validate_run(task)?;
        }
    }
    Ok(())
}

fn validate_run(run: &RunExecution) -> Result<()> {
    check_metric("execution_time_seconds", run.execution_time_seconds)?;
    check_metric("memory_gb", run.memory_gb)?;
    check_metric("cpu_count", run.cpu_count)?;
    Ok(())
}

fn check_metric(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => Err(Error::InvalidMetric {
            field: field.to_string(),
            value,
        }),
        _ => Ok(()),
    }
}

/// Collapse a task-execution set into one synthetic run, `None` if the set
/// is empty.
fn collapse_task_set(task_set: &TaskExecutionSet) -> Option<RunExecution> {
    if task_set.task_executions.is_empty() {
        return None;
    }
    let status = task_set
        .task_executions
        .iter()
        .map(|task| task.status)
        .find(|status| status.is_failed())
        .unwrap_or(ExecutionStatus::Successful);

    let mut synthetic = RunExecution::new(status);
    for task in &task_set.task_executions {
        accumulate_sum(
            &mut synthetic.execution_time_seconds,
            task.execution_time_seconds,
        );
        accumulate_max(&mut synthetic.memory_gb, task.memory_gb);
        accumulate_max(&mut synthetic.cpu_count, task.cpu_count);
    }
    Some(synthetic)
}

fn accumulate_sum(slot: &mut Option<f64>, value: Option<f64>) {
    if let Some(value) = value {
        *slot = Some(slot.unwrap_or(0.0) + value);
    }
}

fn accumulate_max(slot: &mut Option<f64>, value: Option<f64>) {
    if let Some(value) = value {
        *slot = Some(slot.map_or(value, |current| current.max(value)));
    }
}

fn fold_point(slot: &mut Option<StatisticMetric>, value: Option<f64>, unit: Option<&str>) {
    if let Some(value) = value {
        match slot {
            Some(statistic) => statistic.add_point(value),
            None => {
                let mut statistic = StatisticMetric::from_point(value);
                if let Some(unit) = unit {
                    statistic = statistic.with_unit(unit);
                }
                *slot = Some(statistic);
            }
        }
    }
}
