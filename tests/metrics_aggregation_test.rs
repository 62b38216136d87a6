//! Metrics Aggregation Tests
//!
//! End-to-end coverage of the execution metrics pipeline: wire format
//! parsing, batch folding, whole-batch rejection, and the store write path.

use sendero::entry::{RegistryStore, VersionRecord};
use sendero::metrics::{
    ExecutionBatch, ExecutionStatus, ExecutionStatusCount, RunExecution, StatisticMetric,
    TaskExecutionSet, ValidationExecution, VersionMetrics, EXECUTION_TIME_UNIT, MEMORY_UNIT,
};
use sendero::Error;

// =============================================================================
// Wire Format Tests
// =============================================================================

#[test]
fn test_status_wire_tokens() {
    assert_eq!(ExecutionStatus::Successful.to_string(), "SUCCESSFUL");
    assert_eq!(
        ExecutionStatus::FailedRuntimeInvalid.to_string(),
        "FAILED_RUNTIME_INVALID"
    );
    assert_eq!(
        ExecutionStatus::FailedSemanticInvalid.to_string(),
        "FAILED_SEMANTIC_INVALID"
    );
}

#[test]
fn test_batch_parses_from_submission_json() {
    let json = r#"{
        "run_executions": [
            {"status": "SUCCESSFUL", "execution_time_seconds": 840.5, "memory_gb": 4.0, "cpu_count": 8},
            {"status": "FAILED_RUNTIME_INVALID", "execution_time_seconds": 12.0}
        ],
        "task_executions": [
            {"task_executions": [
                {"status": "SUCCESSFUL", "execution_time_seconds": 300.0},
                {"status": "SUCCESSFUL", "execution_time_seconds": 420.0}
            ]}
        ],
        "validation_executions": [
            {"validator_tool": "womtool", "is_valid": true}
        ]
    }"#;

    let batch: ExecutionBatch = serde_json::from_str(json).expect("deserialization failed");
    assert_eq!(batch.run_executions.len(), 2);
    assert_eq!(batch.task_executions.len(), 1);
    assert_eq!(batch.validation_executions.len(), 1);
    assert_eq!(batch.run_executions[0].status, ExecutionStatus::Successful);
    assert_eq!(batch.run_executions[1].execution_time_seconds, Some(12.0));
    assert!(batch.run_executions[1].memory_gb.is_none());
}

#[test]
fn test_batch_rejects_unknown_status_token() {
    let json = r#"{"run_executions": [{"status": "ABORTED"}]}"#;
    let result: Result<ExecutionBatch, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_missing_sections_default_to_empty() {
    let batch: ExecutionBatch = serde_json::from_str("{}").expect("deserialization failed");
    assert!(batch.is_empty());
}

// =============================================================================
// ExecutionStatusCount Tests
// =============================================================================

#[test]
fn test_add_count_to_fresh_bucket() {
    let mut counts = ExecutionStatusCount::new();
    counts.add_count(ExecutionStatus::Successful, 5);

    assert_eq!(counts.number_of_successful_executions(), 5);
    assert_eq!(counts.number_of_failed_executions(), 0);
    assert!(counts.is_valid());
}

#[test]
fn test_derived_counts_recompute_on_every_read() {
    let mut counts = ExecutionStatusCount::new();
    counts.add_count(ExecutionStatus::Successful, 3);
    assert!(counts.is_valid());

    counts.add_count(ExecutionStatus::FailedSemanticInvalid, 1);
    assert!(!counts.is_valid());
    assert_eq!(counts.number_of_failed_executions(), 1);
    assert_eq!(counts.total(), 4);
}

// =============================================================================
// StatisticMetric Tests
// =============================================================================

#[test]
fn test_statistic_merge_weights_by_count() {
    // (min 1, max 5, avg 3, n 2) merged with a single point 9
    let mut statistic = StatisticMetric::from_points(&[1.0, 5.0]).expect("empty slice");
    statistic.merge(&StatisticMetric::from_point(9.0));

    assert!((statistic.minimum() - 1.0).abs() < f64::EPSILON);
    assert!((statistic.maximum() - 9.0).abs() < f64::EPSILON);
    assert!((statistic.average() - 5.0).abs() < f64::EPSILON);
    assert_eq!(statistic.number_of_data_points_for_average(), 3);
}

// =============================================================================
// Batch Folding Tests
// =============================================================================

fn run_with_time(status: ExecutionStatus, seconds: f64) -> RunExecution {
    let mut run = RunExecution::new(status);
    run.execution_time_seconds = Some(seconds);
    run
}

#[test]
fn test_fold_stamps_units_per_dimension() {
    let mut batch = ExecutionBatch::new();
    let mut run = RunExecution::new(ExecutionStatus::Successful);
    run.execution_time_seconds = Some(60.0);
    run.memory_gb = Some(3.5);
    run.cpu_count = Some(4.0);
    batch.run_executions.push(run);

    let metrics = VersionMetrics::new()
        .record_executions(&batch)
        .expect("batch rejected");

    assert_eq!(metrics.execution_time().unwrap().unit(), Some(EXECUTION_TIME_UNIT));
    assert_eq!(metrics.memory().unwrap().unit(), Some(MEMORY_UNIT));
    assert!(metrics.cpu().unwrap().unit().is_none());
    assert!(metrics.last_aggregated().is_some());
}

#[test]
fn test_fold_is_incremental_across_batches() {
    let mut first = ExecutionBatch::new();
    first
        .run_executions
        .push(run_with_time(ExecutionStatus::Successful, 10.0));
    first
        .run_executions
        .push(run_with_time(ExecutionStatus::Successful, 20.0));

    let mut second = ExecutionBatch::new();
    second
        .run_executions
        .push(run_with_time(ExecutionStatus::FailedRuntimeInvalid, 60.0));

    let after_first = VersionMetrics::new()
        .record_executions(&first)
        .expect("batch rejected");
    let after_second = after_first
        .record_executions(&second)
        .expect("batch rejected");

    let counts = after_second.execution_status_count();
    assert_eq!(counts.number_of_successful_executions(), 2);
    assert_eq!(counts.number_of_failed_executions(), 1);
    assert!(!counts.is_valid());

    let time = after_second.execution_time().expect("no time statistic");
    assert!((time.minimum() - 10.0).abs() < f64::EPSILON);
    assert!((time.maximum() - 60.0).abs() < f64::EPSILON);
    assert!((time.average() - 30.0).abs() < f64::EPSILON);
    assert_eq!(time.number_of_data_points_for_average(), 3);
}

#[test]
fn test_task_set_folds_as_one_execution() {
    let mut batch = ExecutionBatch::new();
    batch.task_executions.push(TaskExecutionSet::new(vec![
        run_with_time(ExecutionStatus::Successful, 120.0),
        run_with_time(ExecutionStatus::Successful, 240.0),
        run_with_time(ExecutionStatus::Successful, 60.0),
    ]));

    let metrics = VersionMetrics::new()
        .record_executions(&batch)
        .expect("batch rejected");

    // One workflow execution, with task times summed to wall-clock-ish total
    assert_eq!(metrics.execution_status_count().total(), 1);
    let time = metrics.execution_time().expect("no time statistic");
    assert!((time.average() - 420.0).abs() < f64::EPSILON);
}

#[test]
fn test_task_set_takes_peak_memory_and_cpu() {
    let mut tasks = Vec::new();
    for (memory, cpu) in [(2.0, 4.0), (8.0, 2.0), (1.0, 16.0)] {
        let mut run = RunExecution::new(ExecutionStatus::Successful);
        run.memory_gb = Some(memory);
        run.cpu_count = Some(cpu);
        tasks.push(run);
    }
    let mut batch = ExecutionBatch::new();
    batch.task_executions.push(TaskExecutionSet::new(tasks));

    let metrics = VersionMetrics::new()
        .record_executions(&batch)
        .expect("batch rejected");

    assert!((metrics.memory().unwrap().maximum() - 8.0).abs() < f64::EPSILON);
    assert!((metrics.cpu().unwrap().maximum() - 16.0).abs() < f64::EPSILON);
}

#[test]
fn test_failed_task_fails_the_set() {
    let mut batch = ExecutionBatch::new();
    batch.task_executions.push(TaskExecutionSet::new(vec![
        RunExecution::new(ExecutionStatus::Successful),
        RunExecution::new(ExecutionStatus::FailedRuntimeInvalid),
        RunExecution::new(ExecutionStatus::Successful),
    ]));

    let metrics = VersionMetrics::new()
        .record_executions(&batch)
        .expect("batch rejected");

    let counts = metrics.execution_status_count();
    assert_eq!(counts.count(ExecutionStatus::FailedRuntimeInvalid), 1);
    assert_eq!(counts.number_of_successful_executions(), 0);
}

#[test]
fn test_validations_accumulate_per_validator() {
    let mut batch = ExecutionBatch::new();
    for is_valid in [true, true, false] {
        batch
            .validation_executions
            .push(ValidationExecution::new("womtool", is_valid));
    }
    batch
        .validation_executions
        .push(ValidationExecution::new("miniwdl", true));

    let metrics = VersionMetrics::new()
        .record_executions(&batch)
        .expect("batch rejected");

    let validation = metrics.validation_status();
    assert_eq!(validation.validator_count(), 2);
    let womtool = validation.get("womtool").expect("womtool missing");
    assert_eq!(womtool.passed(), 2);
    assert_eq!(womtool.failed(), 1);
    let miniwdl = validation.get("miniwdl").expect("miniwdl missing");
    assert!((miniwdl.passing_rate() - 100.0).abs() < f64::EPSILON);
}

// =============================================================================
// Whole-Batch Rejection Tests
// =============================================================================

#[test]
fn test_invalid_numeric_rejects_whole_batch() {
    let mut current = VersionMetrics::new();
    let mut seed = ExecutionBatch::new();
    seed.run_executions
        .push(run_with_time(ExecutionStatus::Successful, 5.0));
    current = current.record_executions(&seed).expect("batch rejected");
    let snapshot = current.clone();

    // One bad value poisons the batch, valid runs included
    let mut batch = ExecutionBatch::new();
    batch
        .run_executions
        .push(run_with_time(ExecutionStatus::Successful, 10.0));
    batch
        .run_executions
        .push(run_with_time(ExecutionStatus::Successful, f64::NAN));

    let result = current.record_executions(&batch);
    assert!(matches!(result, Err(Error::InvalidMetric { .. })));
    assert_eq!(current, snapshot);
}

#[test]
fn test_rejection_covers_every_dimension() {
    for (field, build) in [
        ("execution_time_seconds", {
            let mut run = RunExecution::new(ExecutionStatus::Successful);
            run.execution_time_seconds = Some(-1.0);
            run
        }),
        ("memory_gb", {
            let mut run = RunExecution::new(ExecutionStatus::Successful);
            run.memory_gb = Some(f64::INFINITY);
            run
        }),
        ("cpu_count", {
            let mut run = RunExecution::new(ExecutionStatus::Successful);
            run.cpu_count = Some(f64::NAN);
            run
        }),
    ] {
        let mut batch = ExecutionBatch::new();
        batch.run_executions.push(build);
        let error = VersionMetrics::new()
            .record_executions(&batch)
            .expect_err("accepted invalid batch");
        assert!(error.to_string().contains(field), "wrong field for {field}");
    }
}

// =============================================================================
// Store Write Path Tests
// =============================================================================

#[test]
fn test_store_requires_known_version() {
    let mut store = RegistryStore::new();
    let result = store.record_executions("version-404", &ExecutionBatch::new());
    assert!(matches!(result, Err(Error::VersionNotFound(_))));
}

#[test]
fn test_store_accumulates_and_serves_metrics() {
    let mut store = RegistryStore::new();
    store.add_version(VersionRecord::new("version-001", "entry-001", "1.0"));

    let mut batch = ExecutionBatch::new();
    batch
        .run_executions
        .push(run_with_time(ExecutionStatus::Successful, 30.0));

    store
        .record_executions("version-001", &batch)
        .expect("batch rejected");
    store
        .record_executions("version-001", &batch)
        .expect("batch rejected");

    let metrics = store.metrics("version-001").expect("no metrics stored");
    assert_eq!(metrics.execution_status_count().total(), 2);
    assert_eq!(store.metrics_count(), 1);
    assert!(store.metrics("version-002").is_none());
}

#[test]
fn test_store_keeps_old_aggregate_on_rejection() {
    let mut store = RegistryStore::new();
    store.add_version(VersionRecord::new("version-001", "entry-001", "1.0"));

    let mut good = ExecutionBatch::new();
    good.run_executions
        .push(run_with_time(ExecutionStatus::Successful, 30.0));
    store
        .record_executions("version-001", &good)
        .expect("batch rejected");
    let before = store.metrics("version-001").expect("no metrics").clone();

    let mut bad = ExecutionBatch::new();
    bad.run_executions
        .push(run_with_time(ExecutionStatus::Successful, -30.0));
    assert!(store.record_executions("version-001", &bad).is_err());

    assert_eq!(store.metrics("version-001"), Some(&before));
}

// =============================================================================
// Snapshot Round-Trip Tests
// =============================================================================

#[test]
fn test_aggregate_survives_json_round_trip() {
    let mut batch = ExecutionBatch::new();
    batch
        .run_executions
        .push(run_with_time(ExecutionStatus::Successful, 45.0));
    batch
        .run_executions
        .push(run_with_time(ExecutionStatus::FailedSemanticInvalid, 5.0));
    batch
        .validation_executions
        .push(ValidationExecution::new("cwltool", false));

    let metrics = VersionMetrics::new()
        .record_executions(&batch)
        .expect("batch rejected");

    let json = serde_json::to_string_pretty(&metrics).expect("serialization failed");
    let restored: VersionMetrics = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(restored, metrics);
}
