//! Metrics Rollup Example
//!
//! Demonstrates execution metrics aggregation: submitting run batches,
//! collapsing task sets, tallying validator results, rejecting bad
//! submissions, and persisting the aggregate to a JSON snapshot.
//!
//! Store-boundary events are logged via `tracing`; run with
//! `RUST_LOG=sendero=debug` to see them.
//!
//! Run with: cargo run --example metrics_rollup

use anyhow::Result;
use rand::Rng;
use sendero::entry::{EntryRecord, EntryType, RegistryStore, VersionRecord};
use sendero::metrics::{
    ExecutionBatch, ExecutionStatus, RunExecution, TaskExecutionSet, ValidationExecution,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Sendero Metrics Rollup ===\n");

    let mut store = RegistryStore::new();
    store.add_entry(
        EntryRecord::builder("entry-001", EntryType::Tool, "quay.io", "dockstore", "md5sum")
            .published(true)
            .build(),
    );
    store.add_version(VersionRecord::new("version-001", "entry-001", "1.0"));

    let mut rng = rand::thread_rng();

    // -------------------------------------------------------------------------
    // 1. Submit three waves of run executions
    // -------------------------------------------------------------------------
    println!("1. Submitting run batches...");

    for wave in 1..=3 {
        let mut batch = ExecutionBatch::new();
        for _ in 0..50 {
            let status = if rng.gen_bool(0.9) {
                ExecutionStatus::Successful
            } else {
                ExecutionStatus::FailedRuntimeInvalid
            };
            let mut run = RunExecution::new(status);
            run.execution_time_seconds = Some(rng.gen_range(20.0..90.0));
            run.memory_gb = Some(rng.gen_range(0.5..8.0));
            run.cpu_count = Some(f64::from(rng.gen_range(1_u32..=16)));
            batch.run_executions.push(run);
        }

        let metrics = store.record_executions("version-001", &batch)?;
        let counts = metrics.execution_status_count();
        let time = metrics.execution_time().unwrap();
        println!(
            "   Wave {}: {} total ({} ok, {} failed), time {:.1}..{:.1} {} (avg {:.1})",
            wave,
            counts.total(),
            counts.number_of_successful_executions(),
            counts.number_of_failed_executions(),
            time.minimum(),
            time.maximum(),
            time.unit().unwrap_or("?"),
            time.average()
        );
    }

    // -------------------------------------------------------------------------
    // 2. Submit a workflow run as a task set
    // -------------------------------------------------------------------------
    println!("\n2. Submitting a five-task workflow run...");

    let tasks: Vec<RunExecution> = (0..5)
        .map(|_| {
            let mut task = RunExecution::new(ExecutionStatus::Successful);
            task.execution_time_seconds = Some(rng.gen_range(10.0..30.0));
            task.memory_gb = Some(rng.gen_range(1.0..4.0));
            task
        })
        .collect();
    let total_time: f64 = tasks.iter().filter_map(|t| t.execution_time_seconds).sum();

    let mut batch = ExecutionBatch::new();
    batch.task_executions.push(TaskExecutionSet::new(tasks));
    let metrics = store.record_executions("version-001", &batch)?;

    // The set counts as one execution: wall time summed, memory peaked
    println!("   Task time sum: {total_time:.1} s");
    println!("   Aggregate now holds {} executions", metrics.execution_status_count().total());

    // -------------------------------------------------------------------------
    // 3. Tally validator results
    // -------------------------------------------------------------------------
    println!("\n3. Submitting validator results...");

    let mut batch = ExecutionBatch::new();
    for _ in 0..20 {
        batch
            .validation_executions
            .push(ValidationExecution::new("womtool", rng.gen_bool(0.85)));
    }
    let metrics = store.record_executions("version-001", &batch)?;

    let womtool = metrics.validation_status().get("womtool").unwrap();
    println!(
        "   womtool: {} passed, {} failed ({:.0}% passing)",
        womtool.passed(),
        womtool.failed(),
        womtool.passing_rate()
    );

    // -------------------------------------------------------------------------
    // 4. Reject a bad submission
    // -------------------------------------------------------------------------
    println!("\n4. Submitting a batch with a negative wall time...");

    let mut bad = ExecutionBatch::new();
    let mut run = RunExecution::new(ExecutionStatus::Successful);
    run.execution_time_seconds = Some(-12.0);
    bad.run_executions.push(run);

    let before = store.metrics("version-001").unwrap().clone();
    match store.record_executions("version-001", &bad) {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(error) => println!("   rejected: {error}"),
    }
    assert_eq!(store.metrics("version-001"), Some(&before));
    println!("   Aggregate unchanged by the rejected batch");

    // -------------------------------------------------------------------------
    // 5. Persist and reload the snapshot
    // -------------------------------------------------------------------------
    println!("\n5. Persisting the registry snapshot...");

    let snapshot_file = "/tmp/sendero_rollup_snapshot.json";
    store.write_json(snapshot_file)?;
    let reloaded = RegistryStore::load_json(snapshot_file)?;
    println!(
        "   Reloaded {} entries, {} versions, {} metric aggregates",
        reloaded.entry_count(),
        reloaded.version_count(),
        reloaded.metrics_count()
    );
    std::fs::remove_file(snapshot_file).ok();

    println!("\n=== Metrics Rollup Complete ===");
    Ok(())
}
