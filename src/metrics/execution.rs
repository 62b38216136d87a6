//! Execution submission types - the wire shapes of a metrics submission

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Terminal status of one execution.
///
/// The set is closed; submissions carrying any other token are rejected at
/// the wire boundary with [`Error::UnknownStatus`], never silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Execution completed successfully
    #[serde(rename = "SUCCESSFUL")]
    Successful,
    /// Execution failed while running
    #[serde(rename = "FAILED_RUNTIME_INVALID")]
    FailedRuntimeInvalid,
    /// Execution failed descriptor semantic validation
    #[serde(rename = "FAILED_SEMANTIC_INVALID")]
    FailedSemanticInvalid,
}

impl ExecutionStatus {
    /// All terminal statuses, in bucket order.
    pub const ALL: [Self; 3] = [
        Self::Successful,
        Self::FailedRuntimeInvalid,
        Self::FailedSemanticInvalid,
    ];

    /// Stable bucket index for array-backed counters.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Successful => 0,
            Self::FailedRuntimeInvalid => 1,
            Self::FailedSemanticInvalid => 2,
        }
    }

    /// Wire token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Successful => "SUCCESSFUL",
            Self::FailedRuntimeInvalid => "FAILED_RUNTIME_INVALID",
            Self::FailedSemanticInvalid => "FAILED_SEMANTIC_INVALID",
        }
    }

    /// Whether this status counts as a failed execution.
    #[must_use]
    pub const fn is_failed(self) -> bool {
        !matches!(self, Self::Successful)
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESSFUL" => Ok(Self::Successful),
            "FAILED_RUNTIME_INVALID" => Ok(Self::FailedRuntimeInvalid),
            "FAILED_SEMANTIC_INVALID" => Ok(Self::FailedSemanticInvalid),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// One submitted workflow or task execution.
///
/// Numeric fields are optional; a submission may report status alone.
/// Batch validation rejects negative or non-finite values before any
/// folding happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunExecution {
    /// Terminal status of the execution
    pub status: ExecutionStatus,
    /// Wall-clock execution time in seconds
    #[serde(default)]
    pub execution_time_seconds: Option<f64>,
    /// Peak memory requirement in gigabytes
    #[serde(default)]
    pub memory_gb: Option<f64>,
    /// Number of CPUs used
    #[serde(default)]
    pub cpu_count: Option<f64>,
}

impl RunExecution {
    /// Create an execution reporting status only.
    #[must_use]
    pub const fn new(status: ExecutionStatus) -> Self {
        Self {
            status,
            execution_time_seconds: None,
            memory_gb: None,
            cpu_count: None,
        }
    }
}

/// Task-level executions belonging to one workflow run.
///
/// A set folds into the aggregate as one synthetic run: the run succeeded
/// only if every task did, its time is the sum of task times, and its
/// memory/CPU are the per-set peaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskExecutionSet {
    /// Per-task executions for the run
    pub task_executions: Vec<RunExecution>,
}

impl TaskExecutionSet {
    /// Create a task set from its task executions.
    #[must_use]
    pub const fn new(task_executions: Vec<RunExecution>) -> Self {
        Self { task_executions }
    }
}

/// One validator-tool run against a version's descriptor files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationExecution {
    /// Name/version of the validator tool (e.g. `"miniwdl/1.11"`)
    pub validator_tool: String,
    /// Whether the descriptor validated cleanly
    pub is_valid: bool,
    /// Validator error output when validation failed
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ValidationExecution {
    /// Create a validation execution with no error output.
    #[must_use]
    pub fn new(validator_tool: impl Into<String>, is_valid: bool) -> Self {
        Self {
            validator_tool: validator_tool.into(),
            is_valid,
            error_message: None,
        }
    }
}

/// One metrics submission body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionBatch {
    /// Workflow-level executions
    #[serde(default)]
    pub run_executions: Vec<RunExecution>,
    /// Task-level execution sets
    #[serde(default)]
    pub task_executions: Vec<TaskExecutionSet>,
    /// Validator runs
    #[serde(default)]
    pub validation_executions: Vec<ValidationExecution>,
}

impl ExecutionBatch {
    /// Create an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            run_executions: Vec::new(),
            task_executions: Vec::new(),
            validation_executions: Vec::new(),
        }
    }

    /// Whether the batch carries no executions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.run_executions.is_empty()
            && self.task_executions.is_empty()
            && self.validation_executions.is_empty()
    }
}
