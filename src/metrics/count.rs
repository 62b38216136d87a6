//! Execution status counters - closed-set bucket counting

use serde::{Deserialize, Serialize};

use super::ExecutionStatus;

/// Per-status execution counters for one entry version.
///
/// The statuses form a closed set, so counts live in a fixed array indexed
/// by [`ExecutionStatus::ordinal`] rather than an open-ended map: every
/// bucket always exists, and `add_count` on an unseen status starts from
/// zero instead of failing.
///
/// Derived values (`number_of_successful_executions`,
/// `number_of_failed_executions`, `is_valid`) are recomputed from the
/// buckets on every read and are never stored, so they cannot
/// desynchronize from the counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatusCount {
    counts: [u64; 3],
}

impl ExecutionStatusCount {
    /// Create counters with every bucket at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 3] }
    }

    /// Whether every bucket is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Get the count for one status bucket.
    #[must_use]
    pub const fn count(&self, status: ExecutionStatus) -> u64 {
        self.counts[status.ordinal()]
    }

    /// Total executions across all buckets.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.counts[0] + self.counts[1] + self.counts[2]
    }

    /// Add `n` to one status bucket.
    pub fn add_count(&mut self, status: ExecutionStatus, n: u64) {
        let bucket = &mut self.counts[status.ordinal()];
        *bucket = bucket.saturating_add(n);
    }

    /// Add one execution to a status bucket.
    pub fn increment(&mut self, status: ExecutionStatus) {
        self.add_count(status, 1);
    }

    /// Number of successful executions (derived).
    #[must_use]
    pub const fn number_of_successful_executions(&self) -> u64 {
        self.count(ExecutionStatus::Successful)
    }

    /// Number of failed executions: the sum of both failure buckets
    /// (derived).
    #[must_use]
    pub const fn number_of_failed_executions(&self) -> u64 {
        self.count(ExecutionStatus::FailedRuntimeInvalid)
            + self.count(ExecutionStatus::FailedSemanticInvalid)
    }

    /// Whether no execution has ever failed (derived).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.number_of_failed_executions() == 0
    }

    /// Fold another counter into this one, bucket by bucket.
    pub fn merge(&mut self, other: &Self) {
        for status in ExecutionStatus::ALL {
            self.add_count(status, other.count(status));
        }
    }
}
