//! Error types for Sendero
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Sendero error types
#[derive(Error, Debug)]
pub enum Error {
    /// Tool path did not split into 3 or 4 slash-delimited segments
    #[error("Invalid tool path: {0:?}\nExpected registry/organization/name or registry/organization/name/entry-name")]
    InvalidPath(String),

    /// Descriptor language token outside the known enumeration
    #[error("Unknown descriptor language: {0:?}\nKnown short codes: CWL, WDL, NFL, gxformat2, SMK, jupyter, service")]
    UnknownLanguage(String),

    /// Execution status token outside the known enumeration
    #[error("Unknown execution status: {0:?}\nKnown statuses: SUCCESSFUL, FAILED_RUNTIME_INVALID, FAILED_SEMANTIC_INVALID")]
    UnknownStatus(String),

    /// Numeric execution metric rejected by batch validation
    #[error("Invalid value for {field}: {value}\nExecution metrics must be finite and non-negative")]
    InvalidMetric {
        /// Submission field carrying the rejected value
        field: String,
        /// The rejected value
        value: f64,
    },

    /// Execution metrics submitted for an unregistered version
    #[error("Version not found: {0}\nRegister the version before submitting execution metrics")]
    VersionNotFound(String),

    /// Snapshot (de)serialization error
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
