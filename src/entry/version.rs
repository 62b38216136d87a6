//! Version Record - one released version of an entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version Record represents a single version of an entry.
///
/// Each entry can have multiple versions (tags, branches, releases).
/// Execution metrics are aggregated per version, keyed by `version_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionRecord {
    version_id: String,
    entry_id: String,
    name: String,
    valid: bool,
    hidden: bool,
    created_at: DateTime<Utc>,
}

impl VersionRecord {
    /// Create a new visible, valid version record.
    ///
    /// # Arguments
    ///
    /// * `version_id` - Unique identifier for the version
    /// * `entry_id` - ID of the parent entry
    /// * `name` - Version name (e.g. `"main"`, `"1.0"`)
    #[must_use]
    pub fn new(
        version_id: impl Into<String>,
        entry_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            version_id: version_id.into(),
            entry_id: entry_id.into(),
            name: name.into(),
            valid: true,
            hidden: false,
            created_at: Utc::now(),
        }
    }

    /// Create a builder for constructing a version record with optional fields.
    #[must_use]
    pub fn builder(
        version_id: impl Into<String>,
        entry_id: impl Into<String>,
        name: impl Into<String>,
    ) -> VersionRecordBuilder {
        VersionRecordBuilder::new(version_id, entry_id, name)
    }

    /// Get the version ID.
    #[must_use]
    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    /// Get the parent entry ID.
    #[must_use]
    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    /// Get the version name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the version's descriptor files validated.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the version is hidden from listings.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Hide the version from listings.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Restore a hidden version to listings.
    pub fn unhide(&mut self) {
        self.hidden = false;
    }
}

/// Builder for `VersionRecord`.
#[derive(Debug)]
pub struct VersionRecordBuilder {
    version_id: String,
    entry_id: String,
    name: String,
    valid: bool,
    hidden: bool,
    created_at: DateTime<Utc>,
}

impl VersionRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        version_id: impl Into<String>,
        entry_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            version_id: version_id.into(),
            entry_id: entry_id.into(),
            name: name.into(),
            valid: true,
            hidden: false,
            created_at: Utc::now(),
        }
    }

    /// Set the valid flag.
    #[must_use]
    pub const fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Set the hidden flag.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set a custom creation timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Build the `VersionRecord`.
    #[must_use]
    pub fn build(self) -> VersionRecord {
        VersionRecord {
            version_id: self.version_id,
            entry_id: self.entry_id,
            name: self.name,
            valid: self.valid,
            hidden: self.hidden,
            created_at: self.created_at,
        }
    }
}
