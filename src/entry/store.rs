//! Registry Store - in-memory storage for entries, versions, and metrics
//!
//! This module provides the storage layer for the registry, optimized for
//! path resolution and deterministic listings.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EntryRecord, VersionRecord};
use crate::error::{Error, Result};
use crate::metrics::{ExecutionBatch, VersionMetrics};
use crate::trs::{EntryFilter, ToolPath};

/// In-memory store for registry entries, versions, and execution metrics.
///
/// ## Design
///
/// The store uses hash maps for O(1) lookups by ID. Every listing
/// operation returns a deterministically ordered `Vec`, so identical
/// store contents always produce identical output regardless of hash
/// iteration order.
///
/// ## Metrics Write Path
///
/// `record_executions` is the single write path for metrics: it reads the
/// current aggregate (or an empty one), folds the batch through the pure
/// aggregator, and replaces the stored snapshot only if the whole batch
/// was accepted. `&mut self` gives each version's aggregate an exclusive
/// writer for the duration of the call.
///
/// ## Example
///
/// ```rust
/// use sendero::entry::{EntryRecord, EntryType, RegistryStore};
/// use sendero::trs::ToolPath;
///
/// let mut store = RegistryStore::new();
/// let mut entry = EntryRecord::new("entry-1", EntryType::Tool, "quay.io", "ga4gh", "md5sum");
/// entry.publish();
/// store.add_entry(entry);
///
/// let path = ToolPath::parse("quay.io/ga4gh/md5sum").unwrap();
/// let found = store.find_by_path(&path, true);
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegistryStore {
    #[serde(default)]
    entries: HashMap<String, EntryRecord>,
    #[serde(default)]
    versions: HashMap<String, VersionRecord>,
    #[serde(default)]
    metrics: HashMap<String, VersionMetrics>,
}

impl RegistryStore {
    /// Create a new empty registry store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the store is empty (no entries, versions, or metrics).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.versions.is_empty() && self.metrics.is_empty()
    }

    /// Get the number of entries in the store.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Get the number of versions in the store.
    #[must_use]
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Get the number of versions with a metrics aggregate.
    #[must_use]
    pub fn metrics_count(&self) -> usize {
        self.metrics.len()
    }

    /// Add an entry to the store, replacing any entry with the same ID.
    pub fn add_entry(&mut self, entry: EntryRecord) {
        self.entries.insert(entry.entry_id().to_string(), entry);
    }

    /// Get an entry by ID.
    #[must_use]
    pub fn get_entry(&self, entry_id: &str) -> Option<&EntryRecord> {
        self.entries.get(entry_id)
    }

    /// Add a version to the store, replacing any version with the same ID.
    pub fn add_version(&mut self, version: VersionRecord) {
        self.versions.insert(version.version_id().to_string(), version);
    }

    /// Get a version by ID.
    #[must_use]
    pub fn get_version(&self, version_id: &str) -> Option<&VersionRecord> {
        self.versions.get(version_id)
    }

    /// Get all versions of an entry, sorted by version name.
    #[must_use]
    pub fn versions_for_entry(&self, entry_id: &str) -> Vec<&VersionRecord> {
        let mut versions: Vec<&VersionRecord> = self
            .versions
            .values()
            .filter(|version| version.entry_id() == entry_id)
            .collect();
        versions.sort_by(|a, b| a.name().cmp(b.name()));
        versions
    }

    /// Resolve a parsed tool path to its entries, sorted by entry ID.
    ///
    /// Registry, organization, and name compare exactly. A path with no
    /// fourth segment (or an empty one) resolves entries with no sub-name;
    /// a non-empty fourth segment requires the exact sub-name. Only entries
    /// whose `published` flag equals the argument are returned.
    #[must_use]
    pub fn find_by_path(&self, path: &ToolPath, published: bool) -> Vec<&EntryRecord> {
        let mut matches: Vec<&EntryRecord> = self
            .entries
            .values()
            .filter(|entry| {
                entry.is_published() == published
                    && entry.registry() == path.registry()
                    && entry.organization() == path.organization()
                    && entry.name() == path.name()
                    && entry_name_matches(path.entry_name(), entry.entry_name())
            })
            .collect();
        matches.sort_by(|a, b| a.entry_id().cmp(b.entry_id()));
        matches
    }

    /// Find entries matching a filter, sorted by entry ID.
    #[must_use]
    pub fn find_entries(&self, filter: &EntryFilter, published: bool) -> Vec<&EntryRecord> {
        let mut matches = filter.apply(self.entries.values(), published);
        matches.sort_by(|a, b| a.entry_id().cmp(b.entry_id()));
        matches
    }

    /// List published entries, most recently updated first.
    ///
    /// Ties on the update timestamp break by entry ID, so the feed order
    /// is total.
    #[must_use]
    pub fn published_feed(&self) -> Vec<&EntryRecord> {
        let mut feed: Vec<&EntryRecord> = self
            .entries
            .values()
            .filter(|entry| entry.is_published())
            .collect();
        feed.sort_by(|a, b| {
            b.last_updated()
                .cmp(&a.last_updated())
                .then_with(|| a.entry_id().cmp(b.entry_id()))
        });
        feed
    }

    /// Get the metrics aggregate for a version, if one has been recorded.
    #[must_use]
    pub fn metrics(&self, version_id: &str) -> Option<&VersionMetrics> {
        self.metrics.get(version_id)
    }

    /// Fold an execution batch into a version's metrics aggregate.
    ///
    /// The stored snapshot is replaced only when the whole batch is
    /// accepted; a rejected batch leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VersionNotFound`] for an unknown version ID, or
    /// [`Error::InvalidMetric`] if the batch contains a negative or
    /// non-finite numeric value.
    pub fn record_executions(
        &mut self,
        version_id: &str,
        batch: &ExecutionBatch,
    ) -> Result<&VersionMetrics> {
        if !self.versions.contains_key(version_id) {
            return Err(Error::VersionNotFound(version_id.to_string()));
        }
        let current = self.metrics.get(version_id).cloned().unwrap_or_default();
        let next = current.record_executions(batch)?;

        debug!("Recorded execution batch for version {}", version_id);
        let slot = self.metrics.entry(version_id.to_string()).or_default();
        *slot = next;
        Ok(slot)
    }

    /// Load a registry snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Snapshot`] if it does not parse as a registry snapshot.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&json)?;
        debug!(
            "Loaded registry snapshot from {}: {} entries, {} versions",
            path.display(),
            store.entries.len(),
            store.versions.len()
        );
        Ok(store)
    }

    /// Write the registry snapshot to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] if serialization fails, or
    /// [`Error::Io`] if the file cannot be written.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!("Wrote registry snapshot to {}", path.display());
        Ok(())
    }
}

/// Compare a requested sub-name against a stored one.
///
/// Both sides normalize an empty sub-name to absent: a trailing-slash path
/// resolves the same entries as a three-segment path.
fn entry_name_matches(requested: Option<&str>, actual: Option<&str>) -> bool {
    let requested = requested.filter(|name| !name.is_empty());
    let actual = actual.filter(|name| !name.is_empty());
    match requested {
        None => actual.is_none(),
        Some(name) => actual == Some(name),
    }
}
