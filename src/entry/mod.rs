//! Registry Entry Schema
//!
//! This module provides the data structures for registered tools,
//! workflows, notebooks, and services, together with the in-memory
//! store that resolves and lists them.
//!
//! ## Schema Overview
//!
//! ```text
//! EntryRecord (1) ──< VersionRecord (N)
//!                          │
//!                          └── VersionMetrics (0..1) [aggregated]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sendero::entry::{EntryRecord, EntryType, RegistryStore, VersionRecord};
//!
//! // Register a workflow
//! let mut entry = EntryRecord::new("entry-001", EntryType::BioWorkflow,
//!     "github.com", "nf-core", "rnaseq");
//! entry.publish();
//!
//! // Register a version of it
//! let version = VersionRecord::new("version-001", "entry-001", "3.14.0");
//!
//! let mut store = RegistryStore::new();
//! store.add_entry(entry);
//! store.add_version(version);
//! assert_eq!(store.versions_for_entry("entry-001").len(), 1);
//! ```

mod language;
mod record;
mod store;
mod version;

pub use language::DescriptorLanguage;
pub use record::{EntryRecord, EntryRecordBuilder, EntryType};
pub use store::RegistryStore;
pub use version::{VersionRecord, VersionRecordBuilder};
