//! # Sendero: Embedded Tool-Registry Core
//!
//! **Version**: 0.2.0
//!
//! Sendero is an embedded core for a bioinformatics tool and workflow
//! registry: GA4GH TRS-style path resolution, predicate-based entry
//! filtering, and per-version aggregation of execution metrics.
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Muda elimination**: Derived counts are methods over one array, never
//!   duplicated state
//! - **Poka-Yoke safety**: Whole-batch validation rejects bad submissions
//!   before any aggregate changes
//! - **Genchi Genbutsu**: The closed status set mirrors the terminal states
//!   execution platforms actually report
//! - **Jidoka**: Batch, incremental, and merged aggregation are proven
//!   equivalent by property tests
//!
//! ## Example Usage
//!
//! ```rust
//! use sendero::entry::{EntryRecord, EntryType, RegistryStore};
//! use sendero::trs::{EntryFilter, ToolPath};
//!
//! let mut store = RegistryStore::new();
//! let mut entry = EntryRecord::new("entry-001", EntryType::BioWorkflow,
//!     "github.com", "nf-core", "rnaseq");
//! entry.publish();
//! store.add_entry(entry);
//!
//! // Resolve a TRS-style path
//! let path = ToolPath::parse("github.com/nf-core/rnaseq")?;
//! assert_eq!(store.find_by_path(&path, true).len(), 1);
//!
//! // Filter with composable criteria
//! let filter = EntryFilter::builder().name("rna").build();
//! assert_eq!(store.find_entries(&filter, true).len(), 1);
//! # Ok::<(), sendero::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod entry;
pub mod error;
pub mod metrics;
pub mod trs;

pub use error::{Error, Result};
