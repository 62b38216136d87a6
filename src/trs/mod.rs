//! GA4GH Tool Registry Service path resolution and entry filtering
//!
//! TRS addresses every entry by a slash-delimited path:
//!
//! ```text
//! registry/organization/name[/entry-name]
//! ```
//!
//! Three segments address an entry registered without a sub-name; four
//! segments carry the sub-tool/workflow name (which may be empty - a
//! trailing slash is a present-but-empty entry name, not an absent one).
//! Any other segment count is a malformed path, reported as
//! [`Error::InvalidPath`](crate::Error::InvalidPath) so callers can answer
//! "not found" instead of crashing.
//!
//! ## Usage
//!
//! ```rust
//! use sendero::trs::{EntryFilter, ToolPath};
//!
//! let path = ToolPath::parse("github.com/gatk/sv-pipeline/checker")?;
//! assert_eq!(path.registry(), "github.com");
//! assert_eq!(path.entry_name(), Some("checker"));
//!
//! let filter = EntryFilter::from_path(&path);
//! assert_eq!(filter.organization(), Some("gatk"));
//! # Ok::<(), sendero::Error>(())
//! ```

mod filter;

pub use filter::{EntryFilter, EntryFilterBuilder};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Parsed TRS tool path.
///
/// Constructed per request and discarded after use; never persisted.
/// Components round-trip exactly as split - no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolPath {
    registry: String,
    organization: String,
    name: String,
    entry_name: Option<String>,
}

impl ToolPath {
    /// Parse a slash-delimited tool path.
    ///
    /// Exactly 3 segments produce a path with no entry name; exactly 4
    /// produce one whose entry name may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for any other segment count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sendero::trs::ToolPath;
    ///
    /// let path = ToolPath::parse("github.com/org/repo")?;
    /// assert_eq!(path.name(), "repo");
    /// assert_eq!(path.entry_name(), None);
    ///
    /// assert!(ToolPath::parse("a/b").is_err());
    /// # Ok::<(), sendero::Error>(())
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            [registry, organization, name] => Ok(Self {
                registry: (*registry).to_string(),
                organization: (*organization).to_string(),
                name: (*name).to_string(),
                entry_name: None,
            }),
            [registry, organization, name, entry_name] => Ok(Self {
                registry: (*registry).to_string(),
                organization: (*organization).to_string(),
                name: (*name).to_string(),
                entry_name: Some((*entry_name).to_string()),
            }),
            _ => Err(Error::InvalidPath(path.to_string())),
        }
    }

    /// Construct a path from components, with no entry name.
    #[must_use]
    pub fn new(
        registry: impl Into<String>,
        organization: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            registry: registry.into(),
            organization: organization.into(),
            name: name.into(),
            entry_name: None,
        }
    }

    /// Attach an entry name to the path.
    #[must_use]
    pub fn with_entry_name(mut self, entry_name: impl Into<String>) -> Self {
        self.entry_name = Some(entry_name.into());
        self
    }

    /// Get the registry segment.
    #[must_use]
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Get the organization segment.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Get the name segment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the entry-name segment, if the path had four segments.
    #[must_use]
    pub fn entry_name(&self) -> Option<&str> {
        self.entry_name.as_deref()
    }
}

impl fmt::Display for ToolPath {
    /// Round-trips the original string, including the trailing slash of an
    /// empty-but-present entry name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.registry, self.organization, self.name)?;
        if let Some(entry_name) = &self.entry_name {
            write!(f, "/{entry_name}")?;
        }
        Ok(())
    }
}
