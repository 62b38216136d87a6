//! Entry filtering - predicate construction over registry entries
//!
//! An [`EntryFilter`] is the predicate half of TRS path resolution: every
//! present criterion contributes one constraint, absent criteria impose
//! none, and all present constraints AND together. Text criteria
//! (organization, name, entry name, description, author) match
//! case-insensitive substrings; registry and descriptor language match
//! exactly.

use serde::{Deserialize, Serialize};

use super::ToolPath;
use crate::entry::{DescriptorLanguage, EntryRecord};

/// Filter criteria over registry entries.
///
/// All fields are optional. The checker criterion carries one policy
/// decision: `Some(true)` can never match an entry whose type does not
/// support checker workflows, so a checker query scoped to tools resolves
/// to the empty set rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    descriptor_language: Option<DescriptorLanguage>,
    registry: Option<String>,
    organization: Option<String>,
    name: Option<String>,
    entry_name: Option<String>,
    description: Option<String>,
    author: Option<String>,
    checker: Option<bool>,
}

impl EntryFilter {
    /// Create an empty filter that matches every entry in scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for assembling criteria.
    #[must_use]
    pub fn builder() -> EntryFilterBuilder {
        EntryFilterBuilder::default()
    }

    /// Build a filter from a parsed tool path.
    ///
    /// Registry matches exactly; organization, name, and entry name become
    /// substring criteria. A path with no fourth segment leaves the entry
    /// name unconstrained.
    #[must_use]
    pub fn from_path(path: &ToolPath) -> Self {
        let mut builder = Self::builder()
            .registry(path.registry())
            .organization(path.organization())
            .name(path.name());
        if let Some(entry_name) = path.entry_name() {
            builder = builder.entry_name(entry_name);
        }
        builder.build()
    }

    /// Get the descriptor-language criterion.
    #[must_use]
    pub const fn descriptor_language(&self) -> Option<DescriptorLanguage> {
        self.descriptor_language
    }

    /// Get the registry criterion.
    #[must_use]
    pub fn registry(&self) -> Option<&str> {
        self.registry.as_deref()
    }

    /// Get the organization criterion.
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Get the name criterion.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the entry-name criterion.
    #[must_use]
    pub fn entry_name(&self) -> Option<&str> {
        self.entry_name.as_deref()
    }

    /// Get the description criterion.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the author criterion.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Get the checker criterion.
    #[must_use]
    pub const fn checker(&self) -> Option<bool> {
        self.checker
    }

    /// Whether one entry satisfies every present criterion.
    ///
    /// The entry's published flag must equal `published`; this scopes
    /// public listings to published entries only.
    #[must_use]
    pub fn matches(&self, entry: &EntryRecord, published: bool) -> bool {
        if entry.is_published() != published {
            return false;
        }
        if let Some(language) = self.descriptor_language {
            if entry.descriptor_language() != language {
                return false;
            }
        }
        if let Some(registry) = &self.registry {
            if entry.registry() != registry {
                return false;
            }
        }
        if !substring_matches(entry.organization(), self.organization.as_deref()) {
            return false;
        }
        if !substring_matches(entry.name(), self.name.as_deref()) {
            return false;
        }
        if let Some(entry_name) = &self.entry_name {
            let matched = entry
                .entry_name()
                .is_some_and(|candidate| contains_ignore_case(candidate, entry_name));
            if !matched {
                return false;
            }
        }
        if let Some(description) = &self.description {
            let matched = entry
                .description()
                .is_some_and(|candidate| contains_ignore_case(candidate, description));
            if !matched {
                return false;
            }
        }
        if let Some(author) = &self.author {
            let matched = entry
                .author()
                .is_some_and(|candidate| contains_ignore_case(candidate, author));
            if !matched {
                return false;
            }
        }
        if let Some(want_checker) = self.checker {
            // Tools can never be checker workflows: a true criterion
            // excludes every type without checker support.
            if want_checker && !entry.entry_type().supports_checker() {
                return false;
            }
            if entry.is_checker() != want_checker {
                return false;
            }
        }
        true
    }

    /// Apply the filter to a collection of entries.
    ///
    /// Output preserves the caller's iteration order, so identical inputs
    /// give identical output; any further ordering (a feed by update time,
    /// say) is the caller's choice.
    pub fn apply<'a, I>(&self, entries: I, published: bool) -> Vec<&'a EntryRecord>
    where
        I: IntoIterator<Item = &'a EntryRecord>,
    {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry, published))
            .collect()
    }
}

/// Case-insensitive substring test with an optional needle.
fn substring_matches(candidate: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |needle| contains_ignore_case(candidate, needle))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Builder for `EntryFilter`.
#[derive(Debug, Default)]
pub struct EntryFilterBuilder {
    filter: EntryFilter,
}

impl EntryFilterBuilder {
    /// Constrain on exact descriptor language.
    #[must_use]
    pub const fn descriptor_language(mut self, language: DescriptorLanguage) -> Self {
        self.filter.descriptor_language = Some(language);
        self
    }

    /// Constrain on exact registry host.
    #[must_use]
    pub fn registry(mut self, registry: impl Into<String>) -> Self {
        self.filter.registry = Some(registry.into());
        self
    }

    /// Constrain on an organization substring (case-insensitive).
    #[must_use]
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.filter.organization = Some(organization.into());
        self
    }

    /// Constrain on a name substring (case-insensitive).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.filter.name = Some(name.into());
        self
    }

    /// Constrain on an entry-name substring (case-insensitive).
    #[must_use]
    pub fn entry_name(mut self, entry_name: impl Into<String>) -> Self {
        self.filter.entry_name = Some(entry_name.into());
        self
    }

    /// Constrain on a description substring (case-insensitive).
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.filter.description = Some(description.into());
        self
    }

    /// Constrain on an author substring (case-insensitive).
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.filter.author = Some(author.into());
        self
    }

    /// Constrain on the checker flag.
    #[must_use]
    pub const fn checker(mut self, checker: bool) -> Self {
        self.filter.checker = Some(checker);
        self
    }

    /// Build the `EntryFilter`.
    #[must_use]
    pub fn build(self) -> EntryFilter {
        self.filter
    }
}
