//! Entry Record - a registered tool, workflow, notebook, or service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DescriptorLanguage;

/// Kind of a registered entry.
///
/// Capabilities hang off the type as flags instead of subclass overrides,
/// so "tools can never be checker workflows" is a property of the type,
/// not a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Container-image backed tool
    Tool,
    /// Tool described by a workflow language
    AppTool,
    /// General-purpose workflow
    BioWorkflow,
    /// Notebook entry
    Notebook,
    /// Service bundle
    Service,
}

impl EntryType {
    /// All entry types.
    pub const ALL: [Self; 5] = [
        Self::Tool,
        Self::AppTool,
        Self::BioWorkflow,
        Self::Notebook,
        Self::Service,
    ];

    /// Whether entries of this type can be checker workflows.
    ///
    /// Only workflows validate another entry's output; tools, notebooks,
    /// and services never do.
    #[must_use]
    pub const fn supports_checker(self) -> bool {
        matches!(self, Self::BioWorkflow)
    }

    /// Descriptor language assigned to new entries of this type when the
    /// registration carries none.
    #[must_use]
    pub const fn default_language(self) -> DescriptorLanguage {
        match self {
            Self::Notebook => DescriptorLanguage::Jupyter,
            Self::Service => DescriptorLanguage::Service,
            Self::Tool | Self::AppTool | Self::BioWorkflow => DescriptorLanguage::Cwl,
        }
    }
}

/// Entry Record represents one registered entry.
///
/// An entry is addressed by its tool path
/// `registry/organization/name[/entry_name]`; the optional entry name
/// distinguishes sub-tools or sub-workflows registered under one
/// repository. `Some("")` and `None` are distinct: an empty entry name
/// means "registered with no sub-name", an absent one means the path had
/// only three segments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryRecord {
    entry_id: String,
    entry_type: EntryType,
    registry: String,
    organization: String,
    name: String,
    entry_name: Option<String>,
    descriptor_language: DescriptorLanguage,
    description: Option<String>,
    author: Option<String>,
    checker: bool,
    published: bool,
    last_updated: DateTime<Utc>,
}

impl EntryRecord {
    /// Create a new unpublished entry with the type's default descriptor
    /// language.
    ///
    /// # Arguments
    ///
    /// * `entry_id` - Unique identifier for the entry
    /// * `entry_type` - Kind of entry being registered
    /// * `registry` - Source registry host (e.g. `github.com`, `quay.io`)
    /// * `organization` - Organization or namespace within the registry
    /// * `name` - Repository or image name
    #[must_use]
    pub fn new(
        entry_id: impl Into<String>,
        entry_type: EntryType,
        registry: impl Into<String>,
        organization: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            entry_type,
            registry: registry.into(),
            organization: organization.into(),
            name: name.into(),
            entry_name: None,
            descriptor_language: entry_type.default_language(),
            description: None,
            author: None,
            checker: false,
            published: false,
            last_updated: Utc::now(),
        }
    }

    /// Create a builder for constructing an entry record with optional fields.
    #[must_use]
    pub fn builder(
        entry_id: impl Into<String>,
        entry_type: EntryType,
        registry: impl Into<String>,
        organization: impl Into<String>,
        name: impl Into<String>,
    ) -> EntryRecordBuilder {
        EntryRecordBuilder::new(entry_id, entry_type, registry, organization, name)
    }

    /// Get the entry ID.
    #[must_use]
    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    /// Get the entry type.
    #[must_use]
    pub const fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Get the source registry host.
    #[must_use]
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Get the organization.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Get the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the sub-tool/workflow name, if one was registered.
    #[must_use]
    pub fn entry_name(&self) -> Option<&str> {
        self.entry_name.as_deref()
    }

    /// Get the descriptor language.
    #[must_use]
    pub const fn descriptor_language(&self) -> DescriptorLanguage {
        self.descriptor_language
    }

    /// Get the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the author, if set.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Whether this entry is a checker workflow.
    ///
    /// The raw flag is masked by the type's capability: for types that
    /// cannot support checkers this always returns `false`, whatever the
    /// stored flag says.
    #[must_use]
    pub const fn is_checker(&self) -> bool {
        self.checker && self.entry_type.supports_checker()
    }

    /// Whether this entry is published.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        self.published
    }

    /// Get the last-updated timestamp.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Publish the entry, touching the last-updated timestamp.
    pub fn publish(&mut self) {
        self.published = true;
        self.last_updated = Utc::now();
    }

    /// Unpublish the entry, touching the last-updated timestamp.
    pub fn unpublish(&mut self) {
        self.published = false;
        self.last_updated = Utc::now();
    }

    /// Compose the slash-delimited tool path for this entry.
    ///
    /// An entry registered with an empty sub-name yields a trailing slash,
    /// so the path re-parses to the same components.
    #[must_use]
    pub fn tool_path(&self) -> String {
        match &self.entry_name {
            Some(entry_name) => format!(
                "{}/{}/{}/{}",
                self.registry, self.organization, self.name, entry_name
            ),
            None => format!("{}/{}/{}", self.registry, self.organization, self.name),
        }
    }
}

/// Builder for `EntryRecord`.
#[derive(Debug)]
pub struct EntryRecordBuilder {
    entry_id: String,
    entry_type: EntryType,
    registry: String,
    organization: String,
    name: String,
    entry_name: Option<String>,
    descriptor_language: Option<DescriptorLanguage>,
    description: Option<String>,
    author: Option<String>,
    checker: bool,
    published: bool,
    last_updated: DateTime<Utc>,
}

impl EntryRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        entry_id: impl Into<String>,
        entry_type: EntryType,
        registry: impl Into<String>,
        organization: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            entry_type,
            registry: registry.into(),
            organization: organization.into(),
            name: name.into(),
            entry_name: None,
            descriptor_language: None,
            description: None,
            author: None,
            checker: false,
            published: false,
            last_updated: Utc::now(),
        }
    }

    /// Set the sub-tool/workflow name.
    #[must_use]
    pub fn entry_name(mut self, entry_name: impl Into<String>) -> Self {
        self.entry_name = Some(entry_name.into());
        self
    }

    /// Set the descriptor language (defaults to the type's language).
    #[must_use]
    pub const fn descriptor_language(mut self, language: DescriptorLanguage) -> Self {
        self.descriptor_language = Some(language);
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Mark the entry as a checker workflow.
    ///
    /// The flag only takes effect through [`EntryRecord::is_checker`] when
    /// the entry type supports checkers.
    #[must_use]
    pub const fn checker(mut self, checker: bool) -> Self {
        self.checker = checker;
        self
    }

    /// Set the published flag.
    #[must_use]
    pub const fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Set a custom last-updated timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = last_updated;
        self
    }

    /// Build the `EntryRecord`.
    #[must_use]
    pub fn build(self) -> EntryRecord {
        let descriptor_language = self
            .descriptor_language
            .unwrap_or_else(|| self.entry_type.default_language());
        EntryRecord {
            entry_id: self.entry_id,
            entry_type: self.entry_type,
            registry: self.registry,
            organization: self.organization,
            name: self.name,
            entry_name: self.entry_name,
            descriptor_language,
            description: self.description,
            author: self.author,
            checker: self.checker,
            published: self.published,
            last_updated: self.last_updated,
        }
    }
}
