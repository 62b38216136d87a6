//! Descriptor languages - the closed set of workflow description formats

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Workflow description format of an entry.
///
/// The set is closed: every entry carries exactly one language, identified
/// on the wire by its canonical TRS short code (`CWL`, `WDL`, ...). Parsing
/// accepts exactly the short code; anything else is
/// [`Error::UnknownLanguage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescriptorLanguage {
    /// Common Workflow Language
    #[serde(rename = "CWL")]
    Cwl,
    /// Workflow Description Language
    #[serde(rename = "WDL")]
    Wdl,
    /// Nextflow
    #[serde(rename = "NFL")]
    Nextflow,
    /// Galaxy workflow format 2
    #[serde(rename = "gxformat2")]
    Gxformat2,
    /// Snakemake
    #[serde(rename = "SMK")]
    Smk,
    /// Jupyter notebook
    #[serde(rename = "jupyter")]
    Jupyter,
    /// Service bundle (no descriptor file)
    #[serde(rename = "service")]
    Service,
}

impl DescriptorLanguage {
    /// All known descriptor languages, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Cwl,
        Self::Wdl,
        Self::Nextflow,
        Self::Gxformat2,
        Self::Smk,
        Self::Jupyter,
        Self::Service,
    ];

    /// Canonical TRS short code for this language.
    #[must_use]
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Cwl => "CWL",
            Self::Wdl => "WDL",
            Self::Nextflow => "NFL",
            Self::Gxformat2 => "gxformat2",
            Self::Smk => "SMK",
            Self::Jupyter => "jupyter",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for DescriptorLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_code())
    }
}

impl FromStr for DescriptorLanguage {
    type Err = Error;

    /// Parse a canonical short code. Case-sensitive: `"cwl"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CWL" => Ok(Self::Cwl),
            "WDL" => Ok(Self::Wdl),
            "NFL" => Ok(Self::Nextflow),
            "gxformat2" => Ok(Self::Gxformat2),
            "SMK" => Ok(Self::Smk),
            "jupyter" => Ok(Self::Jupyter),
            "service" => Ok(Self::Service),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}
