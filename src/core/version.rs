use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A VCF header dialect, as announced by the `##fileformat=` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VcfVersion {
    #[serde(rename = "VCRv3.2")]
    Vcf3_2,
    #[serde(rename = "VCFv3.3")]
    Vcf3_3,
    #[serde(rename = "VCFv4.0")]
    Vcf4_0,
    #[serde(rename = "VCFv4.1")]
    Vcf4_1,
    #[serde(rename = "VCFv4.2")]
    Vcf4_2,
    #[serde(rename = "VCFv4.3")]
    Vcf4_3,
}

impl VcfVersion {
    pub const ALL: [VcfVersion; 6] = [
        Self::Vcf3_2,
        Self::Vcf3_3,
        Self::Vcf4_0,
        Self::Vcf4_1,
        Self::Vcf4_2,
        Self::Vcf4_3,
    ];

    /// The version string as written after the `=` of the format line.
    ///
    /// VCF 3.2 files really were stamped `VCRv3.2`.
    #[must_use]
    pub fn format_string(self) -> &'static str {
        match self {
            Self::Vcf3_2 => "VCRv3.2",
            Self::Vcf3_3 => "VCFv3.3",
            Self::Vcf4_0 => "VCFv4.0",
            Self::Vcf4_1 => "VCFv4.1",
            Self::Vcf4_2 => "VCFv4.2",
            Self::Vcf4_3 => "VCFv4.3",
        }
    }

    /// The meta-information key that announces the version (`format` or `fileformat`)
    #[must_use]
    pub fn format_key(self) -> &'static str {
        match self {
            Self::Vcf3_2 => "format",
            _ => "fileformat",
        }
    }

    /// Whether header lines of this dialect may be checked against an
    /// optional-tag set. Pre-4.0 dialects have no notion of optional tags.
    #[must_use]
    pub fn supports_optional_tag_validation(self) -> bool {
        !matches!(self, Self::Vcf3_2 | Self::Vcf3_3)
    }

    /// Look up a version by its format string, e.g. `VCFv4.2`.
    #[must_use]
    pub fn from_format_string(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|v| v.format_string() == s)
    }

    /// Parse a full format line such as `##fileformat=VCFv4.2`.
    ///
    /// Returns `None` if the line is not a format line or names an unknown version.
    #[must_use]
    pub fn from_header_line(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix("##")?;
        let (key, value) = rest.split_once('=')?;
        let version = Self::from_format_string(value)?;
        (version.format_key() == key).then_some(version)
    }
}

impl std::fmt::Display for VcfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_string())
    }
}

/// Error returned when a string does not name a known VCF version
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown VCF version: {0}")]
pub struct UnknownVersionError(pub String);

impl FromStr for VcfVersion {
    type Err = UnknownVersionError;

    /// Accepts the format string (`VCFv4.2`) or the short forms `4.2` / `v4.2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(version) = Self::from_format_string(s) {
            return Ok(version);
        }

        let short = s.trim().trim_start_matches(['v', 'V']);
        Self::ALL
            .into_iter()
            .find(|v| v.format_string()[4..] == *short)
            .ok_or_else(|| UnknownVersionError(s.to_string()))
    }
}
