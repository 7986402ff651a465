use std::collections::HashSet;

use crate::core::version::VcfVersion;

/// Tags every INFO and FORMAT line must list first, in this order
pub const INFO_REQUIRED_TAGS: &[&str] = &["ID", "Number", "Type", "Description"];

/// Tags an INFO line may carry after the required ones (VCF 4.x)
pub const INFO_OPTIONAL_TAGS: &[&str] = &["Source", "Version"];

/// Tags every FILTER and ALT line must list first, in this order
pub const FILTER_REQUIRED_TAGS: &[&str] = &["ID", "Description"];

/// Tags a contig line may carry after its ID (VCF 4.x)
pub const CONTIG_OPTIONAL_TAGS: &[&str] =
    &["length", "assembly", "md5", "species", "taxonomy", "URL"];

/// The tag layout a header line is expected to follow.
///
/// `required` is an ordered list that present tags must follow left to right.
/// `optional` is a membership-only set of tags allowed once every required tag
/// has been seen. When `optional` is `None` the line is not subject to optional
/// tag validation at all (no version gate, no tag-count cap).
///
/// Required tags that never appear in a line are tolerated: a contract proves
/// the order of the tags that are present, not their presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagContract {
    pub required: Vec<String>,
    pub optional: Option<HashSet<String>>,
}

impl TagContract {
    /// A contract with no constraints; every tokenized line passes.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn required<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: tags.into_iter().map(Into::into).collect(),
            optional: None,
        }
    }

    /// Add an optional-tag set. An empty set leaves the contract without one.
    #[must_use]
    pub fn with_optional<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let optional: HashSet<String> = tags.into_iter().map(Into::into).collect();
        self.optional = (!optional.is_empty()).then_some(optional);
        self
    }

    #[must_use]
    pub fn has_optional(&self) -> bool {
        self.optional.is_some()
    }

    /// True when the contract places no constraint on the tags of a line
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_none()
    }

    /// Most tags a line may carry, if the contract caps it
    #[must_use]
    pub fn max_tag_count(&self) -> Option<usize> {
        self.optional
            .as_ref()
            .map(|optional| self.required.len() + optional.len())
    }

    /// The well-known contract for a structured meta-information key.
    ///
    /// Keys without a fixed layout (and contig lines in pre-4.0 dialects) get
    /// an empty contract.
    #[must_use]
    pub fn for_key(key: &str, version: VcfVersion) -> Self {
        let optional_ok = version.supports_optional_tag_validation();

        match key {
            "INFO" if optional_ok => {
                Self::required(INFO_REQUIRED_TAGS.iter().copied())
                    .with_optional(INFO_OPTIONAL_TAGS.iter().copied())
            }
            "INFO" | "FORMAT" => Self::required(INFO_REQUIRED_TAGS.iter().copied()),
            "FILTER" | "ALT" => Self::required(FILTER_REQUIRED_TAGS.iter().copied()),
            "contig" if optional_ok => {
                Self::required(["ID"]).with_optional(CONTIG_OPTIONAL_TAGS.iter().copied())
            }
            _ => Self::none(),
        }
    }
}
