use thiserror::Error;

use crate::core::version::VcfVersion;

/// Broad class of a header-line failure, in the order the checks run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Optional-tag validation requested for a dialect that cannot do it
    VersionGate,
    /// Missing brackets, separators, or badly formed tag names
    Structure,
    /// A quoted value that never closes
    Quoting,
    /// More tags than the contract allows
    Count,
    /// Tags present in the wrong order or not allowed at all
    Sequence,
}

/// Error raised while parsing or validating a single header line.
///
/// The message texts are matched on by callers; keep the wording stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderLineError {
    #[error("Optional tag validation is not supported for {0} header lines")]
    UnsupportedOptionalTags(VcfVersion),

    #[error("Invalid header line: expected a value enclosed in '<' and '>', got: {0}")]
    MissingBrackets(String),

    #[error("Invalid header line: tag segment '{0}' has no '=' separator")]
    MissingSeparator(String),

    #[error("Invalid header line: empty tag name before '='")]
    EmptyTagName,

    #[error("Invalid header line: tag name {0} contains a double quote")]
    InvalidTagName(String),

    #[error("Invalid header line: unclosed quote in value of tag {tag}")]
    UnterminatedQuote { tag: String },

    #[error("Unexpected tag count {0}")]
    UnexpectedTagCount(usize),

    #[error("Tag {0} in wrong order")]
    WrongOrder(String),

    #[error("Optional tag {0} must be listed after all expected tags")]
    OptionalTagTooEarly(String),

    #[error("Unexpected tag {0}")]
    UnexpectedTag(String),
}

impl HeaderLineError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedOptionalTags(_) => ErrorKind::VersionGate,
            Self::MissingBrackets(_)
            | Self::MissingSeparator(_)
            | Self::EmptyTagName
            | Self::InvalidTagName(_) => ErrorKind::Structure,
            Self::UnterminatedQuote { .. } => ErrorKind::Quoting,
            Self::UnexpectedTagCount(_) => ErrorKind::Count,
            Self::WrongOrder(_) | Self::OptionalTagTooEarly(_) | Self::UnexpectedTag(_) => {
                ErrorKind::Sequence
            }
        }
    }
}
