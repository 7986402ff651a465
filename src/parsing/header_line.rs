//! Entry points for parsing one structured header line.
//!
//! A parse runs three pure stages and stops at the first failure:
//!
//! 1. version gate (only when an optional-tag set is supplied)
//! 2. tokenization of the `<TAG=value,...>` text
//! 3. validation of the tag sequence against the contract
//!
//! ```rust
//! use vcf_header_tags::parsing::header_line::parse_line;
//! use vcf_header_tags::VcfVersion;
//!
//! let line = parse_line(
//!     VcfVersion::Vcf4_2,
//!     r#"<ID=SnpCluster,Description="SNPs found in clusters">"#,
//!     &["ID", "Description"],
//! )
//! .unwrap();
//! assert_eq!(line.get("Description"), Some("SNPs found in clusters"));
//! ```

use crate::core::contract::TagContract;
use crate::core::header_line::ParsedHeaderLine;
use crate::core::version::VcfVersion;
use crate::parsing::error::HeaderLineError;
use crate::parsing::tokenizer::tokenize;
use crate::parsing::validator::validate;

/// Reject optional-tag validation for dialects that do not support it.
///
/// Does not look at the line: asking for it is the error.
///
/// # Errors
///
/// Returns `HeaderLineError::UnsupportedOptionalTags` if `optional_tags_provided`
/// is true and `version` lacks the capability.
pub fn check_version_supports_optional_tags(
    version: VcfVersion,
    optional_tags_provided: bool,
) -> Result<(), HeaderLineError> {
    if optional_tags_provided && !version.supports_optional_tag_validation() {
        return Err(HeaderLineError::UnsupportedOptionalTags(version));
    }
    Ok(())
}

/// Parse a header line, checking only the order of required tags.
///
/// # Errors
///
/// Returns a `HeaderLineError` if the line is malformed or its tags break the
/// required order.
pub fn parse_line(
    version: VcfVersion,
    line: &str,
    required: &[&str],
) -> Result<ParsedHeaderLine, HeaderLineError> {
    parse_line_with_contract(version, line, &TagContract::required(required.iter().copied()))
}

/// Parse a header line against required and optional tags.
///
/// A non-empty `optional` enables the version gate and caps the number of tags
/// at `required.len() + optional.len()`. An empty `optional` behaves like
/// [`parse_line`].
///
/// # Errors
///
/// Returns a `HeaderLineError` if the version cannot validate optional tags,
/// the line is malformed, or its tags break the contract.
pub fn parse_line_with_optional(
    version: VcfVersion,
    line: &str,
    required: &[&str],
    optional: &[&str],
) -> Result<ParsedHeaderLine, HeaderLineError> {
    let contract =
        TagContract::required(required.iter().copied()).with_optional(optional.iter().copied());
    parse_line_with_contract(version, line, &contract)
}

/// Parse a header line against a prepared contract.
///
/// The result holds every tag found in the line, not only those the contract names.
///
/// # Errors
///
/// See [`parse_line_with_optional`].
pub fn parse_line_with_contract(
    version: VcfVersion,
    line: &str,
    contract: &TagContract,
) -> Result<ParsedHeaderLine, HeaderLineError> {
    check_version_supports_optional_tags(version, contract.has_optional())?;
    let pairs = tokenize(line)?;
    validate(&pairs, contract)?;
    Ok(pairs.into())
}
