//! Checks the tags of a header line against a [`TagContract`].
//!
//! Required tags are matched in order with a cursor; once every required tag
//! has been consumed, remaining tags must belong to the optional set. Required
//! tags that never appear are not reported.

use std::collections::HashSet;

use crate::core::contract::TagContract;
use crate::core::header_line::TagPair;
use crate::parsing::error::HeaderLineError;

/// Outcome of checking one tag against the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCheck {
    /// The next required tag; the cursor advances
    Required,
    /// An optional tag after all required ones
    Optional,
    /// A required tag, but not the one expected at this position
    WrongOrder,
    /// An optional tag seen while required tags are still expected
    OptionalTooEarly,
    /// Not part of the contract
    Unexpected,
}

/// Classify a single tag given the number of required tags matched so far.
#[must_use]
pub fn classify(
    name: &str,
    cursor: usize,
    required: &[String],
    optional: Option<&HashSet<String>>,
) -> TagCheck {
    let in_optional = optional.is_some_and(|set| set.contains(name));

    match required.get(cursor) {
        Some(expected) if expected == name => TagCheck::Required,
        Some(_) => {
            let elsewhere = required
                .iter()
                .enumerate()
                .any(|(i, tag)| i != cursor && tag == name);
            if elsewhere {
                TagCheck::WrongOrder
            } else if in_optional {
                TagCheck::OptionalTooEarly
            } else {
                TagCheck::Unexpected
            }
        }
        None if in_optional => TagCheck::Optional,
        None => TagCheck::Unexpected,
    }
}

/// Validate the tag sequence of a line against `contract`.
///
/// # Errors
///
/// Returns `HeaderLineError::UnexpectedTagCount` when an optional set is present
/// and the line has more tags than required plus optional, otherwise the first
/// of `HeaderLineError::WrongOrder`, `HeaderLineError::OptionalTagTooEarly` or
/// `HeaderLineError::UnexpectedTag` encountered scanning left to right.
pub fn validate(pairs: &[TagPair], contract: &TagContract) -> Result<(), HeaderLineError> {
    if contract.is_empty() {
        return Ok(());
    }

    if let Some(max) = contract.max_tag_count() {
        if pairs.len() > max {
            return Err(HeaderLineError::UnexpectedTagCount(pairs.len()));
        }
    }

    let mut cursor = 0;
    for pair in pairs {
        let name = pair.name.as_str();
        match classify(name, cursor, &contract.required, contract.optional.as_ref()) {
            TagCheck::Required => cursor += 1,
            TagCheck::Optional => {}
            TagCheck::WrongOrder => return Err(HeaderLineError::WrongOrder(name.to_string())),
            TagCheck::OptionalTooEarly => {
                return Err(HeaderLineError::OptionalTagTooEarly(name.to_string()))
            }
            TagCheck::Unexpected => return Err(HeaderLineError::UnexpectedTag(name.to_string())),
        }
    }

    Ok(())
}
