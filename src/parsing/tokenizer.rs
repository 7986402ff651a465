//! Splits a `<TAG=value,...>` header line into ordered tag pairs.
//!
//! Values that start with a double quote are read as quoted spans: commas
//! inside them do not split, `\"` and `\\` decode to a literal quote and
//! backslash, and any other backslash sequence is kept verbatim (`\n` stays
//! two characters). Unquoted values run to the next comma and are not
//! escape-processed, so `<` and `>` inside them are literal.
//!
//! This is UTF-8 safe: every delimiter is single-byte ASCII and all slicing
//! uses positions from `char_indices()`.

use crate::core::header_line::TagPair;
use crate::parsing::error::HeaderLineError;

/// Tokenize a header line into its tag pairs, in the order they appear.
///
/// `<>` yields an empty list.
///
/// # Errors
///
/// Returns `HeaderLineError::MissingBrackets` if the line is not enclosed in
/// `<` and `>`, `HeaderLineError::MissingSeparator` for a segment without `=`,
/// `HeaderLineError::EmptyTagName` / `HeaderLineError::InvalidTagName` for bad
/// names, and `HeaderLineError::UnterminatedQuote` if a quoted value never
/// closes.
pub fn tokenize(line: &str) -> Result<Vec<TagPair>, HeaderLineError> {
    let body = line
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| HeaderLineError::MissingBrackets(line.to_string()))?;

    let mut pairs = Vec::new();
    let mut chars = body.char_indices().peekable();
    // Set after a comma: another segment must follow
    let mut expect_segment = false;

    loop {
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        let Some(&(start, _)) = chars.peek() else {
            if expect_segment {
                return Err(HeaderLineError::MissingSeparator(String::new()));
            }
            break;
        };

        let name_end = loop {
            match chars.next() {
                Some((i, '=')) => break i,
                Some((i, ',')) => {
                    return Err(HeaderLineError::MissingSeparator(
                        body[start..i].to_string(),
                    ))
                }
                Some(_) => {}
                None => {
                    return Err(HeaderLineError::MissingSeparator(
                        body[start..].to_string(),
                    ))
                }
            }
        };

        let name = body[start..name_end].trim();
        if name.is_empty() {
            return Err(HeaderLineError::EmptyTagName);
        }
        if name.contains('"') {
            return Err(HeaderLineError::InvalidTagName(name.to_string()));
        }

        let value = if chars.next_if(|&(_, c)| c == '"').is_some() {
            let mut value = read_quoted(&mut chars, name)?;

            // Text between the closing quote and the comma is kept verbatim,
            // less trailing whitespace: `"a"b` reads as `ab`
            let rest_start = chars.peek().map_or(body.len(), |&(i, _)| i);
            let mut rest_end = body.len();
            expect_segment = false;
            for (i, c) in chars.by_ref() {
                if c == ',' {
                    rest_end = i;
                    expect_segment = true;
                    break;
                }
            }
            value.push_str(body[rest_start..rest_end].trim_end());
            value
        } else {
            let value_start = name_end + 1;
            let mut value_end = body.len();
            expect_segment = false;
            for (i, c) in chars.by_ref() {
                if c == ',' {
                    value_end = i;
                    expect_segment = true;
                    break;
                }
            }
            body[value_start..value_end].to_string()
        };

        pairs.push(TagPair::new(name, value));
    }

    Ok(pairs)
}

/// Read a quoted value whose opening quote has been consumed, through the
/// closing quote. An escaped quote never closes the value.
fn read_quoted(
    chars: &mut impl Iterator<Item = (usize, char)>,
    tag: &str,
) -> Result<String, HeaderLineError> {
    let mut value = String::new();

    while let Some((_, c)) = chars.next() {
        match c {
            '"' => return Ok(value),
            '\\' => match chars.next() {
                Some((_, escaped @ ('"' | '\\'))) => value.push(escaped),
                Some((_, other)) => {
                    value.push('\\');
                    value.push(other);
                }
                None => break,
            },
            _ => value.push(c),
        }
    }

    Err(HeaderLineError::UnterminatedQuote {
        tag: tag.to_string(),
    })
}
