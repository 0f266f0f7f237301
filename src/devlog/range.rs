//! Line-range token parsing
//!
//! Change blocks declare the source lines they cover with compact tokens:
//! a single line ("7"), a hyphenated range ("3-6"), or comma-joined runs of
//! either form ("1-3,5,9-10"). This module expands a token into the explicit
//! ascending sequence of line numbers it denotes.
//!
//! Malformed tokens are an error, never a silent empty result: reversed
//! bounds ("3-1") and non-numeric parts both fail with a distinguishable
//! [`RangeError`]. Tolerant callers (the hash indexer) skip the offending
//! block; the token itself is always validated strictly.

use crate::devlog::ast::error::RangeError;

/// Expand a line-range token into the line numbers it covers.
///
/// A single value `n` yields `[n]`; a range `a-b` yields every integer from
/// `a` to `b` inclusive, ascending; a comma-joined list concatenates the
/// expansions of its parts in the given order, preserving duplicates when
/// parts overlap.
pub fn parse_line_range(token: &str) -> Result<Vec<u32>, RangeError> {
    let mut result = Vec::new();
    for part in token.split(',') {
        let part = part.trim();
        match part.split_once('-') {
            Some((start, end)) => {
                let start = parse_number(start)?;
                let end = parse_number(end)?;
                if start > end {
                    return Err(RangeError::ReversedRange { start, end });
                }
                result.extend(start..=end);
            }
            None => result.push(parse_number(part)?),
        }
    }
    Ok(result)
}

fn parse_number(text: &str) -> Result<u32, RangeError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| RangeError::InvalidNumber(text.to_string()))
}
