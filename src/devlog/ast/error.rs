//! Error types for devlog operations

use std::fmt;

/// Errors raised when a line-range token is malformed.
///
/// Range parsing is the one strict boundary of the crate: a silently wrong
/// or empty range would corrupt the hash index without a trace, so malformed
/// tokens always surface as an error and callers decide whether to skip or
/// propagate.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Range bounds given in descending order, e.g. "3-1"
    ReversedRange { start: u32, end: u32 },
    /// A part of the token is not an integer, e.g. "a-3" or "1,,2"
    InvalidNumber(String),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::ReversedRange { start, end } => {
                write!(f, "Reversed range bounds: {}-{}", start, end)
            }
            RangeError::InvalidNumber(part) => {
                write!(f, "Invalid number in range token: '{}'", part)
            }
        }
    }
}

impl std::error::Error for RangeError {}
