//! Row element
//!
//! A row is one line-level before/after code change within an entry, parsed
//! from a data row of the entry's change table:
//!
//! | 🟡34 | `});` | `res.send(x)` |
//!
//! The optional leading glyph is a highlight marker. The marker set carries
//! no meaning to the parser; it is stored verbatim for the caller to
//! interpret.

use serde::Serialize;
use std::fmt;

/// One line-level before/after change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub line: u32,
    pub highlight: Option<String>,
    pub before: String,
    pub after: String,
}

impl Row {
    pub fn new(line: u32, before: String, after: String) -> Self {
        Self {
            line,
            highlight: None,
            before,
            after,
        }
    }

    pub fn with_highlight(mut self, highlight: Option<String>) -> Self {
        self.highlight = highlight;
        self
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.highlight {
            Some(mark) => write!(f, "Row({}{}: '{}' -> '{}')", mark, self.line, self.before, self.after),
            None => write!(f, "Row({}: '{}' -> '{}')", self.line, self.before, self.after),
        }
    }
}
