//! Entry element
//!
//! An entry is one timestamped change event within a scope. It comes from a
//! five-hash heading whose text is the timestamp token:
//!
//! ##### 2025-08-18T20:32:01.435Z
//!
//! The timestamp is opaque: it looks ISO-8601-like in practice but is never
//! parsed as a date. Entries are ordered by appearance, not by timestamp
//! value.

use super::row::Row;
use serde::Serialize;
use std::fmt;

/// One timestamped change event within a scope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub timestamp: String,
    pub rows: Vec<Row>,
    pub ai_insight: Option<String>,
    pub suggestions: Vec<String>,
}

impl Entry {
    pub fn new(timestamp: String) -> Self {
        Self {
            timestamp,
            rows: Vec::new(),
            ai_insight: None,
            suggestions: Vec::new(),
        }
    }

    /// First row recorded for exactly this line number, in document order.
    pub fn find_row(&self, line: u32) -> Option<&Row> {
        self.rows.iter().find(|row| row.line == line)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry('{}', {} rows)", self.timestamp, self.rows.len())
    }
}
