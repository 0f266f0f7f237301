//! TrackedFile element
//!
//! A tracked file is one top-level section of a devlog document, identified
//! by the file path from its `##` heading. It owns an ordered sequence of
//! scopes.
//!
//! Paths are stored exactly as the heading spelled them (trimmed). They are
//! not required to be unique across a document; lookups use the first
//! tracked file whose path is string-equal to the query.
//!
//! Structure:
//! - Path: the heading text, e.g. `/src/app.js`
//! - Scopes: named, line-ranged groups of change entries, in document order

use super::scope::Scope;
use serde::Serialize;
use std::fmt;

/// One top-level file section of a devlog document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedFile {
    pub path: String,
    pub scopes: Vec<Scope>,
}

impl TrackedFile {
    pub fn new(path: String) -> Self {
        Self {
            path,
            scopes: Vec::new(),
        }
    }

    pub fn with_scopes(path: String, scopes: Vec<Scope>) -> Self {
        Self { path, scopes }
    }

    pub fn iter_scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }

    /// First scope whose inclusive line range contains `line`.
    ///
    /// Scope ranges are not expected to overlap, but when they do the first
    /// containing scope in document order wins.
    pub fn scope_containing(&self, line: u32) -> Option<&Scope> {
        self.scopes.iter().find(|scope| scope.contains_line(line))
    }
}

impl fmt::Display for TrackedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackedFile('{}', {} scopes)", self.path, self.scopes.len())
    }
}
