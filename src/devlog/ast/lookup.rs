//! Line-based lookup over a parsed devlog tree
//!
//! Given a file path and a line number, resolve the most specific entity
//! that touches the line: row, then entry, then scope. A scope hit without a
//! row-exact match is a deliberate coarse result so callers can still show
//! the scope-level explanation.
//!
//! Path matching is exact string equality against the heading text as the
//! document spelled it; no normalization of leading slashes, relativity, or
//! case is performed. Callers that mix path conventions must normalize
//! before calling.

use super::elements::{Entry, Row, Scope, TrackedFile};
use serde::Serialize;

/// The result of a line lookup. Every field is optional; absence means "not
/// found at that specificity".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult<'a> {
    pub scope: Option<&'a Scope>,
    pub entry: Option<&'a Entry>,
    pub row: Option<&'a Row>,
}

impl<'a> LookupResult<'a> {
    fn absent() -> Self {
        Self {
            scope: None,
            entry: None,
            row: None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.scope.is_none()
    }

    /// The hit entry's AI insight, when a row-exact match was found.
    pub fn ai_insight(&self) -> Option<&'a str> {
        self.entry.and_then(|entry| entry.ai_insight.as_deref())
    }

    /// The hit entry's suggestions; empty when no row-exact match was found.
    pub fn suggestions(&self) -> &'a [String] {
        self.entry
            .map(|entry| entry.suggestions.as_slice())
            .unwrap_or(&[])
    }
}

/// Resolve the tracked change touching `line` of `path`.
///
/// The first tracked file with an exactly equal path is used; within it, the
/// first scope whose declared range contains the line; within that scope,
/// entries and rows are scanned in document order for the first row recorded
/// for exactly that line. Rows are never range-checked against their scope,
/// so a document whose rows stray outside their scope's declared range still
/// resolves without error.
pub fn lookup<'a>(files: &'a [TrackedFile], path: &str, line: u32) -> LookupResult<'a> {
    let file = match files.iter().find(|file| file.path == path) {
        Some(file) => file,
        None => return LookupResult::absent(),
    };
    let scope = match file.scope_containing(line) {
        Some(scope) => scope,
        None => return LookupResult::absent(),
    };
    for entry in scope.iter_entries() {
        if let Some(row) = entry.find_row(line) {
            return LookupResult {
                scope: Some(scope),
                entry: Some(entry),
                row: Some(row),
            };
        }
    }
    // Coarse hit: the line is in range but no row matches exactly.
    LookupResult {
        scope: Some(scope),
        entry: None,
        row: None,
    }
}

/// Render a lookup as display text, one line per resolved level.
pub fn format_at_line(files: &[TrackedFile], path: &str, line: u32) -> String {
    let result = lookup(files, path, line);
    if result.is_absent() {
        return "No tracked change at this line".to_string();
    }
    let mut out = Vec::new();
    if let Some(scope) = result.scope {
        out.push(format!(
            "- Scope: {} (lines {}-{})",
            scope.name, scope.line_start, scope.line_end
        ));
        if let Some(explanation) = &scope.explanation {
            out.push(format!("  Explanation: {}", explanation));
        }
    }
    if let Some(entry) = result.entry {
        out.push(format!("- Entry: {}", entry.timestamp));
    }
    if let Some(row) = result.row {
        let mark = row.highlight.as_deref().unwrap_or("");
        out.push(format!(
            "- Row: {}{} `{}` -> `{}`",
            mark, row.line, row.before, row.after
        ));
    }
    if let Some(insight) = result.ai_insight() {
        out.push(format!("  AI Insight: {}", insight));
    }
    for suggestion in result.suggestions() {
        out.push(format!("  Suggestion: {}", suggestion));
    }
    out.join("\n")
}
