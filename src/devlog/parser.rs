//! Document parser for the devlog dialect
//!
//! Builds the full TrackedFile -> Scope -> Entry -> Row tree from raw
//! document text. The dialect is line-oriented; every structural boundary is
//! recognized by one of a small set of fixed line grammars, tried per line:
//!
//! - file heading:  `## /src/app.js`
//! - scope header:  `**<name>** | **Lines <start>-<end>** | **<count> change tracked**`
//! - entry header:  `##### <timestamp>`
//! - change table:  header row `| Line | Before | After |`, then data rows
//! - label line:    `**AI Insight**`, `**Suggestions**`, `**Explanation**`
//!
//! Boundary detection anchors on these full line grammars only. Bold text
//! inside a free-text block cannot open or close anything unless the whole
//! line is one of the grammars above.
//!
//! The parse is maximally tolerant: the document is human/AI-authored prose
//! with embedded structure, and a malformed block is treated as prose and
//! skipped rather than failing the parse. `parse` is therefore infallible.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::devlog::ast::elements::{Entry, Row, Scope, TrackedFile};
use crate::devlog::section;

/// Scope header: `**<name>** | **Lines <start>-<end>** | **<count> change tracked**`
static SCOPE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*(.+?)\*\* \| \*\*Lines (\d+)-(\d+)\*\* \| \*\*(\d+) change tracked\*\*\s*$")
        .unwrap()
});

/// Entry header: exactly five hashes, one space, a whitespace-free timestamp
static ENTRY_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##### (\S+)\s*$").unwrap());

/// Change-table header row
static TABLE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|\s*Line\s*\|\s*Before\s*\|\s*After\s*\|\s*$").unwrap());

/// Change-table data row: three pipe-delimited cells
static TABLE_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|([^|]*)\|([^|]*)\|([^|]*)\|\s*$").unwrap());

/// First table cell: optional highlight glyph directly before the digits
static ROW_LINE_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^\d\s]+)?\s*(\d+)$").unwrap());

/// A labeled free-text block opener, the whole line
static LABEL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(AI Insight|Suggestions|Explanation)\*\*\s*$").unwrap());

/// Parse a devlog document into its tracked files, in heading order.
///
/// Every `##` heading yields exactly one [`TrackedFile`], even when its
/// section contains no recognizable scopes. Parsing the same text twice
/// yields structurally equal trees.
pub fn parse(document: &str) -> Vec<TrackedFile> {
    section::split_sections(document)
        .into_iter()
        .map(|(path, span)| TrackedFile::with_scopes(path, parse_scopes(&document[span])))
        .collect()
}

/// Parse every scope span within one file section.
fn parse_scopes(file_section: &str) -> Vec<Scope> {
    let lines: Vec<&str> = file_section.lines().collect();
    let headers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| SCOPE_HEADER.is_match(line))
        .map(|(i, _)| i)
        .collect();

    let mut scopes = Vec::new();
    for (k, &start) in headers.iter().enumerate() {
        let end = headers.get(k + 1).copied().unwrap_or(lines.len());
        if let Some(scope) = parse_scope(&lines[start..end]) {
            scopes.push(scope);
        }
    }
    scopes
}

/// Parse one scope span; the first line is the scope header.
///
/// Returns `None` when the header's numbers do not fit (they are then left
/// as prose), matching the skip-not-fail policy.
fn parse_scope(lines: &[&str]) -> Option<Scope> {
    let caps = SCOPE_HEADER.captures(lines[0])?;
    let name = caps.get(1)?.as_str().to_string();
    let line_start = caps.get(2)?.as_str().parse().ok()?;
    let line_end = caps.get(3)?.as_str().parse().ok()?;
    let change_count = caps.get(4)?.as_str().parse().ok()?;

    let headers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| ENTRY_HEADER.is_match(line))
        .map(|(i, _)| i)
        .collect();

    let mut entries = Vec::new();
    for (k, &start) in headers.iter().enumerate() {
        let end = headers.get(k + 1).copied().unwrap_or(lines.len());
        if let Some(entry) = parse_entry(&lines[start..end]) {
            entries.push(entry);
        }
    }

    Some(
        Scope::new(name, line_start, line_end, change_count)
            .with_entries(entries)
            .with_explanation(extract_label_block(lines, "Explanation")),
    )
}

/// Parse one entry span; the first line is the entry header.
fn parse_entry(lines: &[&str]) -> Option<Entry> {
    let caps = ENTRY_HEADER.captures(lines[0])?;
    let mut entry = Entry::new(caps.get(1)?.as_str().to_string());
    entry.rows = parse_table(lines);
    entry.ai_insight = extract_label_block(lines, "AI Insight");
    entry.suggestions = extract_label_block(lines, "Suggestions")
        .map(|text| split_suggestions(&text))
        .unwrap_or_default();
    Some(entry)
}

/// Parse the entry's change table: at most one per entry, opened by the
/// `| Line | Before | After |` header row and consumed row by row until the
/// first non-row line.
fn parse_table(lines: &[&str]) -> Vec<Row> {
    let mut rows = Vec::new();
    if let Some(header) = lines.iter().position(|line| TABLE_HEADER.is_match(line)) {
        for line in &lines[header + 1..] {
            match TABLE_ROW.captures(line) {
                Some(caps) => {
                    // The `|---|---|---|` separator and rows whose first cell
                    // is not an integer are skipped, not fatal.
                    if let Some(row) = parse_row(&caps) {
                        rows.push(row);
                    }
                }
                None => break,
            }
        }
    }
    rows
}

/// Parse one data row. The first cell may carry a highlight glyph directly
/// adjacent to the digits; it is stripped into `highlight` verbatim.
fn parse_row(caps: &Captures) -> Option<Row> {
    let cell = caps.get(1)?.as_str().trim();
    let line_caps = ROW_LINE_CELL.captures(cell)?;
    let highlight = line_caps.get(1).map(|m| m.as_str().to_string());
    let line = line_caps.get(2)?.as_str().parse().ok()?;
    Some(
        Row::new(
            line,
            strip_code_cell(caps.get(2)?.as_str()),
            strip_code_cell(caps.get(3)?.as_str()),
        )
        .with_highlight(highlight),
    )
}

/// Strip the backtick delimiters from a code cell. Empty cells are legal and
/// yield the empty string.
fn strip_code_cell(cell: &str) -> String {
    let cell = cell.trim();
    cell.strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .unwrap_or(cell)
        .to_string()
}

/// Extract the free text of a labeled block: the lines after the label line
/// up to a blank line, the next structural element, or end of span.
///
/// A label with no following text is treated the same as a missing label.
fn extract_label_block(lines: &[&str], label: &str) -> Option<String> {
    let start = lines.iter().position(|line| matches_label(line, label))?;
    let mut block = Vec::new();
    for line in &lines[start + 1..] {
        if line.trim().is_empty() || is_structural(line) {
            break;
        }
        block.push(*line);
    }
    let text = block.join("\n").trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn matches_label(line: &str, label: &str) -> bool {
    LABEL_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str() == label)
        .unwrap_or(false)
}

/// Whether a line is one of the fixed structural grammars. Free-text blocks
/// end at the first structural line even without a blank line in between.
fn is_structural(line: &str) -> bool {
    section::is_file_heading(line)
        || SCOPE_HEADER.is_match(line)
        || ENTRY_HEADER.is_match(line)
        || TABLE_HEADER.is_match(line)
        || LABEL_LINE.is_match(line)
}

/// Split a suggestions block into its list items: one per line, the leading
/// `"- "` marker stripped, blank lines discarded.
fn split_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix("- ").unwrap_or(line).to_string())
        .collect()
}
