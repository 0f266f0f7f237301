//! Section extraction over line-oriented documents
//!
//! Devlog documents are treated as a sequence of lines, never parsed with
//! recursive markdown machinery. A section is the span from a heading line
//! to the next sibling heading (or end of document), and both ends are
//! located by line-anchored pattern matching.
//!
//! Opening and closing a section are deliberately independent policies: any
//! two-hash heading closes the section in front of it, whether or not it
//! would itself match the search that opened the section. This is the one
//! canonical splitter; the tree parser and the hash indexer both section
//! documents through it so the two views of the dialect cannot drift.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// A two-hash markdown heading: `## <text>`
static FILE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*##\s+(.*\S)\s*$").unwrap());

/// A two-hash heading opening with a path-like token: `## /src/app.js`
static SIBLING_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*##\s+/").unwrap());

/// Whether a line is a two-hash file heading.
pub fn is_file_heading(line: &str) -> bool {
    FILE_HEADING.is_match(line)
}

/// Whether a line is a two-hash heading starting with a path-like token.
///
/// Used only to detect where the next sibling section begins; a heading can
/// close a section without being a valid match for any file-name search.
pub fn is_sibling_file_heading(line: &str) -> bool {
    SIBLING_HEADING.is_match(line)
}

/// The visible text of a file heading line, or `None` for any other line.
pub fn heading_text(line: &str) -> Option<&str> {
    FILE_HEADING
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Predicate matching a file heading whose text contains `file_name` as a
/// whole token.
///
/// The match is boundary-anchored: the token must be preceded by the start
/// of the heading text, whitespace, or a `/` path separator, and followed by
/// whitespace or the end of the text. A search for `app.js` therefore never
/// matches a heading for `app.js.bak`.
pub fn file_heading_matcher(file_name: &str) -> impl Fn(&str) -> bool {
    let exact = file_name.trim().to_string();
    let bounded = Regex::new(&format!(
        r"(?:^|[\s/]){}(?:\s|$)",
        regex::escape(&exact)
    ))
    .unwrap();
    move |line: &str| match heading_text(line) {
        Some(text) => text == exact || bounded.is_match(text),
        None => false,
    }
}

/// Locate the first section opened by `heading_matches`.
///
/// Returns the byte span from the matching heading line to the next strictly
/// later line satisfying `sibling_matches`, exclusive, or to the end of the
/// document if no sibling follows. `None` when no heading matches.
pub fn find_section<H, S>(document: &str, heading_matches: H, sibling_matches: S) -> Option<Range<usize>>
where
    H: Fn(&str) -> bool,
    S: Fn(&str) -> bool,
{
    let mut start: Option<usize> = None;
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        match start {
            None => {
                if heading_matches(text) {
                    start = Some(offset);
                }
            }
            Some(from) => {
                if sibling_matches(text) {
                    return Some(from..offset);
                }
            }
        }
        offset += line.len();
    }
    start.map(|from| from..document.len())
}

/// The section for `file_name` under the standard devlog policies: opened by
/// a boundary-anchored file-name match, closed by any path-like heading.
pub fn file_section<'a>(document: &'a str, file_name: &str) -> Option<&'a str> {
    find_section(
        document,
        file_heading_matcher(file_name),
        is_sibling_file_heading,
    )
    .map(|span| &document[span])
}

/// Split a document into all of its file sections, in document order.
///
/// Each result pairs the heading's trimmed text with the byte span from the
/// heading line to the next two-hash heading (exclusive) or end of document.
pub fn split_sections(document: &str) -> Vec<(String, Range<usize>)> {
    let mut sections: Vec<(String, Range<usize>)> = Vec::new();
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        if let Some(heading) = heading_text(text) {
            if let Some(last) = sections.last_mut() {
                last.1.end = offset;
            }
            sections.push((heading.to_string(), offset..document.len()));
        }
        offset += line.len();
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Devlog

## /src/app.js

some app content

## /src/util.js

some util content

## /src/app.js.bak

stale backup content
";

    #[test]
    fn test_find_section_spans_to_next_sibling() {
        let span = find_section(DOC, file_heading_matcher("util.js"), is_sibling_file_heading)
            .expect("section should be found");
        let section = &DOC[span];
        assert!(section.starts_with("## /src/util.js"));
        assert!(section.contains("some util content"));
        assert!(!section.contains("app.js.bak"));
    }

    #[test]
    fn test_find_section_runs_to_end_of_document() {
        let span = find_section(
            DOC,
            file_heading_matcher("app.js.bak"),
            is_sibling_file_heading,
        )
        .expect("section should be found");
        assert!(DOC[span].contains("stale backup content"));
    }

    #[test]
    fn test_file_name_match_is_boundary_anchored() {
        // "app.js" must match "## /src/app.js" but never "## /src/app.js.bak".
        let matches = file_heading_matcher("app.js");
        assert!(matches("## /src/app.js"));
        assert!(matches("## app.js"));
        assert!(matches("## changes for app.js today"));
        assert!(!matches("## /src/app.js.bak"));
        assert!(!matches("## /src/myapp.js"));
        assert!(!matches("regular prose mentioning app.js"));
    }

    #[test]
    fn test_section_for_app_js_excludes_bak_section() {
        let section = file_section(DOC, "app.js").expect("section should be found");
        assert!(section.contains("some app content"));
        assert!(!section.contains("stale backup content"));
    }

    #[test]
    fn test_missing_heading_yields_none() {
        assert!(file_section(DOC, "missing.js").is_none());
    }

    #[test]
    fn test_split_sections_order_and_exclusivity() {
        let sections = split_sections(DOC);
        let labels: Vec<&str> = sections.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["/src/app.js", "/src/util.js", "/src/app.js.bak"]);
        // The middle section contains nothing past the next heading line.
        let util = &DOC[sections[1].1.clone()];
        assert!(util.contains("some util content"));
        assert!(!util.contains("app.js.bak"));
    }

    #[test]
    fn test_split_sections_ignores_other_heading_depths() {
        let doc = "# top\n\n### three\n\n##### 2025-01-01T00:00:00.000Z\n";
        assert!(split_sections(doc).is_empty());
    }

    #[test]
    fn test_entry_heading_is_not_a_file_heading() {
        assert!(!is_file_heading("##### 2025-08-18T20:32:01.435Z"));
        assert!(is_file_heading("##   indented text"));
    }
}
