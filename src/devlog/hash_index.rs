//! Content hashing of change blocks
//!
//! An independent, coarser pass over the same document text: instead of
//! building the entity tree, it maps every tracked line to a digest of the
//! raw change block that produced it. Two snapshots of a document can then
//! be diffed per line: a differing hash means the tracked content for that
//! line changed.
//!
//! A change block opens at any line carrying
//! `**Lines <range>** | **<n> change tracked**` (scope header lines qualify,
//! since they embed exactly that form) and runs to the next such line or the
//! end of the file section. The digest covers the exact raw text of the
//! block including its header line.
//!
//! Policies:
//! - Lines covered by one block share that block's digest.
//! - When ranges overlap within one section, the later block wins.
//! - A block whose range token is malformed is skipped; the rest of the
//!   index is unaffected.

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::devlog::range::parse_line_range;
use crate::devlog::section;

/// Change-block opener, matched anywhere in a line
static CHANGE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Lines ([0-9,\-]+)\*\* \| \*\*\d+ change tracked\*\*").unwrap());

/// Hex-encoded SHA-256 digest of `text`.
///
/// Also suitable as a cache key for a whole parsed document: callers that
/// query an unchanging document repeatedly can key their parsed tree by the
/// digest of the full text.
pub fn digest_hex(text: &str) -> String {
    Sha256::digest(text.as_bytes())
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Index every file section's change blocks by line number.
///
/// Returns section label (the `##` heading text, trimmed) -> line number ->
/// hex digest of the block covering that line.
pub fn index_hashes(document: &str) -> BTreeMap<String, BTreeMap<u32, String>> {
    let mut index: BTreeMap<String, BTreeMap<u32, String>> = BTreeMap::new();
    for (label, span) in section::split_sections(document) {
        let lines: Vec<&str> = document[span].lines().collect();
        let starts: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| CHANGE_BLOCK.is_match(line))
            .map(|(i, _)| i)
            .collect();

        let per_line = index.entry(label).or_default();
        for (k, &start) in starts.iter().enumerate() {
            let end = starts.get(k + 1).copied().unwrap_or(lines.len());
            let caps = match CHANGE_BLOCK.captures(lines[start]) {
                Some(caps) => caps,
                None => continue,
            };
            let numbers = match caps.get(1).map(|m| parse_line_range(m.as_str())) {
                Some(Ok(numbers)) => numbers,
                _ => continue,
            };
            let digest = digest_hex(&lines[start..end].join("\n"));
            for number in numbers {
                per_line.insert(number, digest.clone());
            }
        }
    }
    index
}
