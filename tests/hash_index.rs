//! Integration tests for the content-hash index

use devlog::devlog::hash_index::{digest_hex, index_hashes};
use devlog::devlog::samples;

#[test]
fn test_index_covers_every_declared_line() {
    let index = index_hashes(samples::round_trip());
    let per_line = &index["app.js"];
    // The scope header declares lines 31-53; every one of them is covered
    // by the same block and shares its digest.
    for line in 31..=53 {
        assert!(per_line.contains_key(&line), "line {} missing", line);
        assert_eq!(per_line[&line], per_line[&31]);
    }
    assert!(!per_line.contains_key(&30));
    assert!(!per_line.contains_key(&54));
}

#[test]
fn test_editing_one_block_changes_exactly_its_lines() {
    let original = samples::multi_file();
    let edited = original.replace(
        "| 🔴12 | `return;` | `return res.json(payload);` |",
        "| 🔴12 | `return;` | `return res.status(204).end();` |",
    );
    assert_ne!(original, edited);

    let before = index_hashes(original);
    let after = index_hashes(&edited);

    // Only the edited section's lines move.
    let app_before = &before["/src/app.js"];
    let app_after = &after["/src/app.js"];
    for line in 10..=20 {
        assert_ne!(app_before[&line], app_after[&line]);
    }

    // The untouched sibling section is bit-identical.
    assert_eq!(before["/src/app.js.bak"], after["/src/app.js.bak"]);
}

#[test]
fn test_section_labels_are_heading_text_verbatim() {
    let index = index_hashes(samples::multi_file());
    assert!(index.contains_key("/src/app.js"));
    assert!(index.contains_key("/src/app.js.bak"));
    // The scopeless section still appears, with an empty per-line map.
    assert!(index.contains_key("/src/notes.md"));
    assert!(index["/src/notes.md"].is_empty());
}

#[test]
fn test_index_and_tree_parse_agree_on_the_dialect() {
    // The indexer is an independent pass, but it must recognize the same
    // change blocks the tree parser turns into scopes.
    let tree = devlog::devlog::parser::parse(samples::multi_file());
    let index = index_hashes(samples::multi_file());
    for file in &tree {
        let per_line = &index[&file.path];
        for scope in file.iter_scopes() {
            for line in scope.line_start..=scope.line_end {
                assert!(
                    per_line.contains_key(&line),
                    "{} line {} tracked by the tree but not the index",
                    file.path,
                    line
                );
            }
        }
    }
}

#[test]
fn test_whole_document_digest_as_cache_key() {
    let first = digest_hex(samples::round_trip());
    let second = digest_hex(samples::round_trip());
    assert_eq!(first, second);
    assert_ne!(first, digest_hex(samples::multi_file()));
}
