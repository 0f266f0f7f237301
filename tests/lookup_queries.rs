//! Integration tests for line lookup over parsed trees

use devlog::devlog::ast::lookup::lookup;
use devlog::devlog::parser::parse;
use devlog::devlog::samples;

#[test]
fn test_round_trip_row_exact_hit() {
    let tree = parse(samples::round_trip());
    let result = lookup(&tree, "app.js", 34);

    let row = result.row.expect("line 34 has a recorded row");
    assert_eq!(row.highlight.as_deref(), Some("🟡"));
    assert_eq!(row.after, "res.send(x)");
    assert!(result
        .ai_insight()
        .expect("entry carries an insight")
        .contains("shared handler path"));
    assert_eq!(result.suggestions().len(), 2);
    assert_eq!(result.entry.unwrap().timestamp, "2025-08-18T20:32:01.435Z");
}

#[test]
fn test_in_range_without_row_is_scope_only() {
    let tree = parse(samples::round_trip());
    let result = lookup(&tree, "app.js", 50);

    let scope = result.scope.expect("line 50 is inside the scope range");
    assert_eq!(scope.name, "Global constants");
    assert!(result.entry.is_none());
    assert!(result.row.is_none());
    // The scope-level explanation is still reachable on a coarse hit.
    assert!(scope.explanation.is_some());
}

#[test]
fn test_outside_any_scope_is_all_absent() {
    let tree = parse(samples::round_trip());
    assert!(lookup(&tree, "app.js", 5).is_absent());
}

#[test]
fn test_unknown_path_is_all_absent() {
    let tree = parse(samples::round_trip());
    assert!(lookup(&tree, "missing.js", 34).is_absent());
}

#[test]
fn test_paths_are_matched_exactly_not_normalized() {
    let tree = parse(samples::multi_file());
    assert!(!lookup(&tree, "/src/app.js", 12).is_absent());
    assert!(lookup(&tree, "src/app.js", 12).is_absent());
    assert!(lookup(&tree, "app.js", 12).is_absent());
}

#[test]
fn test_longer_path_spelling_is_a_distinct_file() {
    let tree = parse(samples::multi_file());
    // /src/app.js and /src/app.js.bak both track line 12; each path hits
    // its own section.
    let app = lookup(&tree, "/src/app.js", 12);
    let bak = lookup(&tree, "/src/app.js.bak", 12);
    assert_eq!(app.row.unwrap().after, "return res.json(payload);");
    assert_eq!(bak.row.unwrap().after, "older");
}

#[test]
fn test_stale_change_count_does_not_affect_lookup() {
    let tree = parse(samples::malformed());
    // "Queue setup" declares 7 changes but records one row; the declared
    // count is metadata and the single row still resolves.
    let result = lookup(&tree, "/src/worker.js", 3);
    assert_eq!(result.scope.unwrap().change_count, 7);
    assert_eq!(result.row.unwrap().line, 3);
}

#[test]
fn test_row_outside_scope_range_does_not_crash_lookup() {
    let doc = "\
## /src/app.js

**Header block** | **Lines 10-20** | **1 change tracked**

##### 2025-08-22T10:00:00.000Z

| Line | Before | After |
|------|--------|-------|
| 99 | `a` | `b` |
";
    let tree = parse(doc);
    // The stray row's line is outside every scope range: all-absent, no
    // panic.
    assert!(lookup(&tree, "/src/app.js", 99).is_absent());
    // Inside the range the scope still resolves as a coarse hit.
    let result = lookup(&tree, "/src/app.js", 15);
    assert_eq!(result.scope.unwrap().name, "Header block");
    assert!(result.row.is_none());
}

#[test]
fn test_first_containing_scope_wins_on_overlap() {
    let doc = "\
## /src/app.js

**first** | **Lines 1-10** | **1 change tracked**

**second** | **Lines 5-15** | **1 change tracked**

##### 2025-08-22T10:00:00.000Z

| Line | Before | After |
|------|--------|-------|
| 7 | `x` | `y` |
";
    let tree = parse(doc);
    let result = lookup(&tree, "/src/app.js", 7);
    // Line 7 is in both ranges; the first scope is the candidate, and since
    // the row lives in the second scope the result is a coarse hit.
    assert_eq!(result.scope.unwrap().name, "first");
    assert!(result.row.is_none());
}

#[test]
fn test_first_file_wins_on_duplicate_paths() {
    let doc = "\
## /src/app.js

**early** | **Lines 1-5** | **1 change tracked**

## /src/app.js

**late** | **Lines 1-5** | **1 change tracked**
";
    let tree = parse(doc);
    assert_eq!(tree.len(), 2);
    let result = lookup(&tree, "/src/app.js", 3);
    assert_eq!(result.scope.unwrap().name, "early");
}
