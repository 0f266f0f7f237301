//! Canonical sample documents for testing
//!
//! These samples are the only canonical devlog sources for tests. Unit and
//! integration tests should consume them through the accessors here instead
//! of copying document text around, so every test exercises the same
//! dialect.

/// One file, one scope, one entry: the full round-trip shape of the dialect.
pub const ROUND_TRIP: &str = "\
# Devlog

## app.js

**Global constants** | **Lines 31-53** | **2 change tracked**

**Explanation**
Centralizes the express route constants so handlers stay consistent.

##### 2025-08-18T20:32:01.435Z

| Line | Before | After |
|------|--------|-------|
| 32 | `});` | `});` |
| 🟡34 | `});` | `res.send(x)` |

**AI Insight**
The response is now sent from the shared handler path.

**Suggestions**
- Add a regression test for the handler
- Extract the send call into a helper
";

/// Three file sections in a fixed order, including a heading that is a
/// longer spelling of another file's name and a section with no scopes.
pub const MULTI_FILE: &str = "\
# Devlog

## /src/app.js

**Request handlers** | **Lines 10-20** | **1 change tracked**

##### 2025-08-19T09:15:44.120Z

| Line | Before | After |
|------|--------|-------|
| 🔴12 | `return;` | `return res.json(payload);` |

## /src/app.js.bak

**Stale copy** | **Lines 10-20** | **1 change tracked**

##### 2025-08-01T00:00:00.000Z

| Line | Before | After |
|------|--------|-------|
| 12 | `old` | `older` |

## /src/notes.md

This file is tracked but has no scopes yet.
";

/// Structures the tolerant parser must skip or survive: a garbled scope
/// header, a malformed table row, an entry with no rows, a scope with no
/// entries, and a stale declared change count.
pub const MALFORMED: &str = "\
## /src/worker.js

**Broken header** | **Lines 1-4**

**Queue setup** | **Lines 1-9** | **7 change tracked**

##### 2025-08-20T11:00:00.000Z

| Line | Before | After |
|------|--------|-------|
| oops | `a` | `b` |
| 🟢3 | `` | `const queue = [];` |

**Idle scope** | **Lines 40-44** | **0 change tracked**

##### 2025-08-20T11:05:00.000Z

| Line | Before | After |

**Empty scope** | **Lines 60-61** | **1 change tracked**
";

/// A free-text block whose body contains bold text shaped like structure.
pub const BOLD_IN_BLOCK: &str = "\
## /src/app.js

**Render loop** | **Lines 5-9** | **1 change tracked**

##### 2025-08-21T08:30:12.002Z

| Line | Before | After |
|------|--------|-------|
| 7 | `draw()` | `requestAnimationFrame(draw)` |

**AI Insight**
Note that **Lines 5-9** above stay hot; the **bold** text in this
paragraph is prose, not a new block.
";

pub fn round_trip() -> &'static str {
    ROUND_TRIP
}

pub fn multi_file() -> &'static str {
    MULTI_FILE
}

pub fn malformed() -> &'static str {
    MALFORMED
}

pub fn bold_in_block() -> &'static str {
    BOLD_IN_BLOCK
}
