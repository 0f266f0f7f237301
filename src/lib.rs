//! # devlog
//!
//! A parser and query engine for devlog change-tracker documents.
//!
//! A devlog document is a markdown report that records, per source file and
//! per code scope, a timeline of line-level edits together with free-text
//! analysis. This crate turns such a document into a queryable in-memory
//! tree and can answer, for a file path and a line number, which tracked
//! change touches that line and what its narrative context is.
//!
//! The crate also provides an independent content-addressing pass that maps
//! every tracked line to a digest of the change block that produced it, so
//! callers can detect when a block's recorded content changes between two
//! document snapshots.

pub mod devlog;
