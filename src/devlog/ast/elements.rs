//! Element definitions for the devlog tree
//!
//! A parsed document is a three-level tree:
//!
//! TrackedFile -> Scope -> Entry -> Row
//!
//! Every element is read-only once constructed. A repeated parse of the same
//! text produces a fresh tree; nothing is ever mutated in place, so a tree
//! can be shared freely across concurrent read-only lookups.

pub mod entry;
pub mod row;
pub mod scope;
pub mod tracked_file;

// Re-export all element types
pub use entry::Entry;
pub use row::Row;
pub use scope::Scope;
pub use tracked_file::TrackedFile;
