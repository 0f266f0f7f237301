//! Tree definitions and utilities for the devlog format
//!
//! This module provides the entity tree a parsed document is assembled into,
//! along with line-based lookup over that tree and the error types shared
//! across the crate.
//!
//! ## Modules
//!
//! - `elements` - entity type definitions organized by element type
//! - `lookup` - line-based lookup over a parsed tree
//! - `error` - error types for range parsing

pub mod elements;
pub mod error;
pub mod lookup;

// Re-export commonly used types at module root
pub use elements::{Entry, Row, Scope, TrackedFile};
pub use error::RangeError;
pub use lookup::{format_at_line, lookup, LookupResult};
