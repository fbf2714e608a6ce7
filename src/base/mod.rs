//! Foundation types for the symtree crate.
//!
//! - [`TextRange`], [`TextSize`] - source positions (byte offsets)
//! - [`span`] - shorthand range constructor
//!
//! This module has NO dependencies on other symtree modules.

mod span;

pub use span::{TextRange, TextSize, span};

// Re-export text-size for convenience
pub use text_size;
