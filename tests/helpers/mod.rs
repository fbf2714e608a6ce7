//! Shared helpers for symtree integration tests.

pub mod outline_assertions;
pub mod tree_builder;

pub use outline_assertions::*;
pub use tree_builder::*;
