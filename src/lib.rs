//! # symtree
//!
//! Hierarchical symbol outline extraction from concrete syntax trees.
//!
//! Given the depth-first walk of a parser's concrete syntax tree and a
//! [`Profile`] describing that grammar's node-kind labels, a single
//! synchronous pass produces an ordered forest of [`SymbolNode`]s
//! (functions, classes, interfaces, methods, properties, variables)
//! suitable for a navigable outline next to the source document.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract   → traversal engine, symbol resolver, diagnostics
//!   ↓
//! profile   → grammar profiles (node-kind label → semantic role)
//!   ↓
//! symbol    → output forest types, construction arena
//!   ↓
//! tree      → collaborator interface (WalkEvent, CstNode, TextSource)
//!   ↓
//! base      → primitives (TextRange, TextSize)
//! ```
//!
//! The crate owns only the tree-to-outline conversion. Parsing belongs to
//! the host editor's incremental parser, and rendering (expand/collapse,
//! click/hover, layout) belongs to the consumer of the forest; both talk
//! to this crate through the narrow seams in [`tree`].

/// Foundation types: TextRange, TextSize
pub mod base;

/// Collaborator interface: walk events, node and text access traits
pub mod tree;

/// Output forest: symbol kinds and nodes
pub mod symbol;

/// Grammar profiles: node-kind label classification
pub mod profile;

/// Extraction: traversal engine, resolver state machine, diagnostics
pub mod extract;

// Re-export foundation types
pub use base::{TextRange, TextSize};

// Re-export the public surface
pub use extract::{
    Diagnostic, ExtractError, ExtractOptions, Extractor, Outline, Severity, extract,
};
pub use profile::{Profile, Role};
pub use symbol::{SymbolKind, SymbolNode, render_outline};
pub use tree::{CstNode, TextSource, WalkEvent};
