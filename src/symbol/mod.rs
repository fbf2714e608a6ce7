//! Output symbol forest.
//!
//! [`SymbolNode`] is the shape handed to the rendering collaborator: a
//! resolved name, a [`SymbolKind`], a stable source range for scroll-to
//! and selection highlighting, and children in document order.

use std::fmt;

use smol_str::SmolStr;

use crate::base::TextRange;

/// Sentinel name for a class expression that has a body but no name token.
pub const ANONYMOUS_CLASS: &str = "<class>";

/// Sentinel name for any entity that never received a name.
pub const ANONYMOUS: &str = "<anonymous>";

/// The resolved kind of an extracted symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymbolKind {
    Function,
    Class,
    Interface,
    Method,
    Property,
    Variable,
}

impl SymbolKind {
    /// Lowercase display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Interface => "interface",
            SymbolKind::Method => "method",
            SymbolKind::Property => "property",
            SymbolKind::Variable => "variable",
        }
    }

    /// Whether symbols of this kind may own properties of their own.
    pub fn is_container(&self) -> bool {
        matches!(self, SymbolKind::Class | SymbolKind::Interface)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved symbol in the outline forest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolNode {
    /// Symbol name, or an explicit anonymous sentinel.
    pub name: SmolStr,
    /// Resolved kind.
    pub kind: SymbolKind,
    /// Span of the defining node, as byte offsets into the source.
    pub range: TextRange,
    /// Child symbols in document order.
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    /// True if this node carries one of the anonymous sentinels rather
    /// than a name taken from the source.
    pub fn is_anonymous(&self) -> bool {
        self.name == ANONYMOUS || self.name == ANONYMOUS_CLASS
    }
}

/// Render a forest as an indented plain-text outline, one symbol per
/// line. Intended for logs and test assertions, not for the UI layer.
pub fn render_outline(symbols: &[SymbolNode]) -> String {
    let mut out = String::new();
    render_into(&mut out, symbols, 0);
    out
}

fn render_into(out: &mut String, symbols: &[SymbolNode], depth: usize) {
    for symbol in symbols {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&symbol.name);
        out.push_str(" (");
        out.push_str(symbol.kind.as_str());
        out.push_str(")\n");
        render_into(out, &symbol.children, depth + 1);
    }
}
