//! The narrow interface onto the host parser's concrete syntax tree.
//!
//! The extraction engine never owns a tree. It consumes a stream of
//! [`WalkEvent`]s — matching enter/leave pairs delivered in document
//! order, the standard depth-first walk primitive — over nodes that
//! expose only a kind label and a source span. Node text is sliced
//! separately through [`TextSource`], so the engine works against any
//! parser that can produce `(kind, from, to)` triples.

use crate::base::TextRange;

/// A single step of a depth-first tree walk.
///
/// Every node is announced twice: `Enter` before its children in
/// pre-order, `Leave` after them in post-order. Leaves still produce
/// both events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEvent<N> {
    /// Pre-order visit, before any child of the node.
    Enter(N),
    /// Post-order visit, after every child of the node.
    Leave(N),
}

impl<N> WalkEvent<N> {
    /// The node carried by this event, regardless of direction.
    pub fn node(&self) -> &N {
        match self {
            WalkEvent::Enter(n) | WalkEvent::Leave(n) => n,
        }
    }
}

/// A node of the collaborator's concrete syntax tree.
///
/// `PartialEq` must compare node identity: the `Leave` event for a node
/// must compare equal to its own `Enter` event and to no other node in
/// the same walk. The scope stack relies on this to avoid mismatched
/// pops between sibling constructs of the same kind.
pub trait CstNode: Clone + PartialEq {
    /// The grammar's label for this node kind (e.g. `"ClassDeclaration"`).
    fn kind(&self) -> &str;

    /// The node's span as byte offsets into the source document.
    fn range(&self) -> TextRange;
}

/// Read-only access to the source document behind the tree.
pub trait TextSource {
    /// The text covered by `range`, or `None` if the range falls outside
    /// the document or does not lie on character boundaries.
    fn text(&self, range: TextRange) -> Option<&str>;
}

impl TextSource for str {
    fn text(&self, range: TextRange) -> Option<&str> {
        self.get(usize::from(range.start())..usize::from(range.end()))
    }
}

impl TextSource for String {
    fn text(&self, range: TextRange) -> Option<&str> {
        self.as_str().text(range)
    }
}
