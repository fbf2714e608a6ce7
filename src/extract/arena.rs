//! Construction-time arena of symbol records.
//!
//! During the pass every symbol lives in the arena and is addressed by a
//! [`SymbolId`] index. The scope stack and children lists hold ids, never
//! references, so the reclassification pass can move a record between
//! parents as a pure index move. Records are never deleted: whatever the
//! pass created ends up in the final forest, named or carrying an
//! anonymous sentinel.

use smol_str::SmolStr;

use crate::base::TextRange;
use crate::profile::Role;
use crate::symbol::{ANONYMOUS, SymbolKind, SymbolNode};

/// Index of a symbol record in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct SymbolId(u32);

impl SymbolId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind state of a record: the opener role it was created from, until a
/// resolution rule assigns a definite [`SymbolKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RecordKind {
    Pending(Role),
    Resolved(SymbolKind),
}

#[derive(Clone, Debug)]
pub(crate) struct SymbolRecord {
    name: Option<SmolStr>,
    kind: RecordKind,
    range: TextRange,
    children: Vec<SymbolId>,
    relocated: bool,
}

/// Vec-backed store of symbol records plus the root list.
#[derive(Debug, Default)]
pub(crate) struct SymbolArena {
    records: Vec<SymbolRecord>,
    roots: Vec<SymbolId>,
}

impl SymbolArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a placeholder record for an opener role.
    pub(crate) fn alloc(&mut self, opener: Role, range: TextRange) -> SymbolId {
        debug_assert!(opener.is_opener());
        let id = SymbolId(self.records.len() as u32);
        self.records.push(SymbolRecord {
            name: None,
            kind: RecordKind::Pending(opener),
            range,
            children: Vec::new(),
            relocated: false,
        });
        id
    }

    /// Append `id` to `parent`'s children, or to the root list.
    pub(crate) fn attach(&mut self, parent: Option<SymbolId>, id: SymbolId) {
        match parent {
            Some(parent) => self.records[parent.index()].children.push(id),
            None => self.roots.push(id),
        }
    }

    pub(crate) fn last_root(&self) -> Option<SymbolId> {
        self.roots.last().copied()
    }

    pub(crate) fn last_child(&self, parent: SymbolId) -> Option<SymbolId> {
        self.records[parent.index()].children.last().copied()
    }

    pub(crate) fn name(&self, id: SymbolId) -> Option<&str> {
        self.records[id.index()].name.as_deref()
    }

    pub(crate) fn is_unnamed(&self, id: SymbolId) -> bool {
        self.records[id.index()].name.is_none()
    }

    /// The opener role of a still-pending record.
    pub(crate) fn pending_role(&self, id: SymbolId) -> Option<Role> {
        match self.records[id.index()].kind {
            RecordKind::Pending(role) => Some(role),
            RecordKind::Resolved(_) => None,
        }
    }

    pub(crate) fn resolved_kind(&self, id: SymbolId) -> Option<SymbolKind> {
        match self.records[id.index()].kind {
            RecordKind::Resolved(kind) => Some(kind),
            RecordKind::Pending(_) => None,
        }
    }

    /// Give a record its final name and kind.
    pub(crate) fn resolve(&mut self, id: SymbolId, name: SmolStr, kind: SymbolKind) {
        let record = &mut self.records[id.index()];
        record.name = Some(name);
        record.kind = RecordKind::Resolved(kind);
    }

    /// Move `from`'s last child under `to`, rewriting it as a property.
    /// A record is relocated at most once over its lifetime.
    pub(crate) fn relocate_last_child(
        &mut self,
        from: SymbolId,
        to: SymbolId,
        name: SmolStr,
        range: TextRange,
    ) {
        let Some(child) = self.records[from.index()].children.pop() else {
            return;
        };
        let record = &mut self.records[child.index()];
        debug_assert!(!record.relocated);
        record.name = Some(name);
        record.kind = RecordKind::Resolved(SymbolKind::Property);
        record.range = range;
        record.relocated = true;
        self.records[to.index()].children.push(child);
    }

    /// Convert the arena into the owned output forest. Records that were
    /// never resolved get the anonymous sentinel and the kind implied by
    /// their opener role.
    pub(crate) fn into_forest(self) -> Vec<SymbolNode> {
        self.roots.iter().map(|&id| self.build(id)).collect()
    }

    fn build(&self, id: SymbolId) -> SymbolNode {
        let record = &self.records[id.index()];
        SymbolNode {
            name: record
                .name
                .clone()
                .unwrap_or_else(|| SmolStr::new_static(ANONYMOUS)),
            kind: match record.kind {
                RecordKind::Resolved(kind) => kind,
                RecordKind::Pending(role) => default_kind(role),
            },
            range: record.range,
            children: record.children.iter().map(|&c| self.build(c)).collect(),
        }
    }
}

/// The kind an opener role falls back to when nothing ever resolved it.
fn default_kind(role: Role) -> SymbolKind {
    match role {
        Role::FunctionOpener => SymbolKind::Function,
        Role::ClassOpener => SymbolKind::Class,
        Role::InterfaceOpener => SymbolKind::Interface,
        Role::MethodOpener => SymbolKind::Method,
        Role::PropertyOpener => SymbolKind::Property,
        // Only openers ever allocate records.
        _ => SymbolKind::Variable,
    }
}
