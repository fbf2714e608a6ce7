//! The symbol resolver state machine.
//!
//! State is the arena, the scope stack, the rolling window, and the
//! collected diagnostics. Each enter event is dispatched by the role the
//! profile assigns to the node's kind: openers create placeholder
//! records, name candidates and the structural markers resolve them, and
//! `PropertyNameMarker` hands off to the self-assignment
//! reclassification heuristic.

use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::arena::{SymbolArena, SymbolId};
use super::diagnostics::Diagnostic;
use super::window::KindWindow;
use crate::profile::{Profile, Role};
use crate::symbol::{ANONYMOUS_CLASS, SymbolKind, SymbolNode};
use crate::tree::{CstNode, TextSource};

/// An open scope: the placeholder it created plus the node that opened
/// it, kept so the pop on leave is keyed by node identity, not by kind.
struct Scope<N> {
    symbol: SymbolId,
    node: N,
}

pub(crate) struct Resolver<'p, N> {
    profile: &'p Profile,
    arena: SymbolArena,
    scopes: Vec<Scope<N>>,
    window: KindWindow,
    diagnostics: Vec<Diagnostic>,
}

impl<'p, N: CstNode> Resolver<'p, N> {
    pub(crate) fn new(profile: &'p Profile) -> Self {
        Self {
            profile,
            arena: SymbolArena::new(),
            scopes: Vec::new(),
            window: KindWindow::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Process one enter event. An `Err` means this node's subtree
    /// cannot be processed (its text is unsliceable); the caller records
    /// the diagnostic and skips the subtree. State is only mutated after
    /// all fallible steps, so a failed enter leaves the machine intact.
    pub(crate) fn enter<T>(&mut self, node: &N, text: &T) -> Result<(), Diagnostic>
    where
        T: TextSource + ?Sized,
    {
        self.window.push(node.kind());

        let Some(role) = self.profile.classify(node.kind()) else {
            return Ok(());
        };

        match role {
            Role::FunctionOpener
            | Role::ClassOpener
            | Role::InterfaceOpener
            | Role::MethodOpener
            | Role::PropertyOpener
            | Role::AssignmentOpener => self.open(role, node),
            Role::NameCandidate => {
                let name = self.node_text(node, text)?;
                self.resolve_name(node, name);
            }
            Role::ClassBodyMarker => self.finalize_anonymous_class(),
            Role::PropertyDefinitionMarker => {
                let name = self.node_text(node, text)?;
                self.resolve_property_definition(name);
            }
            Role::TypeDefinitionMarker => {
                let name = self.node_text(node, text)?;
                self.resolve_type_definition(node, name);
            }
            Role::PropertyNameMarker => self.reclassify_self_assignment(node, text)?,
        }
        Ok(())
    }

    /// Process one leave event: pop the scope stack only if the leaving
    /// node is the very node that pushed it.
    pub(crate) fn leave(&mut self, node: &N) {
        if let Some(top) = self.scopes.last() {
            if &top.node == node {
                trace!(kind = node.kind(), "close scope");
                self.scopes.pop();
            }
        }
    }

    /// Record a diagnostic produced outside the resolver (subtree skips).
    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish the pass: resolve leftovers, convert the arena.
    pub(crate) fn finish(mut self) -> (Vec<SymbolNode>, Vec<Diagnostic>) {
        if !self.scopes.is_empty() {
            // A well-formed walk delivers matching leave events; if it
            // did not, report and clear rather than ship open scopes.
            warn!(open = self.scopes.len(), "walk ended with open scopes");
            for scope in self.scopes.drain(..) {
                self.diagnostics.push(
                    Diagnostic::warning(scope.node.range(), "scope was never closed")
                        .with_code("unbalanced-scope"),
                );
            }
        }
        let symbols = self.arena.into_forest();
        debug!(
            profile = self.profile.name(),
            roots = symbols.len(),
            diagnostics = self.diagnostics.len(),
            "outline extraction finished"
        );
        (symbols, self.diagnostics)
    }

    fn node_text<T>(&self, node: &N, text: &T) -> Result<SmolStr, Diagnostic>
    where
        T: TextSource + ?Sized,
    {
        match text.text(node.range()) {
            Some(s) => Ok(SmolStr::new(s.trim())),
            None => Err(Diagnostic::error(
                node.range(),
                format!("text for {} node is outside the document", node.kind()),
            )
            .with_code("bad-text-range")),
        }
    }

    /// Create a placeholder for an opener role and attach it to the
    /// current scope (or the root list). Function, class, interface and
    /// method openers push the scope stack; property and assignment
    /// openers stay pending children awaiting a name.
    fn open(&mut self, role: Role, node: &N) {
        let id = self.arena.alloc(role, node.range());
        let parent = self.scopes.last().map(|s| s.symbol);
        self.arena.attach(parent, id);
        if role.pushes_scope() {
            trace!(kind = node.kind(), "open scope");
            self.scopes.push(Scope {
                symbol: id,
                node: node.clone(),
            });
        }
    }

    /// Resolve an identifier against the nearest placeholder:
    /// the open scope itself, its pending last child, or (at the root)
    /// a trailing assignment placeholder.
    fn resolve_name(&mut self, node: &N, name: SmolStr) {
        if let Some(scope) = self.scopes.last() {
            let target = scope.symbol;
            if self.arena.is_unnamed(target) {
                if let Some(
                    role @ (Role::FunctionOpener | Role::ClassOpener | Role::InterfaceOpener),
                ) = self.arena.pending_role(target)
                {
                    let kind = match role {
                        Role::FunctionOpener => SymbolKind::Function,
                        Role::ClassOpener => SymbolKind::Class,
                        _ => SymbolKind::Interface,
                    };
                    trace!(name = %name, kind = %kind, "resolve scope name");
                    self.arena.resolve(target, name, kind);
                    return;
                }
            }
            if let Some(child) = self.arena.last_child(target) {
                if self.arena.is_unnamed(child)
                    && matches!(
                        self.arena.pending_role(child),
                        Some(Role::PropertyOpener | Role::AssignmentOpener)
                    )
                {
                    // A pending declaration inside a class or interface
                    // is a property; anywhere else it is a variable.
                    let kind = match self.arena.resolved_kind(target) {
                        Some(k) if k.is_container() => SymbolKind::Property,
                        _ => SymbolKind::Variable,
                    };
                    trace!(name = %name, kind = %kind, "resolve pending child");
                    self.arena.resolve(child, name, kind);
                    return;
                }
            }
            self.unresolved_name(node, &name);
        } else if let Some(root) = self.arena.last_root() {
            if self.arena.is_unnamed(root)
                && self.arena.pending_role(root) == Some(Role::AssignmentOpener)
            {
                trace!(name = %name, "resolve root assignment");
                self.arena.resolve(root, name, SymbolKind::Variable);
            } else {
                self.unresolved_name(node, &name);
            }
        } else {
            self.unresolved_name(node, &name);
        }
    }

    fn unresolved_name(&mut self, node: &N, name: &str) {
        warn!(name, "identifier has no placeholder to resolve");
        self.diagnostics.push(
            Diagnostic::warning(
                node.range(),
                format!("identifier `{name}` has no placeholder to resolve"),
            )
            .with_code("unresolved-name"),
        );
    }

    /// Class expressions can reach their body without a name token.
    /// When the profile opts in, finalize the placeholder with the
    /// anonymous-class sentinel instead of leaving it dangling.
    fn finalize_anonymous_class(&mut self) {
        if !self.profile.anonymous_class_bodies() {
            return;
        }
        let Some(scope) = self.scopes.last() else {
            return;
        };
        let target = scope.symbol;
        if self.arena.is_unnamed(target) && self.arena.pending_role(target) == Some(Role::ClassOpener)
        {
            debug!("finalizing anonymous class body");
            self.arena
                .resolve(target, SmolStr::new_static(ANONYMOUS_CLASS), SymbolKind::Class);
        }
    }

    /// A property-definition marker names either the pending property
    /// child of the open scope, or the open method scope itself.
    fn resolve_property_definition(&mut self, name: SmolStr) {
        if let Some(scope) = self.scopes.last() {
            let target = scope.symbol;
            if let Some(child) = self.arena.last_child(target) {
                if self.arena.is_unnamed(child)
                    && self.arena.pending_role(child) == Some(Role::PropertyOpener)
                {
                    trace!(name = %name, "resolve property definition");
                    self.arena.resolve(child, name, SymbolKind::Property);
                    return;
                }
            }
            if self.arena.is_unnamed(target)
                && self.arena.pending_role(target) == Some(Role::MethodOpener)
            {
                trace!(name = %name, "resolve method name");
                self.arena.resolve(target, name, SymbolKind::Method);
            }
        } else if self.profile.root_property_definitions() {
            if let Some(root) = self.arena.last_root() {
                if self.arena.is_unnamed(root)
                    && self.arena.pending_role(root) == Some(Role::PropertyOpener)
                {
                    trace!(name = %name, "resolve root property definition");
                    self.arena.resolve(root, name, SymbolKind::Property);
                }
            }
        }
    }

    /// A type-definition marker is only valid against an unnamed
    /// interface placeholder on top of the stack.
    fn resolve_type_definition(&mut self, node: &N, name: SmolStr) {
        if let Some(scope) = self.scopes.last() {
            let target = scope.symbol;
            if self.arena.is_unnamed(target)
                && self.arena.pending_role(target) == Some(Role::InterfaceOpener)
            {
                trace!(name = %name, "resolve interface name");
                self.arena.resolve(target, name, SymbolKind::Interface);
                return;
            }
        }
        warn!(name = %name, "type definition without interface placeholder");
        self.diagnostics.push(
            Diagnostic::warning(
                node.range(),
                format!("type definition `{name}` has no interface placeholder"),
            )
            .with_code("unresolved-type"),
        );
    }

    /// The self-assignment reclassification heuristic.
    ///
    /// Fires when the rolling window equals the profile's declared
    /// member-assignment sequence and the current scope's last child is
    /// a variable named by the self-reference keyword: that variable is
    /// relocated into the nearest class on the stack (searched from the
    /// top outward) as a property named by this node's text. The
    /// heuristic is pattern-based and simply stays quiet for member
    /// access shapes that do not match the declared window.
    fn reclassify_self_assignment<T>(&mut self, node: &N, text: &T) -> Result<(), Diagnostic>
    where
        T: TextSource + ?Sized,
    {
        let Some(pattern) = self.profile.member_assign_window() else {
            return Ok(());
        };
        if !self.window.matches(pattern) {
            return Ok(());
        }
        let Some(scope) = self.scopes.last() else {
            return Ok(());
        };
        let parent = scope.symbol;
        let Some(child) = self.arena.last_child(parent) else {
            return Ok(());
        };
        if self.arena.resolved_kind(child) != Some(SymbolKind::Variable)
            || self.arena.name(child) != Some(self.profile.self_keyword())
        {
            return Ok(());
        }
        // Not necessarily the immediate parent: the assignment sits in a
        // method or function scope nested inside the class.
        let Some(class) = self
            .scopes
            .iter()
            .rev()
            .map(|s| s.symbol)
            .find(|&id| self.arena.resolved_kind(id) == Some(SymbolKind::Class))
        else {
            return Ok(());
        };
        let name = self.node_text(node, text)?;
        debug!(property = %name, "reclassify self assignment into enclosing class");
        self.arena
            .relocate_last_child(parent, class, name, node.range());
        Ok(())
    }
}
