//! Grammar profiles.
//!
//! A [`Profile`] is the data that adapts the extraction engine to one
//! grammar: a table mapping the parser's node-kind labels to semantic
//! [`Role`]s, the grammar's self-reference keyword, the literal
//! kind-sequence pattern that identifies a member assignment, and two
//! behavior toggles that differ between grammars. The engine itself is
//! grammar-agnostic; swapping the profile is all it takes to serve a
//! different language.

mod builtin;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Length of the rolling window of recently seen node kinds, and
/// therefore of every member-assignment pattern a profile may declare.
pub const WINDOW_LEN: usize = 5;

/// Semantic role of a node kind, as declared by a [`Profile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Opens a function scope (pushes the scope stack).
    FunctionOpener,
    /// Opens a class scope (pushes the scope stack).
    ClassOpener,
    /// Opens an interface scope (pushes the scope stack).
    InterfaceOpener,
    /// Opens a method scope (pushes the scope stack).
    MethodOpener,
    /// Declares a property awaiting a name; does not push.
    PropertyOpener,
    /// Declares an assignment/variable awaiting a name; does not push.
    AssignmentOpener,
    /// An identifier that may name the nearest open placeholder.
    NameCandidate,
    /// A class body; finalizes an anonymous class placeholder.
    ClassBodyMarker,
    /// A property or method name inside a definition.
    PropertyDefinitionMarker,
    /// A type name resolving an interface placeholder.
    TypeDefinitionMarker,
    /// A member-access property name; may trigger reclassification.
    PropertyNameMarker,
}

impl Role {
    /// Whether this role creates a placeholder symbol on enter.
    pub fn is_opener(&self) -> bool {
        matches!(
            self,
            Role::FunctionOpener
                | Role::ClassOpener
                | Role::InterfaceOpener
                | Role::MethodOpener
                | Role::PropertyOpener
                | Role::AssignmentOpener
        )
    }

    /// Whether this role pushes the scope stack. Property and assignment
    /// openers stay pending children of the current scope instead.
    pub fn pushes_scope(&self) -> bool {
        matches!(
            self,
            Role::FunctionOpener | Role::ClassOpener | Role::InterfaceOpener | Role::MethodOpener
        )
    }
}

/// Configuration mapping one grammar onto the extraction engine.
///
/// Built with the `with_*` methods, or taken ready-made from
/// [`Profile::javascript`] / [`Profile::python`].
#[derive(Clone, Debug)]
pub struct Profile {
    name: SmolStr,
    roles: FxHashMap<SmolStr, Role>,
    self_keyword: SmolStr,
    member_assign_window: Option<[SmolStr; WINDOW_LEN]>,
    anonymous_class_bodies: bool,
    root_property_definitions: bool,
}

impl Profile {
    /// An empty profile. Classifies nothing until roles are added.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            roles: FxHashMap::default(),
            self_keyword: SmolStr::new_static("self"),
            member_assign_window: None,
            anonymous_class_bodies: false,
            root_property_definitions: false,
        }
    }

    /// Map a single node-kind label to a role.
    pub fn with_role(mut self, kind: &str, role: Role) -> Self {
        self.roles.insert(SmolStr::new(kind), role);
        self
    }

    /// Map several node-kind labels to the same role.
    pub fn with_roles(mut self, kinds: &[&str], role: Role) -> Self {
        for kind in kinds {
            self.roles.insert(SmolStr::new(kind), role);
        }
        self
    }

    /// Set the grammar's self-reference keyword (`self`, `this`, ...).
    pub fn with_self_keyword(mut self, keyword: &str) -> Self {
        self.self_keyword = SmolStr::new(keyword);
        self
    }

    /// Declare the literal kind sequence that identifies a member
    /// assignment (`self.field = ...`). The reclassification pass only
    /// fires when the rolling window matches this exactly.
    pub fn with_member_assign_window(mut self, kinds: [&str; WINDOW_LEN]) -> Self {
        self.member_assign_window = Some(kinds.map(SmolStr::new));
        self
    }

    /// Enable finalizing unnamed class placeholders when their body is
    /// entered (class expressions with a body but no name token).
    pub fn with_anonymous_class_bodies(mut self, enabled: bool) -> Self {
        self.anonymous_class_bodies = enabled;
        self
    }

    /// Enable resolving property-definition markers against a trailing
    /// root-level property placeholder (grammars where properties can
    /// appear outside any open scope).
    pub fn with_root_property_definitions(mut self, enabled: bool) -> Self {
        self.root_property_definitions = enabled;
        self
    }

    /// Look up the role of a node-kind label. `None` means the kind is
    /// unclassified and the engine ignores it.
    pub fn classify(&self, kind: &str) -> Option<Role> {
        self.roles.get(kind).copied()
    }

    /// Profile name, for logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grammar's self-reference keyword.
    pub fn self_keyword(&self) -> &str {
        &self.self_keyword
    }

    /// The declared member-assignment pattern, if any.
    pub fn member_assign_window(&self) -> Option<&[SmolStr; WINDOW_LEN]> {
        self.member_assign_window.as_ref()
    }

    /// Whether anonymous class bodies are finalized (see
    /// [`Self::with_anonymous_class_bodies`]).
    pub fn anonymous_class_bodies(&self) -> bool {
        self.anonymous_class_bodies
    }

    /// Whether root-level property definitions are resolved (see
    /// [`Self::with_root_property_definitions`]).
    pub fn root_property_definitions(&self) -> bool {
        self.root_property_definitions
    }
}
