//! Built-in grammar profiles.
//!
//! Two common grammar families ship out of the box: a Lezer-style
//! JavaScript/TypeScript grammar and a Lezer-style Python grammar. Both are plain data; host applications with other grammars
//! build their own [`Profile`] the same way.

use super::{Profile, Role};

impl Profile {
    /// Profile for a Lezer-style JavaScript/TypeScript grammar.
    ///
    /// Declarations open scopes, `VariableDefinition`/`Identifier`
    /// identifiers name them, `PropertyDefinition` names class members,
    /// and `TypeDefinition` names interfaces. Class expressions may be
    /// anonymous, so unnamed class placeholders are finalized when their
    /// `ClassBody` is entered.
    pub fn javascript() -> Self {
        Profile::new("javascript")
            .with_role("FunctionDeclaration", Role::FunctionOpener)
            .with_roles(&["ClassDeclaration", "ClassExpression"], Role::ClassOpener)
            .with_role("InterfaceDeclaration", Role::InterfaceOpener)
            .with_role("MethodDeclaration", Role::MethodOpener)
            .with_roles(
                &["Property", "PropertyType", "PropertyDeclaration"],
                Role::PropertyOpener,
            )
            .with_roles(
                &["VariableDeclaration", "Declaration", "AssignStatement"],
                Role::AssignmentOpener,
            )
            .with_roles(
                &["VariableDefinition", "VariableName", "Identifier"],
                Role::NameCandidate,
            )
            .with_role("ClassBody", Role::ClassBodyMarker)
            .with_role("PropertyDefinition", Role::PropertyDefinitionMarker)
            .with_role("TypeDefinition", Role::TypeDefinitionMarker)
            .with_role("PropertyName", Role::PropertyNameMarker)
            .with_self_keyword("this")
            .with_member_assign_window([
                "AssignStatement",
                "MemberExpression",
                "VariableName",
                ".",
                "PropertyName",
            ])
            .with_anonymous_class_bodies(true)
            .with_root_property_definitions(true)
    }

    /// Profile for a Lezer-style Python grammar.
    ///
    /// `def` and `class` statements open scopes, `VariableName`
    /// identifiers name them, and `self.field = ...` assignments inside
    /// methods are reclassified onto the enclosing class. Python has no
    /// anonymous class form and no root-level property definitions.
    pub fn python() -> Self {
        Profile::new("python")
            .with_role("FunctionDefinition", Role::FunctionOpener)
            .with_role("ClassDefinition", Role::ClassOpener)
            .with_role("AssignStatement", Role::AssignmentOpener)
            .with_role("VariableName", Role::NameCandidate)
            .with_role("PropertyName", Role::PropertyNameMarker)
            .with_self_keyword("self")
            .with_member_assign_window([
                "AssignStatement",
                "MemberExpression",
                "VariableName",
                ".",
                "PropertyName",
            ])
    }
}
