//! The self-assignment reclassification heuristic.

use crate::helpers::*;
use symtree::{Profile, SymbolKind};

/// `this.x = 1` inside a constructor: the member assignment tree, as a
/// JS-like grammar delivers it.
fn js_constructor_assignment() -> Vec<Node> {
    vec![node(
        "ClassDeclaration",
        0,
        42,
        vec![
            leaf("class", 0, 5),
            leaf("VariableDefinition", 6, 9),
            node(
                "ClassBody",
                10,
                42,
                vec![node(
                    "MethodDeclaration",
                    12,
                    40,
                    vec![
                        leaf("PropertyDefinition", 12, 23),
                        leaf("ParamList", 23, 25),
                        node(
                            "Block",
                            26,
                            40,
                            vec![node(
                                "AssignStatement",
                                28,
                                38,
                                vec![
                                    node(
                                        "MemberExpression",
                                        28,
                                        34,
                                        vec![
                                            leaf("VariableName", 28, 32),
                                            leaf(".", 32, 33),
                                            leaf("PropertyName", 33, 34),
                                        ],
                                    ),
                                    leaf("Equals", 35, 36),
                                    leaf("Number", 37, 38),
                                ],
                            )],
                        ),
                    ],
                )],
            ),
        ],
    )]
}

#[test]
fn test_this_assignment_becomes_class_property() {
    let source = "class Foo { constructor() { this.x = 1 } }";
    let outline = run(source, &js_constructor_assignment(), &Profile::javascript());

    let class = &outline.symbols[0];
    assert_eq!(class.name, "Foo");
    assert_eq!(names(&class.children), vec!["constructor", "x"]);

    let constructor = &class.children[0];
    assert_eq!(constructor.kind, SymbolKind::Method);
    // The `this` variable moved out of the constructor...
    assert!(constructor.children.is_empty());
    // ...and became a property of the class, ranged at the member name.
    let x = &class.children[1];
    assert_eq!(x.kind, SymbolKind::Property);
    assert_eq!(u32::from(x.range.start()), 33);
    assert_eq!(u32::from(x.range.end()), 34);
}

#[test]
fn test_python_self_assignment() {
    let source = "class C:\n    def __init__(self):\n        self.x = 1\n";
    let tree = [node(
        "ClassDefinition",
        0,
        51,
        vec![
            leaf("class", 0, 5),
            leaf("VariableName", 6, 7),
            node(
                "Body",
                8,
                51,
                vec![node(
                    "FunctionDefinition",
                    13,
                    51,
                    vec![
                        leaf("def", 13, 16),
                        leaf("VariableName", 17, 25),
                        node("ParamList", 25, 31, vec![leaf("VariableName", 26, 30)]),
                        node(
                            "Body",
                            31,
                            51,
                            vec![node(
                                "AssignStatement",
                                41,
                                51,
                                vec![
                                    node(
                                        "MemberExpression",
                                        41,
                                        47,
                                        vec![
                                            leaf("VariableName", 41, 45),
                                            leaf(".", 45, 46),
                                            leaf("PropertyName", 46, 47),
                                        ],
                                    ),
                                    leaf("AssignOp", 48, 49),
                                    leaf("Number", 50, 51),
                                ],
                            )],
                        ),
                    ],
                )],
            ),
        ],
    )];

    let outline = run(source, &tree, &Profile::python());

    let class = &outline.symbols[0];
    assert_eq!(class.name, "C");
    assert_eq!(names(&class.children), vec!["__init__", "x"]);
    assert_eq!(class.children[0].kind, SymbolKind::Function);
    assert_eq!(class.children[1].kind, SymbolKind::Property);
    assert!(class.children[0].children.is_empty());
}

#[test]
fn test_no_enclosing_class_leaves_variable_in_place() {
    // Same assignment shape, but inside a bare function.
    let source = "def f():\n    self.x = 1\n";
    let tree = [node(
        "FunctionDefinition",
        0,
        23,
        vec![
            leaf("def", 0, 3),
            leaf("VariableName", 4, 5),
            leaf("ParamList", 5, 7),
            node(
                "Body",
                7,
                23,
                vec![node(
                    "AssignStatement",
                    13,
                    23,
                    vec![
                        node(
                            "MemberExpression",
                            13,
                            19,
                            vec![
                                leaf("VariableName", 13, 17),
                                leaf(".", 17, 18),
                                leaf("PropertyName", 18, 19),
                            ],
                        ),
                        leaf("AssignOp", 20, 21),
                        leaf("Number", 22, 23),
                    ],
                )],
            ),
        ],
    )];

    let outline = run(source, &tree, &Profile::python());

    let f = &outline.symbols[0];
    assert_eq!(f.name, "f");
    // No class on the stack: the `self` variable stays where it was.
    assert_eq!(names(&f.children), vec!["self"]);
    assert_eq!(f.children[0].kind, SymbolKind::Variable);
}

#[test]
fn test_window_mismatch_suppresses_reclassification() {
    // An extra node between the assignment and the member expression
    // shifts the window off the declared pattern.
    let source = "class C:\n    def m(s):\n        self.x = 1\n";
    let tree = [node(
        "ClassDefinition",
        0,
        42,
        vec![
            leaf("class", 0, 5),
            leaf("VariableName", 6, 7),
            node(
                "Body",
                8,
                42,
                vec![node(
                    "FunctionDefinition",
                    13,
                    42,
                    vec![
                        leaf("def", 13, 16),
                        leaf("VariableName", 17, 18),
                        leaf("ParamList", 18, 21),
                        node(
                            "Body",
                            21,
                            42,
                            vec![node(
                                "AssignStatement",
                                31,
                                41,
                                vec![node(
                                    "ParenthesizedExpression",
                                    31,
                                    37,
                                    vec![node(
                                        "MemberExpression",
                                        31,
                                        37,
                                        vec![
                                            leaf("VariableName", 31, 35),
                                            leaf(".", 35, 36),
                                            leaf("PropertyName", 36, 37),
                                        ],
                                    )],
                                )],
                            )],
                        ),
                    ],
                )],
            ),
        ],
    )];

    let outline = run(source, &tree, &Profile::python());

    let class = &outline.symbols[0];
    let m = &class.children[0];
    // The heuristic stays quiet: `self` remains a variable in the method.
    assert_eq!(names(&m.children), vec!["self"]);
    assert_eq!(class.children.len(), 1);
}
