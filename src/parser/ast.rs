//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access the
//! children the checks care about. Only the declarations that carry
//! parameter-like bindings get wrappers; everything else is navigated
//! through the raw [`SyntaxNode`].

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $($kind:ident)|+) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                matches!(kind, $(SyntaxKind::$kind)|+)
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// First direct child token of `kind`
fn child_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// Whether any token of `kind` appears anywhere under `node`
fn has_descendant_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// Earliest non-trivia token under `node`
pub fn first_significant_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| !t.kind().is_trivia())
}

// ============================================================================
// Root
// ============================================================================

ast_node!(CompilationUnit, COMPILATION_UNIT);

impl CompilationUnit {
    /// Top-level type declarations
    pub fn type_declarations(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children().filter(|n| {
            matches!(
                n.kind(),
                SyntaxKind::CLASS_DEF
                    | SyntaxKind::INTERFACE_DEF
                    | SyntaxKind::ENUM_DEF
                    | SyntaxKind::RECORD_DEF
                    | SyntaxKind::ANNOTATION_DEF
            )
        })
    }
}

// ============================================================================
// Methods and constructors
// ============================================================================

ast_node!(MethodLike, METHOD_DEF | CTOR_DEF);

impl MethodLike {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    pub fn parameters(&self) -> Option<Parameters> {
        self.0.children().find_map(Parameters::cast)
    }

    pub fn name(&self) -> Option<String> {
        child_token(&self.0, SyntaxKind::IDENT).map(|t| t.text().to_string())
    }

    /// Whether any parameter binding appears in this definition's subtree.
    ///
    /// This looks at the whole subtree, so a parameterless method whose body
    /// declares a method with parameters (in an anonymous class) answers true.
    pub fn has_parameter_defs(&self) -> bool {
        self.0
            .descendants()
            .any(|n| n.kind() == SyntaxKind::PARAMETER_DEF)
    }
}

ast_node!(Modifiers, MODIFIERS);

impl Modifiers {
    pub fn is_abstract(&self) -> bool {
        has_descendant_token(&self.0, SyntaxKind::ABSTRACT_KW)
    }
}

ast_node!(Parameters, PARAMETERS);

impl Parameters {
    /// Parameter bindings in source order, separators skipped
    pub fn params(&self) -> impl Iterator<Item = Binding> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::PARAMETER_DEF)
            .filter_map(Binding::cast)
    }
}

// ============================================================================
// Bindings
// ============================================================================

ast_node!(Binding, PARAMETER_DEF | VARIABLE_DEF);

impl Binding {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    /// The identifier token naming the binding
    pub fn name_token(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::IDENT)
    }

    /// Whether array brackets follow the name, as in `int x[]`
    pub fn has_trailing_dims(&self) -> bool {
        child_token(&self.0, SyntaxKind::L_BRACKET).is_some()
    }

    /// Whether `final` appears anywhere in the binding
    pub fn is_final(&self) -> bool {
        has_descendant_token(&self.0, SyntaxKind::FINAL_KW)
    }

    /// The earliest source token of the binding
    pub fn first_token(&self) -> Option<SyntaxToken> {
        first_significant_token(&self.0)
    }
}

ast_node!(TypeRef, TYPE);

impl TypeRef {
    /// Kind of the first child element: a primitive keyword, `ARRAY_DECLARATOR`,
    /// `IDENT` or `VOID_KW`.
    pub fn first_child_kind(&self) -> Option<SyntaxKind> {
        self.0
            .children_with_tokens()
            .map(|e| e.kind())
            .find(|k| !k.is_trivia())
    }

    pub fn is_primitive(&self) -> bool {
        self.first_child_kind()
            .is_some_and(SyntaxKind::is_primitive_type)
    }
}

// ============================================================================
// Single-binding clauses
// ============================================================================

ast_node!(CatchClause, LITERAL_CATCH);

impl CatchClause {
    pub fn parameter(&self) -> Option<Binding> {
        self.0.children().find_map(Binding::cast)
    }
}

ast_node!(ForEachClause, FOR_EACH_CLAUSE);

impl ForEachClause {
    pub fn variable(&self) -> Option<Binding> {
        self.0.children().find_map(Binding::cast)
    }
}
