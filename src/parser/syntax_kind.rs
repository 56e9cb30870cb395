//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the Java syntax
//! tree. Node kinds reuse the token names of the host checker
//! (`METHOD_DEF`, `CTOR_DEF`, `LITERAL_CATCH`, `FOR_EACH_CLAUSE`, ...) so that
//! configuration files can name them directly.

/// All syntax kinds (tokens and nodes) in Java source
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (type declarations, methods, statements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    NUMBER,
    STRING,
    TEXT_BLOCK,
    CHAR,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,    // {
    R_BRACE,    // }
    L_BRACKET,  // [
    R_BRACKET,  // ]
    L_PAREN,    // (
    R_PAREN,    // )
    SEMICOLON,  // ;
    COMMA,      // ,
    DOT,        // .
    ELLIPSIS,   // ...
    AT,         // @
    COLON,      // :
    COLON_COLON, // ::
    QUESTION,   // ?
    ARROW,      // ->
    EQ,         // =
    LT,         // <
    GT,         // >  (never merged, so `>>` closes two type argument lists)
    AMP,        // &
    PIPE,       // |
    OPERATOR,   // any other operator: + - == && <<= ...

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // Modifiers
    ABSTRACT_KW,
    FINAL_KW,
    STATIC_KW,
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    SYNCHRONIZED_KW,
    NATIVE_KW,
    TRANSIENT_KW,
    VOLATILE_KW,
    STRICTFP_KW,
    DEFAULT_KW,

    // Declarations
    PACKAGE_KW,
    IMPORT_KW,
    CLASS_KW,
    INTERFACE_KW,
    ENUM_KW,
    EXTENDS_KW,
    IMPLEMENTS_KW,
    THROWS_KW,
    VOID_KW,

    // Statements
    TRY_KW,
    CATCH_KW,
    FINALLY_KW,
    FOR_KW,
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    DO_KW,
    SWITCH_KW,
    CASE_KW,
    RETURN_KW,
    THROW_KW,
    BREAK_KW,
    CONTINUE_KW,
    ASSERT_KW,

    // Expressions
    NEW_KW,
    THIS_KW,
    SUPER_KW,
    NULL_KW,
    TRUE_KW,
    FALSE_KW,
    INSTANCEOF_KW,

    // Primitive types
    BYTE_KW,
    SHORT_KW,
    INT_KW,
    LONG_KW,
    FLOAT_KW,
    DOUBLE_KW,
    BOOLEAN_KW,
    CHAR_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    COMPILATION_UNIT,
    PACKAGE_DEF,
    IMPORT,

    // Type declarations
    CLASS_DEF,
    INTERFACE_DEF,
    ENUM_DEF,
    RECORD_DEF,
    ANNOTATION_DEF,
    RECORD_COMPONENTS,
    TYPE_HEADER,
    OBJBLOCK,

    // Members
    MODIFIERS,
    ANNOTATION,
    TYPE_PARAMETERS,
    METHOD_DEF,
    CTOR_DEF,
    COMPACT_CTOR_DEF,
    ANNOTATION_FIELD_DEF,
    FIELD_DEF,
    ENUM_CONSTANT_DEF,
    STATIC_INIT,
    INSTANCE_INIT,
    PARAMETERS,
    PARAMETER_DEF,
    THROWS,

    // Types
    TYPE,
    TYPE_ARGUMENTS,
    ARRAY_DECLARATOR,

    // Statements
    BLOCK,
    STATEMENT,
    LABELED_STMT,
    IF_STMT,
    WHILE_STMT,
    DO_STMT,
    SWITCH_STMT,
    SWITCH_LABEL,
    SYNCHRONIZED_STMT,
    TRY_STMT,
    RESOURCES,
    LITERAL_CATCH,
    FINALLY_CLAUSE,
    FOR_STMT,
    FOR_HEADER,
    FOR_EACH_CLAUSE,
    VARIABLE_DEF,
    EXPR,

    // Error recovery
    ERROR,

    __LAST,
}

impl SyntaxKind {
    /// The eight primitive type keywords
    pub const PRIMITIVE_TYPES: [SyntaxKind; 8] = [
        SyntaxKind::BYTE_KW,
        SyntaxKind::SHORT_KW,
        SyntaxKind::INT_KW,
        SyntaxKind::LONG_KW,
        SyntaxKind::FLOAT_KW,
        SyntaxKind::DOUBLE_KW,
        SyntaxKind::BOOLEAN_KW,
        SyntaxKind::CHAR_KW,
    ];

    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::CHAR_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::OPERATOR as u16)
    }

    /// Check if this is one of the primitive type keywords
    pub fn is_primitive_type(self) -> bool {
        Self::PRIMITIVE_TYPES.contains(&self)
    }

    /// Check if this keyword can appear in a modifier list
    pub fn is_modifier_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::DEFAULT_KW as u16)
    }

    /// Check if this is a composite (node) kind rather than a token
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::COMPILATION_UNIT as u16) && (self as u16) <= (Self::ERROR as u16)
    }

    /// The token name used in configuration files, e.g. `METHOD_DEF`
    pub fn name(self) -> String {
        format!("{:?}", self)
    }

    /// Look up a kind by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        (0..Self::__LAST as u16)
            .map(|raw| Self::from(rowan::SyntaxKind(raw)))
            .find(|kind| kind.name() == name)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaLanguage {}

impl rowan::Language for JavaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<JavaLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<JavaLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<JavaLanguage>;
