//! Logos-based lexer for Java
//!
//! Fast, lossless tokenization using the logos crate. Every byte of the input
//! ends up in exactly one token; unrecognized input becomes `ERROR`.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*[lLfFdD]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    #[regex(r"0[bB][01_]+[lL]?")]
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    String,

    #[regex(r#""""([^"\\]|\\.|"[^"\\]|""[^"\\])*""""#)]
    TextBlock,

    #[regex(r"'([^'\\\r\n]|\\.)+'")]
    Char,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("...")]
    Ellipsis,

    #[token("::")]
    ColonColon,

    #[token("->")]
    Arrow,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("@")]
    At,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token("=")]
    Eq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<")]
    #[token("<<=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("^")]
    #[token("!")]
    #[token("~")]
    Operator,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("final")]
    FinalKw,
    #[token("static")]
    StaticKw,
    #[token("public")]
    PublicKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("synchronized")]
    SynchronizedKw,
    #[token("native")]
    NativeKw,
    #[token("transient")]
    TransientKw,
    #[token("volatile")]
    VolatileKw,
    #[token("strictfp")]
    StrictfpKw,
    #[token("default")]
    DefaultKw,
    #[token("package")]
    PackageKw,
    #[token("import")]
    ImportKw,
    #[token("class")]
    ClassKw,
    #[token("interface")]
    InterfaceKw,
    #[token("enum")]
    EnumKw,
    #[token("extends")]
    ExtendsKw,
    #[token("implements")]
    ImplementsKw,
    #[token("throws")]
    ThrowsKw,
    #[token("void")]
    VoidKw,
    #[token("try")]
    TryKw,
    #[token("catch")]
    CatchKw,
    #[token("finally")]
    FinallyKw,
    #[token("for")]
    ForKw,
    #[token("if")]
    IfKw,
    #[token("else")]
    ElseKw,
    #[token("while")]
    WhileKw,
    #[token("do")]
    DoKw,
    #[token("switch")]
    SwitchKw,
    #[token("case")]
    CaseKw,
    #[token("return")]
    ReturnKw,
    #[token("throw")]
    ThrowKw,
    #[token("break")]
    BreakKw,
    #[token("continue")]
    ContinueKw,
    #[token("assert")]
    AssertKw,
    #[token("new")]
    NewKw,
    #[token("this")]
    ThisKw,
    #[token("super")]
    SuperKw,
    #[token("null")]
    NullKw,
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("instanceof")]
    InstanceofKw,
    #[token("byte")]
    ByteKw,
    #[token("short")]
    ShortKw,
    #[token("int")]
    IntKw,
    #[token("long")]
    LongKw,
    #[token("float")]
    FloatKw,
    #[token("double")]
    DoubleKw,
    #[token("boolean")]
    BooleanKw,
    #[token("char")]
    CharKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,
            TextBlock => SyntaxKind::TEXT_BLOCK,
            Char => SyntaxKind::CHAR,

            Ellipsis => SyntaxKind::ELLIPSIS,
            ColonColon => SyntaxKind::COLON_COLON,
            Arrow => SyntaxKind::ARROW,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            At => SyntaxKind::AT,
            Colon => SyntaxKind::COLON,
            Question => SyntaxKind::QUESTION,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Operator => SyntaxKind::OPERATOR,

            AbstractKw => SyntaxKind::ABSTRACT_KW,
            FinalKw => SyntaxKind::FINAL_KW,
            StaticKw => SyntaxKind::STATIC_KW,
            PublicKw => SyntaxKind::PUBLIC_KW,
            PrivateKw => SyntaxKind::PRIVATE_KW,
            ProtectedKw => SyntaxKind::PROTECTED_KW,
            SynchronizedKw => SyntaxKind::SYNCHRONIZED_KW,
            NativeKw => SyntaxKind::NATIVE_KW,
            TransientKw => SyntaxKind::TRANSIENT_KW,
            VolatileKw => SyntaxKind::VOLATILE_KW,
            StrictfpKw => SyntaxKind::STRICTFP_KW,
            DefaultKw => SyntaxKind::DEFAULT_KW,
            PackageKw => SyntaxKind::PACKAGE_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            ThrowsKw => SyntaxKind::THROWS_KW,
            VoidKw => SyntaxKind::VOID_KW,
            TryKw => SyntaxKind::TRY_KW,
            CatchKw => SyntaxKind::CATCH_KW,
            FinallyKw => SyntaxKind::FINALLY_KW,
            ForKw => SyntaxKind::FOR_KW,
            IfKw => SyntaxKind::IF_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            WhileKw => SyntaxKind::WHILE_KW,
            DoKw => SyntaxKind::DO_KW,
            SwitchKw => SyntaxKind::SWITCH_KW,
            CaseKw => SyntaxKind::CASE_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            ThrowKw => SyntaxKind::THROW_KW,
            BreakKw => SyntaxKind::BREAK_KW,
            ContinueKw => SyntaxKind::CONTINUE_KW,
            AssertKw => SyntaxKind::ASSERT_KW,
            NewKw => SyntaxKind::NEW_KW,
            ThisKw => SyntaxKind::THIS_KW,
            SuperKw => SyntaxKind::SUPER_KW,
            NullKw => SyntaxKind::NULL_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            InstanceofKw => SyntaxKind::INSTANCEOF_KW,
            ByteKw => SyntaxKind::BYTE_KW,
            ShortKw => SyntaxKind::SHORT_KW,
            IntKw => SyntaxKind::INT_KW,
            LongKw => SyntaxKind::LONG_KW,
            FloatKw => SyntaxKind::FLOAT_KW,
            DoubleKw => SyntaxKind::DOUBLE_KW,
            BooleanKw => SyntaxKind::BOOLEAN_KW,
            CharKw => SyntaxKind::CHAR_KW,
        }
    }
}
