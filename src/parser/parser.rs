//! Recursive descent parser for Java
//!
//! Builds a rowan GreenNode tree from tokens. The tree shape follows the
//! host checker's AST (`CLASS_DEF > OBJBLOCK > METHOD_DEF > PARAMETERS >
//! PARAMETER_DEF`, `TRY_STMT > LITERAL_CATCH`, `FOR_STMT > FOR_EACH_CLAUSE`),
//! so checks can navigate parents and children the same way.
//!
//! Declarations are parsed structurally. Expressions are kept as flat token
//! runs, except for anonymous class bodies and lambda block bodies, which
//! are parsed so that their members and statements are visible to checks.
//!
//! Trivia is always attached to the enclosing node before a new node starts,
//! so every node begins at a significant token.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {:?}", self.message, self.range)
    }
}

/// Parse Java source code into a CST
pub fn parse_java(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_compilation_unit();
    parser.finish()
}

/// What kind of body a type declaration has; decides how members are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Class,
    Enum,
    Record,
    Annotation,
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    last: Option<SyntaxKind>,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            last: None,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection (all lookahead skips trivia)
    // =========================================================================

    fn nth_index(&self, n: usize) -> Option<usize> {
        let mut idx = self.pos;
        let mut count = 0;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return Some(idx);
                }
                count += 1;
            }
            idx += 1;
        }
        None
    }

    fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.nth_index(n).map(|idx| self.tokens[idx].kind)
    }

    fn nth_text(&self, n: usize) -> &'a str {
        let tokens = self.tokens;
        self.nth_index(n).map(|idx| tokens[idx].text).unwrap_or("")
    }

    fn current(&self) -> Option<SyntaxKind> {
        self.nth(0)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == Some(kind)
    }

    fn at_eof(&self) -> bool {
        self.nth_index(0).is_none()
    }

    fn nth_is_ident(&self, n: usize, text: &str) -> bool {
        self.nth(n) == Some(SyntaxKind::IDENT) && self.nth_text(n) == text
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn flush_trivia(&mut self) {
        let tokens = self.tokens;
        while let Some(token) = tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn bump(&mut self) {
        self.flush_trivia();
        let tokens = self.tokens;
        if let Some(token) = tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.last = Some(token.kind);
            self.pos += 1;
        }
    }

    fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn eat_dims(&mut self) {
        while self.at(SyntaxKind::L_BRACKET) && self.nth(1) == Some(SyntaxKind::R_BRACKET) {
            self.bump_n(2);
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .nth_index(0)
            .map(|idx| {
                let token = &self.tokens[idx];
                TextRange::at(token.offset, TextSize::of(token.text))
            })
            .unwrap_or_else(|| {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            });
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        let mut consumed = false;
        while let Some(kind) = self.current() {
            if recovery.contains(&kind) {
                break;
            }
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.finish_node();
    }

    /// Guard used by every list loop: report and skip a token the loop body
    /// could not consume.
    fn ensure_progress(&mut self, before: usize) {
        if self.pos == before && !self.at_eof() {
            self.error(format!("unexpected token: {:?}", self.current()));
            self.start_node(SyntaxKind::ERROR);
            self.bump();
            self.finish_node();
        }
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Lookahead helpers for modifiers and declarations
    // =========================================================================

    /// Number of tokens in a contextual modifier (`sealed`, `non-sealed`) at `n`
    fn contextual_modifier_len(&self, n: usize) -> usize {
        let continues_decl = |m: usize| {
            matches!(
                self.nth(m),
                Some(SyntaxKind::CLASS_KW | SyntaxKind::INTERFACE_KW | SyntaxKind::AT)
            ) || self.nth(m).is_some_and(|k| k.is_modifier_keyword())
        };
        if self.nth_is_ident(n, "sealed") && continues_decl(n + 1) {
            1
        } else if self.nth_is_ident(n, "non")
            && self.nth(n + 1) == Some(SyntaxKind::OPERATOR)
            && self.nth_text(n + 1) == "-"
            && self.nth_is_ident(n + 2, "sealed")
        {
            3
        } else {
            0
        }
    }

    /// Index just past the annotation starting at `n` (which is `@`)
    fn annotation_end(&self, n: usize) -> usize {
        let mut m = n + 2;
        while self.nth(m) == Some(SyntaxKind::DOT) && self.nth(m + 1) == Some(SyntaxKind::IDENT) {
            m += 2;
        }
        if self.nth(m) != Some(SyntaxKind::L_PAREN) {
            return m;
        }
        let mut depth = 0usize;
        while let Some(kind) = self.nth(m) {
            m += 1;
            match kind {
                SyntaxKind::L_PAREN => depth += 1,
                SyntaxKind::R_PAREN => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
        m
    }

    /// Index of the first token after any modifiers and annotations at `n`
    fn modifiers_end(&self, mut n: usize) -> usize {
        loop {
            match self.nth(n) {
                Some(kind) if kind.is_modifier_keyword() => n += 1,
                Some(SyntaxKind::AT) if self.nth(n + 1) == Some(SyntaxKind::IDENT) => {
                    n = self.annotation_end(n);
                }
                Some(SyntaxKind::IDENT) => match self.contextual_modifier_len(n) {
                    0 => return n,
                    len => n += len,
                },
                _ => return n,
            }
        }
    }

    /// The declaration kind of a type declaration whose keyword is at `n`
    fn type_declaration_kind(&self, n: usize) -> Option<(SyntaxKind, BodyKind)> {
        match self.nth(n)? {
            SyntaxKind::CLASS_KW => Some((SyntaxKind::CLASS_DEF, BodyKind::Class)),
            SyntaxKind::INTERFACE_KW => Some((SyntaxKind::INTERFACE_DEF, BodyKind::Class)),
            SyntaxKind::ENUM_KW => Some((SyntaxKind::ENUM_DEF, BodyKind::Enum)),
            SyntaxKind::AT if self.nth(n + 1) == Some(SyntaxKind::INTERFACE_KW) => {
                Some((SyntaxKind::ANNOTATION_DEF, BodyKind::Annotation))
            }
            SyntaxKind::IDENT
                if self.nth_is_ident(n, "record")
                    && self.nth(n + 1) == Some(SyntaxKind::IDENT)
                    && matches!(self.nth(n + 2), Some(SyntaxKind::L_PAREN | SyntaxKind::LT)) =>
            {
                Some((SyntaxKind::RECORD_DEF, BodyKind::Record))
            }
            _ => None,
        }
    }

    fn at_type_declaration(&self) -> bool {
        self.type_declaration_kind(self.modifiers_end(0)).is_some()
    }

    fn at_type_start(&self) -> bool {
        match self.current() {
            Some(SyntaxKind::IDENT | SyntaxKind::VOID_KW) => true,
            Some(kind) => kind.is_primitive_type(),
            None => false,
        }
    }

    /// A for header is a for-each header when a `:` appears at depth zero
    /// before any `;` or `=`. A conditional in a classic header always
    /// follows one of those, so a `?` here is a wildcard type argument.
    fn at_for_each_header(&self) -> bool {
        let mut depth = 0usize;
        let mut n = 0;
        while let Some(kind) = self.nth(n) {
            match kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                SyntaxKind::SEMICOLON | SyntaxKind::EQ if depth == 0 => {
                    return false;
                }
                SyntaxKind::COLON if depth == 0 => return true,
                _ => {}
            }
            n += 1;
        }
        false
    }

    // =========================================================================
    // Grammar rules: compilation unit and declarations
    // =========================================================================

    /// CompilationUnit = PackageDecl? ImportDecl* TypeDecl*
    fn parse_compilation_unit(&mut self) {
        // Leading trivia belongs inside the root
        self.builder.start_node(SyntaxKind::COMPILATION_UNIT.into());

        while !self.at_eof() {
            let before = self.pos;
            match self.current() {
                Some(SyntaxKind::PACKAGE_KW) => self.parse_terminated(SyntaxKind::PACKAGE_DEF),
                Some(SyntaxKind::IMPORT_KW) => self.parse_terminated(SyntaxKind::IMPORT),
                Some(SyntaxKind::SEMICOLON) => self.bump(),
                _ if self.at_type_declaration() => self.parse_type_declaration(),
                _ => self.error_recover(
                    "expected a type declaration",
                    &[
                        SyntaxKind::CLASS_KW,
                        SyntaxKind::INTERFACE_KW,
                        SyntaxKind::ENUM_KW,
                        SyntaxKind::PUBLIC_KW,
                        SyntaxKind::IMPORT_KW,
                    ],
                ),
            }
            self.ensure_progress(before);
        }

        self.flush_trivia();
        self.finish_node();
    }

    /// `package a.b;` and `import static a.b.*;`
    fn parse_terminated(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.parse_expr_until(&[SyntaxKind::SEMICOLON]);
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// Modifiers = (modifier keyword | annotation | sealed | non-sealed)*
    fn parse_modifiers(&mut self) {
        self.start_node(SyntaxKind::MODIFIERS);
        loop {
            match self.current() {
                Some(kind) if kind.is_modifier_keyword() => self.bump(),
                Some(SyntaxKind::AT) if self.nth(1) == Some(SyntaxKind::IDENT) => {
                    self.parse_annotation();
                }
                Some(SyntaxKind::IDENT) => match self.contextual_modifier_len(0) {
                    0 => break,
                    len => self.bump_n(len),
                },
                _ => break,
            }
        }
        self.finish_node();
    }

    /// Annotation = '@' QualifiedName ('(' ... ')')?
    fn parse_annotation(&mut self) {
        self.start_node(SyntaxKind::ANNOTATION);
        self.bump(); // @
        self.expect(SyntaxKind::IDENT);
        while self.at(SyntaxKind::DOT) && self.nth(1) == Some(SyntaxKind::IDENT) {
            self.bump_n(2);
        }
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_paren_group();
        }
        self.finish_node();
    }

    /// TypeDecl = Modifiers (class | interface | enum | @interface | record) ...
    fn parse_type_declaration(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_modifiers();
        match self.type_declaration_kind(0) {
            Some((kind, body)) => self.parse_type_declaration_rest(checkpoint, kind, body),
            None => {
                self.start_node_at(checkpoint, SyntaxKind::ERROR);
                self.error("expected class, interface, enum or record");
                self.finish_node();
            }
        }
    }

    fn parse_type_declaration_rest(&mut self, checkpoint: Checkpoint, kind: SyntaxKind, body: BodyKind) {
        self.start_node_at(checkpoint, kind);

        if kind == SyntaxKind::ANNOTATION_DEF {
            self.bump(); // @
        }
        self.bump(); // class / interface / enum / record
        self.expect(SyntaxKind::IDENT);

        if self.at(SyntaxKind::LT) {
            self.parse_angle_group(SyntaxKind::TYPE_PARAMETERS);
        }
        if body == BodyKind::Record && self.at(SyntaxKind::L_PAREN) {
            self.start_node(SyntaxKind::RECORD_COMPONENTS);
            self.parse_paren_group();
            self.finish_node();
        }

        // extends / implements / permits
        if !self.at(SyntaxKind::L_BRACE) && !self.at_eof() {
            self.start_node(SyntaxKind::TYPE_HEADER);
            while let Some(kind) = self.current() {
                if matches!(
                    kind,
                    SyntaxKind::L_BRACE | SyntaxKind::R_BRACE | SyntaxKind::SEMICOLON
                ) {
                    break;
                }
                self.bump();
            }
            self.finish_node();
        }

        if self.at(SyntaxKind::L_BRACE) {
            self.parse_class_body(body);
        } else {
            self.error("expected type body");
        }

        self.finish_node();
    }

    /// ClassBody = '{' EnumConstants? Member* '}'
    fn parse_class_body(&mut self, body: BodyKind) {
        self.start_node(SyntaxKind::OBJBLOCK);
        self.expect(SyntaxKind::L_BRACE);

        if body == BodyKind::Enum {
            self.parse_enum_constants();
        }

        while !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
            let before = self.pos;
            self.parse_member(body);
            self.ensure_progress(before);
        }

        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    fn parse_enum_constants(&mut self) {
        loop {
            match self.current() {
                Some(SyntaxKind::SEMICOLON) => {
                    self.bump();
                    break;
                }
                Some(SyntaxKind::R_BRACE) | None => break,
                Some(SyntaxKind::COMMA) => self.bump(),
                Some(SyntaxKind::IDENT | SyntaxKind::AT) => self.parse_enum_constant(),
                _ => self.error_recover(
                    "expected enum constant",
                    &[SyntaxKind::COMMA, SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE],
                ),
            }
        }
    }

    /// EnumConstant = Annotation* IDENT Arguments? ClassBody?
    fn parse_enum_constant(&mut self) {
        self.start_node(SyntaxKind::ENUM_CONSTANT_DEF);
        self.parse_modifiers();
        self.expect(SyntaxKind::IDENT);
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_paren_group();
        }
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_class_body(BodyKind::Class);
        }
        self.finish_node();
    }

    fn parse_member(&mut self, body: BodyKind) {
        match self.current() {
            Some(SyntaxKind::SEMICOLON) => self.bump(),
            Some(SyntaxKind::L_BRACE) => {
                self.start_node(SyntaxKind::INSTANCE_INIT);
                self.parse_block();
                self.finish_node();
            }
            Some(SyntaxKind::STATIC_KW) if self.nth(1) == Some(SyntaxKind::L_BRACE) => {
                self.start_node(SyntaxKind::STATIC_INIT);
                self.bump();
                self.parse_block();
                self.finish_node();
            }
            _ => {
                let checkpoint = self.checkpoint();
                self.parse_modifiers();
                match self.type_declaration_kind(0) {
                    Some((kind, nested)) => {
                        self.parse_type_declaration_rest(checkpoint, kind, nested)
                    }
                    None => self.parse_method_or_field(checkpoint, body),
                }
            }
        }
    }

    /// Method, constructor, annotation member or field, after its modifiers
    fn parse_method_or_field(&mut self, checkpoint: Checkpoint, body: BodyKind) {
        if self.at(SyntaxKind::LT) {
            self.parse_angle_group(SyntaxKind::TYPE_PARAMETERS);
            // Type annotations on the return type: `<T> @Nullable T get()`
            while self.at(SyntaxKind::AT) && self.nth(1) == Some(SyntaxKind::IDENT) {
                self.parse_annotation();
            }
        }

        if self.at(SyntaxKind::IDENT) && self.nth(1) == Some(SyntaxKind::L_PAREN) {
            self.start_node_at(checkpoint, SyntaxKind::CTOR_DEF);
            self.bump();
            self.parse_parameters();
            self.parse_method_rest();
            self.finish_node();
            return;
        }

        if body == BodyKind::Record
            && self.at(SyntaxKind::IDENT)
            && self.nth(1) == Some(SyntaxKind::L_BRACE)
        {
            self.start_node_at(checkpoint, SyntaxKind::COMPACT_CTOR_DEF);
            self.bump();
            self.parse_block();
            self.finish_node();
            return;
        }

        if !self.at_type_start() {
            self.start_node_at(checkpoint, SyntaxKind::ERROR);
            self.error("expected member declaration");
            self.finish_node();
            return;
        }

        self.parse_type(false);

        if self.at(SyntaxKind::IDENT) && self.nth(1) == Some(SyntaxKind::L_PAREN) {
            let kind = if body == BodyKind::Annotation {
                SyntaxKind::ANNOTATION_FIELD_DEF
            } else {
                SyntaxKind::METHOD_DEF
            };
            self.start_node_at(checkpoint, kind);
            self.bump();
            self.parse_parameters();
            self.parse_method_rest();
            self.finish_node();
        } else {
            self.start_node_at(checkpoint, SyntaxKind::FIELD_DEF);
            self.expect(SyntaxKind::IDENT);
            self.parse_expr_until(&[SyntaxKind::SEMICOLON]);
            self.expect(SyntaxKind::SEMICOLON);
            self.finish_node();
        }
    }

    /// Parameters = '(' (Parameter (',' Parameter)*)? ')'
    fn parse_parameters(&mut self) {
        self.expect(SyntaxKind::L_PAREN);
        self.start_node(SyntaxKind::PARAMETERS);
        if !self.at(SyntaxKind::R_PAREN) {
            loop {
                self.parse_parameter();
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        }
        self.finish_node();
        self.expect(SyntaxKind::R_PAREN);
    }

    /// Parameter = Modifiers Type Annotation* '...'? IDENT Dims?
    fn parse_parameter(&mut self) {
        self.start_node(SyntaxKind::PARAMETER_DEF);
        self.parse_modifiers();
        if self.at_type_start() {
            self.parse_type(false);
        } else {
            self.error("expected parameter type");
        }
        while self.at(SyntaxKind::AT) && self.nth(1) == Some(SyntaxKind::IDENT) {
            self.parse_annotation();
        }
        self.eat(SyntaxKind::ELLIPSIS);
        self.expect(SyntaxKind::IDENT);
        self.eat_dims();
        self.finish_node();
    }

    /// Everything after a method's parameter list
    fn parse_method_rest(&mut self) {
        self.eat_dims();

        if self.at(SyntaxKind::THROWS_KW) {
            self.start_node(SyntaxKind::THROWS);
            self.bump();
            while let Some(kind) = self.current() {
                if matches!(
                    kind,
                    SyntaxKind::L_BRACE | SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE
                ) {
                    break;
                }
                self.bump();
            }
            self.finish_node();
        }

        if self.eat(SyntaxKind::DEFAULT_KW) {
            self.parse_expr_until(&[SyntaxKind::SEMICOLON]);
        }

        match self.current() {
            Some(SyntaxKind::L_BRACE) => self.parse_block(),
            Some(SyntaxKind::SEMICOLON) => self.bump(),
            _ => self.error("expected method body or `;`"),
        }
    }

    /// Type = (primitive | void | QualifiedName TypeArguments?) ('[' ']')*
    ///
    /// With `allow_union`, alternatives separated by `|` are accepted, as in
    /// a multi-catch parameter.
    fn parse_type(&mut self, allow_union: bool) {
        self.start_node(SyntaxKind::TYPE);
        let element = self.checkpoint();
        self.parse_type_element();
        while self.at(SyntaxKind::L_BRACKET) && self.nth(1) == Some(SyntaxKind::R_BRACKET) {
            self.start_node_at(element, SyntaxKind::ARRAY_DECLARATOR);
            self.bump_n(2);
            self.finish_node();
        }
        if allow_union {
            while self.eat(SyntaxKind::PIPE) {
                self.parse_type_element();
            }
        }
        self.finish_node();
    }

    fn parse_type_element(&mut self) {
        match self.current() {
            Some(kind) if kind.is_primitive_type() || kind == SyntaxKind::VOID_KW => self.bump(),
            Some(SyntaxKind::IDENT) => {
                self.bump();
                loop {
                    if self.at(SyntaxKind::LT) {
                        self.parse_angle_group(SyntaxKind::TYPE_ARGUMENTS);
                    }
                    if self.at(SyntaxKind::DOT) && self.nth(1) == Some(SyntaxKind::IDENT) {
                        self.bump_n(2);
                    } else {
                        break;
                    }
                }
            }
            _ => self.error("expected type"),
        }
    }

    /// A balanced `<...>` group, used for type parameters and arguments
    fn parse_angle_group(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump(); // <
        let mut depth = 1usize;
        while let Some(current) = self.current() {
            match current {
                SyntaxKind::LT => depth += 1,
                SyntaxKind::GT => depth -= 1,
                SyntaxKind::AT if self.nth(1) == Some(SyntaxKind::IDENT) => {
                    self.parse_annotation();
                    continue;
                }
                SyntaxKind::SEMICOLON
                | SyntaxKind::L_BRACE
                | SyntaxKind::R_BRACE
                | SyntaxKind::L_PAREN
                | SyntaxKind::R_PAREN => break,
                _ => {}
            }
            self.bump();
            if depth == 0 {
                break;
            }
        }
        if depth != 0 {
            self.error("unclosed type argument list");
        }
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: statements
    // =========================================================================

    /// Block = '{' Statement* '}'
    fn parse_block(&mut self) {
        if !self.at(SyntaxKind::L_BRACE) {
            self.error("expected block");
            return;
        }
        self.start_node(SyntaxKind::BLOCK);
        self.bump();
        while !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
            let before = self.pos;
            self.parse_statement();
            self.ensure_progress(before);
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    fn parse_statement(&mut self) {
        match self.current() {
            Some(SyntaxKind::L_BRACE) => self.parse_block(),
            Some(SyntaxKind::SEMICOLON) => self.bump(),
            Some(SyntaxKind::TRY_KW) => self.parse_try(),
            Some(SyntaxKind::FOR_KW) => self.parse_for(),
            Some(SyntaxKind::IF_KW) => self.parse_if(),
            Some(SyntaxKind::WHILE_KW) => {
                self.start_node(SyntaxKind::WHILE_STMT);
                self.bump();
                self.parse_condition();
                self.parse_statement();
                self.finish_node();
            }
            Some(SyntaxKind::DO_KW) => {
                self.start_node(SyntaxKind::DO_STMT);
                self.bump();
                self.parse_statement();
                self.expect(SyntaxKind::WHILE_KW);
                self.parse_condition();
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
            Some(SyntaxKind::SWITCH_KW) => self.parse_switch(),
            Some(SyntaxKind::SYNCHRONIZED_KW) if self.nth(1) == Some(SyntaxKind::L_PAREN) => {
                self.start_node(SyntaxKind::SYNCHRONIZED_STMT);
                self.bump();
                self.parse_condition();
                self.parse_block();
                self.finish_node();
            }
            Some(SyntaxKind::IDENT) if self.nth(1) == Some(SyntaxKind::COLON) => {
                self.start_node(SyntaxKind::LABELED_STMT);
                self.bump_n(2);
                self.parse_statement();
                self.finish_node();
            }
            _ if self.at_type_declaration() => self.parse_type_declaration(),
            _ => {
                self.start_node(SyntaxKind::STATEMENT);
                self.parse_expr_until(&[SyntaxKind::SEMICOLON]);
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
        }
    }

    fn parse_condition(&mut self) {
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_paren_group();
        } else {
            self.error("expected `(`");
        }
    }

    fn parse_if(&mut self) {
        self.start_node(SyntaxKind::IF_STMT);
        self.bump();
        self.parse_condition();
        self.parse_statement();
        if self.eat(SyntaxKind::ELSE_KW) {
            self.parse_statement();
        }
        self.finish_node();
    }

    /// Try = 'try' Resources? Block Catch* Finally?
    fn parse_try(&mut self) {
        self.start_node(SyntaxKind::TRY_STMT);
        self.bump();

        if self.at(SyntaxKind::L_PAREN) {
            self.start_node(SyntaxKind::RESOURCES);
            self.parse_paren_group();
            self.finish_node();
        }

        self.parse_block();

        while self.at(SyntaxKind::CATCH_KW) {
            self.parse_catch();
        }

        if self.at(SyntaxKind::FINALLY_KW) {
            self.start_node(SyntaxKind::FINALLY_CLAUSE);
            self.bump();
            self.parse_block();
            self.finish_node();
        }

        self.finish_node();
    }

    /// Catch = 'catch' '(' Modifiers Type ('|' Type)* IDENT ')' Block
    fn parse_catch(&mut self) {
        self.start_node(SyntaxKind::LITERAL_CATCH);
        self.bump();
        self.expect(SyntaxKind::L_PAREN);

        self.start_node(SyntaxKind::PARAMETER_DEF);
        self.parse_modifiers();
        if self.at_type_start() {
            self.parse_type(true);
        } else {
            self.error("expected exception type");
        }
        self.expect(SyntaxKind::IDENT);
        self.finish_node();

        self.expect(SyntaxKind::R_PAREN);
        self.parse_block();
        self.finish_node();
    }

    /// For = 'for' '(' (ForEachClause | ForHeader) ')' Statement
    fn parse_for(&mut self) {
        self.start_node(SyntaxKind::FOR_STMT);
        self.bump();

        if !self.eat(SyntaxKind::L_PAREN) {
            self.error("expected `(` after `for`");
            self.finish_node();
            return;
        }

        if self.at_for_each_header() {
            self.start_node(SyntaxKind::FOR_EACH_CLAUSE);

            self.start_node(SyntaxKind::VARIABLE_DEF);
            self.parse_modifiers();
            if self.at_type_start() {
                self.parse_type(false);
            } else {
                self.error("expected loop variable type");
            }
            self.expect(SyntaxKind::IDENT);
            self.eat_dims();
            self.finish_node();

            self.expect(SyntaxKind::COLON);
            self.start_node(SyntaxKind::EXPR);
            self.parse_expr_until(&[]);
            self.finish_node();

            self.finish_node();
        } else {
            self.start_node(SyntaxKind::FOR_HEADER);
            self.parse_expr_until(&[]);
            self.finish_node();
        }

        self.expect(SyntaxKind::R_PAREN);
        self.parse_statement();
        self.finish_node();
    }

    /// Switch statements and switch expressions share one shape
    fn parse_switch(&mut self) {
        self.start_node(SyntaxKind::SWITCH_STMT);
        self.bump();
        self.parse_condition();

        if !self.eat(SyntaxKind::L_BRACE) {
            self.error("expected switch body");
            self.finish_node();
            return;
        }

        while !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
            let before = self.pos;
            match self.current() {
                Some(SyntaxKind::CASE_KW | SyntaxKind::DEFAULT_KW) => {
                    self.start_node(SyntaxKind::SWITCH_LABEL);
                    self.bump();
                    self.parse_expr_until(&[SyntaxKind::COLON, SyntaxKind::ARROW]);
                    if !self.eat(SyntaxKind::COLON) && !self.eat(SyntaxKind::ARROW) {
                        self.error("expected `:` or `->`");
                    }
                    self.finish_node();
                }
                _ => self.parse_statement(),
            }
            self.ensure_progress(before);
        }

        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: expressions (flat, with nested bodies)
    // =========================================================================

    /// Consume an expression up to one of `stops` or an unmatched closer.
    fn parse_expr_until(&mut self, stops: &[SyntaxKind]) {
        let mut after_new = false;
        while let Some(kind) = self.current() {
            if stops.contains(&kind) {
                break;
            }
            match kind {
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => break,
                SyntaxKind::L_PAREN => {
                    self.parse_paren_group();
                    if after_new && self.at(SyntaxKind::L_BRACE) {
                        // anonymous class body
                        self.parse_class_body(BodyKind::Class);
                    }
                    after_new = false;
                }
                SyntaxKind::L_BRACKET => {
                    self.bump();
                    self.parse_expr_until(&[]);
                    self.expect(SyntaxKind::R_BRACKET);
                }
                SyntaxKind::L_BRACE if self.last == Some(SyntaxKind::ARROW) => {
                    // lambda body
                    self.parse_block();
                }
                SyntaxKind::L_BRACE => {
                    // array initializer
                    self.bump();
                    self.parse_expr_until(&[]);
                    self.expect(SyntaxKind::R_BRACE);
                }
                SyntaxKind::SWITCH_KW => self.parse_switch(),
                SyntaxKind::NEW_KW => {
                    self.bump();
                    after_new = true;
                }
                _ => self.bump(),
            }
        }
    }

    fn parse_paren_group(&mut self) {
        self.bump(); // (
        self.parse_expr_until(&[]);
        self.expect(SyntaxKind::R_PAREN);
    }
}
