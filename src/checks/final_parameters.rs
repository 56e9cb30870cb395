//! FinalParameters: method, constructor, catch and for-each parameters
//! must be declared `final`.
//!
//! Interface members and abstract methods are skipped, as they have no body
//! in which a parameter could be reassigned. With `ignore_primitive_types`,
//! parameters whose declared type is a primitive keyword are exempt too.

use tracing::trace;

use super::{Check, CheckContext, Reporter, Severity, malformed, messages};
use crate::error::{CheckError, ConfigError};
use crate::parser::{AstNode, Binding, CatchClause, ForEachClause, MethodLike, SyntaxKind, SyntaxNode};

const NAME: &str = "FinalParameters";

const DEFAULT_TOKENS: &[SyntaxKind] = &[SyntaxKind::METHOD_DEF, SyntaxKind::CTOR_DEF];

const ACCEPTABLE_TOKENS: &[SyntaxKind] = &[
    SyntaxKind::METHOD_DEF,
    SyntaxKind::CTOR_DEF,
    SyntaxKind::LITERAL_CATCH,
    SyntaxKind::FOR_EACH_CLAUSE,
];

/// The node kinds this check can visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterScope {
    MethodDef,
    CtorDef,
    Catch,
    ForEach,
}

impl ParameterScope {
    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::METHOD_DEF => Some(Self::MethodDef),
            SyntaxKind::CTOR_DEF => Some(Self::CtorDef),
            SyntaxKind::LITERAL_CATCH => Some(Self::Catch),
            SyntaxKind::FOR_EACH_CLAUSE => Some(Self::ForEach),
            _ => None,
        }
    }
}

/// The FinalParameters check. Build one with [`FinalParameters::builder`].
#[derive(Debug, Clone)]
pub struct FinalParameters {
    tokens: Vec<SyntaxKind>,
    ignore_primitive_types: bool,
    severity: Severity,
}

impl FinalParameters {
    pub fn builder() -> FinalParametersBuilder {
        FinalParametersBuilder::default()
    }

    pub fn ignore_primitive_types(&self) -> bool {
        self.ignore_primitive_types
    }

    /// Skip methods, constructors and clauses declared directly inside an
    /// interface body. A node without a grandparent is not in an interface.
    fn in_interface(node: &SyntaxNode) -> bool {
        node.parent()
            .and_then(|parent| parent.parent())
            .is_some_and(|container| container.kind() == SyntaxKind::INTERFACE_DEF)
    }

    fn visit_definition(&self, node: &SyntaxNode, ctx: &mut CheckContext<'_>) -> Result<(), CheckError> {
        let method = MethodLike::cast(node.clone()).ok_or_else(|| malformed("METHOD_DEF or CTOR_DEF", node))?;

        if !method.has_parameter_defs() {
            trace!(offset = ?node.text_range().start(), "no parameters, skipping");
            return Ok(());
        }

        let modifiers = method.modifiers().ok_or_else(|| malformed("MODIFIERS", node))?;
        if modifiers.is_abstract() {
            trace!(method = ?method.name(), "abstract method, skipping");
            return Ok(());
        }

        let parameters = method.parameters().ok_or_else(|| malformed("PARAMETERS", node))?;
        for param in parameters.params() {
            self.check_param(&param, ctx)?;
        }
        Ok(())
    }

    fn check_param(&self, param: &Binding, ctx: &mut CheckContext<'_>) -> Result<(), CheckError> {
        if param.is_final() {
            return Ok(());
        }
        if self.is_ignored_param(param)? {
            trace!(param = ?param.name_token().map(|t| t.text().to_string()), "primitive type, skipping");
            return Ok(());
        }

        let node = param.syntax();
        let name = param.name_token().ok_or_else(|| malformed("IDENT", node))?;
        let first = param.first_token().ok_or_else(|| malformed("a token", node))?;
        let position = ctx.position(first.text_range().start());

        trace!(name = name.text(), %position, "parameter is not final");
        ctx.report(position.line, position.column, messages::FINAL_PARAMETER, &[name.text()]);
        Ok(())
    }

    fn is_ignored_param(&self, param: &Binding) -> Result<bool, CheckError> {
        if !self.ignore_primitive_types {
            return Ok(false);
        }
        let ty = param.ty().ok_or_else(|| malformed("TYPE", param.syntax()))?;
        // `int x[]` declares an array, whatever the TYPE node holds
        Ok(ty.is_primitive() && !param.has_trailing_dims())
    }
}

impl Check for FinalParameters {
    fn name(&self) -> &'static str {
        NAME
    }

    fn default_tokens(&self) -> &'static [SyntaxKind] {
        DEFAULT_TOKENS
    }

    fn acceptable_tokens(&self) -> &'static [SyntaxKind] {
        ACCEPTABLE_TOKENS
    }

    fn tokens(&self) -> &[SyntaxKind] {
        &self.tokens
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn visit_token(&self, node: &SyntaxNode, ctx: &mut CheckContext<'_>) -> Result<(), CheckError> {
        let Some(scope) = ParameterScope::from_kind(node.kind()) else {
            return Ok(());
        };

        if Self::in_interface(node) {
            trace!(kind = ?node.kind(), "interface member, skipping");
            return Ok(());
        }

        match scope {
            ParameterScope::Catch => {
                let param = CatchClause::cast(node.clone())
                    .and_then(|clause| clause.parameter())
                    .ok_or_else(|| malformed("PARAMETER_DEF", node))?;
                self.check_param(&param, ctx)
            }
            ParameterScope::ForEach => {
                let variable = ForEachClause::cast(node.clone())
                    .and_then(|clause| clause.variable())
                    .ok_or_else(|| malformed("VARIABLE_DEF", node))?;
                self.check_param(&variable, ctx)
            }
            ParameterScope::MethodDef | ParameterScope::CtorDef => self.visit_definition(node, ctx),
        }
    }
}

/// Builder for [`FinalParameters`]; `build` validates the token scope.
#[derive(Debug, Clone, Default)]
pub struct FinalParametersBuilder {
    tokens: Option<Vec<SyntaxKind>>,
    ignore_primitive_types: bool,
    severity: Severity,
}

impl FinalParametersBuilder {
    pub fn tokens(mut self, tokens: impl IntoIterator<Item = SyntaxKind>) -> Self {
        self.tokens = Some(tokens.into_iter().collect());
        self
    }

    /// Set the scope from configuration names such as `LITERAL_CATCH`.
    pub fn token_names<S: AsRef<str>>(self, names: &[S]) -> Result<Self, ConfigError> {
        let tokens = names
            .iter()
            .map(|name| {
                SyntaxKind::from_name(name.as_ref()).ok_or_else(|| ConfigError::UnknownToken {
                    check: NAME.to_string(),
                    token: name.as_ref().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.tokens(tokens))
    }

    pub fn ignore_primitive_types(mut self, ignore: bool) -> Self {
        self.ignore_primitive_types = ignore;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn build(self) -> Result<FinalParameters, ConfigError> {
        let requested = self.tokens.unwrap_or_else(|| DEFAULT_TOKENS.to_vec());
        if requested.is_empty() {
            return Err(ConfigError::EmptyScope {
                check: NAME.to_string(),
            });
        }

        let mut tokens = Vec::with_capacity(requested.len());
        for token in requested {
            if !ACCEPTABLE_TOKENS.contains(&token) {
                return Err(ConfigError::UnacceptableToken {
                    check: NAME.to_string(),
                    token: token.name(),
                });
            }
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }

        Ok(FinalParameters {
            tokens,
            ignore_primitive_types: self.ignore_primitive_types,
            severity: self.severity,
        })
    }
}
