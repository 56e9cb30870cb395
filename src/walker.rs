//! Tree walker: drives checks over a parsed file.
//!
//! The walker indexes every registered check by the syntax kinds it asked
//! for, then walks the tree in pre-order and hands each node to the checks
//! registered for its kind, in registration order.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::{DEFAULT_TAB_WIDTH, SourceText};
use crate::checks::{Check, CheckContext, DiagnosticCollector, FinalParameters, Violation};
use crate::config::{CheckConfig, LintConfig};
use crate::error::{CheckError, ConfigError, LintError};
use crate::parser::{AstNode, CompilationUnit, SyntaxKind, SyntaxNode, parse_java};

/// Instantiate a check by name from its options.
pub fn create_check(name: &str, config: &CheckConfig) -> Result<Box<dyn Check>, ConfigError> {
    match name {
        "FinalParameters" => {
            let mut builder = FinalParameters::builder()
                .ignore_primitive_types(config.ignore_primitive_types.unwrap_or(false));
            if let Some(tokens) = &config.tokens {
                builder = builder.token_names(tokens.as_slice())?;
            }
            if let Some(severity) = config.severity {
                builder = builder.severity(severity);
            }
            Ok(Box::new(builder.build()?))
        }
        other => Err(ConfigError::UnknownCheck(other.to_string())),
    }
}

/// Runs a set of checks over syntax trees.
pub struct TreeWalker {
    checks: Vec<Box<dyn Check>>,
    dispatch: FxHashMap<SyntaxKind, Vec<usize>>,
    tab_width: usize,
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeWalker {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            dispatch: FxHashMap::default(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Build a walker with every check the configuration names.
    pub fn from_config(config: &LintConfig) -> Result<Self, ConfigError> {
        let mut walker = Self::new().with_tab_width(config.tab_width);
        for (name, options) in &config.checks {
            walker.register(create_check(name, options)?);
        }
        debug!(checks = walker.checks.len(), tab_width = walker.tab_width, "configured walker");
        Ok(walker)
    }

    /// Add a check; it will be called for every kind in its `tokens()`.
    pub fn register(&mut self, check: Box<dyn Check>) {
        let index = self.checks.len();
        for &kind in check.tokens() {
            self.dispatch.entry(kind).or_default().push(index);
        }
        self.checks.push(check);
    }

    pub fn checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|check| check.as_ref())
    }

    /// Walk `root` in pre-order, collecting violations into `collector`.
    pub fn walk(
        &self,
        root: &SyntaxNode,
        source: &SourceText,
        collector: &mut DiagnosticCollector,
    ) -> Result<(), CheckError> {
        let mut ctx = CheckContext::new(source, collector);
        for node in root.descendants() {
            let Some(indices) = self.dispatch.get(&node.kind()) else {
                continue;
            };
            for &index in indices {
                let check = self.checks[index].as_ref();
                ctx.enter(check);
                check.visit_token(&node, &mut ctx)?;
            }
        }
        Ok(())
    }

    /// Parse and check one source text. Sources with syntax errors are
    /// rejected without running any check.
    pub fn check_source(&self, text: &str) -> Result<Vec<Violation>, LintError> {
        let parse = parse_java(text);
        if !parse.ok() {
            debug!(errors = parse.errors.len(), "rejecting source with syntax errors");
            return Err(LintError::Parse {
                errors: parse.errors,
            });
        }

        let root = parse.syntax();
        if let Some(unit) = CompilationUnit::cast(root.clone()) {
            debug!(types = unit.type_declarations().count(), "checking source");
        }

        let source = SourceText::with_tab_width(text, self.tab_width);
        let mut collector = DiagnosticCollector::new();
        self.walk(&root, &source, &mut collector)?;
        debug!(violations = collector.len(), "checked source");
        Ok(collector.take())
    }
}
