//! Checks and the interface they are driven through.
//!
//! A [`Check`] declares which syntax kinds it wants to see and is called
//! once per matching node by the [`TreeWalker`](crate::walker::TreeWalker).
//! Checks report through the [`Reporter`] interface; the [`CheckContext`]
//! handed to them implements it and collects [`Violation`]s in order.

mod diagnostics;
mod final_parameters;

pub use diagnostics::{DiagnosticCollector, Severity, Violation, messages};
pub use final_parameters::{FinalParameters, FinalParametersBuilder, ParameterScope};

use tracing::trace;

use crate::base::{Position, SourceText, TextSize};
use crate::error::CheckError;
use crate::parser::{SyntaxKind, SyntaxNode};

/// A check over the syntax tree.
///
/// Configuration is fixed when the check is built; `visit_token` takes
/// `&self`, so nothing a check sees during traversal can change it.
pub trait Check {
    /// Name used in configuration files and reports.
    fn name(&self) -> &'static str;

    /// Kinds visited when no tokens are configured.
    fn default_tokens(&self) -> &'static [SyntaxKind];

    /// Every kind the check knows how to visit.
    fn acceptable_tokens(&self) -> &'static [SyntaxKind];

    /// Kinds this instance was configured to visit.
    fn tokens(&self) -> &[SyntaxKind];

    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Called for every node whose kind is in [`Check::tokens`].
    fn visit_token(&self, node: &SyntaxNode, ctx: &mut CheckContext<'_>) -> Result<(), CheckError>;
}

/// Sink for violations.
pub trait Reporter {
    /// Report one violation at a 1-based line and column.
    fn report(&mut self, line: usize, column: usize, message_key: &'static str, args: &[&str]);
}

/// Per-file state handed to checks: the source for position lookups and the
/// collector violations go to.
pub struct CheckContext<'a> {
    source: &'a SourceText,
    collector: &'a mut DiagnosticCollector,
    check: &'static str,
    severity: Severity,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a SourceText, collector: &'a mut DiagnosticCollector) -> Self {
        Self {
            source,
            collector,
            check: "",
            severity: Severity::default(),
        }
    }

    /// Stamp subsequent reports with this check's name and severity.
    pub fn enter(&mut self, check: &dyn Check) {
        self.check = check.name();
        self.severity = check.severity();
    }

    /// User-facing position of a byte offset.
    pub fn position(&self, offset: TextSize) -> Position {
        self.source.position(offset)
    }
}

impl Reporter for CheckContext<'_> {
    fn report(&mut self, line: usize, column: usize, message_key: &'static str, args: &[&str]) {
        if self.severity == Severity::Ignore {
            trace!(check = self.check, line, column, "severity is ignore, dropping report");
            return;
        }
        self.collector.add(Violation {
            line,
            column,
            severity: self.severity,
            check: self.check,
            message_key,
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });
    }
}

/// Error for a node that lacks a child the parser always produces.
pub(crate) fn malformed(expected: &'static str, node: &SyntaxNode) -> CheckError {
    CheckError::MalformedTree {
        expected,
        node: node.kind(),
        offset: node.text_range().start(),
    }
}
