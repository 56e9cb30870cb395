//! Diagnostics: violation records and their collection.
//!
//! A [`Violation`] is produced by a check through the
//! [`Reporter`](super::Reporter) interface and never mutated afterwards.
//! Messages are looked up by key in a small message bundle, the way the host
//! checker localizes them.

use serde::Deserialize;

use crate::base::Position;

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity level of a violation. Reports at `Ignore` are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ignore,
    Info,
    Warning,
    #[default]
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ignore => "ignore",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

/// Message keys understood by [`Violation::message`].
pub mod messages {
    /// A parameter-like binding lacks `final`; argument 0 is its name.
    pub const FINAL_PARAMETER: &str = "final.parameter";

    /// The message bundle: key to template with `{n}` placeholders.
    pub(crate) const BUNDLE: &[(&str, &str)] = &[(FINAL_PARAMETER, "Parameter {0} should be final.")];

    pub fn template(key: &str) -> Option<&'static str> {
        BUNDLE
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// One reported violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Line (1-based).
    pub line: usize,
    /// Column (1-based, tabs expanded).
    pub column: usize,
    pub severity: Severity,
    /// Name of the check that reported it.
    pub check: &'static str,
    pub message_key: &'static str,
    pub args: Vec<String>,
}

impl Violation {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Render the message, substituting `{0}`, `{1}`, ... with the arguments.
    /// Unknown keys render as the key itself.
    pub fn message(&self) -> String {
        let Some(template) = messages::template(self.message_key) else {
            return self.message_key.to_string();
        };
        self.args
            .iter()
            .enumerate()
            .fold(template.to_string(), |msg, (i, arg)| {
                msg.replace(&format!("{{{}}}", i), arg)
            })
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}:{}: {} [{}]",
            self.severity.as_str().to_uppercase(),
            self.line,
            self.column,
            self.message(),
            self.check
        )
    }
}

// ============================================================================
// COLLECTOR
// ============================================================================

/// Ordered store of violations, in the order they were reported.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    violations: Vec<Violation>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Get all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Take all violations, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Violation> {
        std::mem::take(&mut self.violations)
    }
}
