//! # java-final-params
//!
//! Checks that parameters of Java methods, constructors, catch clauses and
//! for-each loops are declared `final`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! walker    → Drives checks over parsed files, configuration registry
//!   ↓
//! checks    → Check trait, Reporter, violations, FinalParameters
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (LineIndex, Position, SourceText)
//! ```
//!
//! ## Example
//!
//! ```
//! use final_params::{LintConfig, TreeWalker};
//!
//! let walker = TreeWalker::from_config(&LintConfig::default()).unwrap();
//! let violations = walker
//!     .check_source("class A { void f(int x, final String y) {} }")
//!     .unwrap();
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].message(), "Parameter x should be final.");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → checks → walker)
// ============================================================================

/// Foundation types: LineIndex, Position, SourceText
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Checks: the Check interface, violations, FinalParameters
pub mod checks;

/// Walker: runs checks over syntax trees
pub mod walker;

/// YAML configuration
pub mod config;

/// Error types
pub mod error;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, SourceText, Span, TextRange, TextSize};

pub use checks::{Check, CheckContext, DiagnosticCollector, FinalParameters, Reporter, Severity, Violation};
pub use config::{CheckConfig, LintConfig};
pub use error::{CheckError, ConfigError, LintError};
pub use walker::TreeWalker;
