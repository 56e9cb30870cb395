//! Error types for configuration, checks and lint runs.

use thiserror::Error;

use crate::parser::{SyntaxError, SyntaxKind, TextSize};

/// Errors found while setting up checks. They keep a check from running but
/// never abort the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No check is registered under this name.
    #[error("Unknown check: {0}")]
    UnknownCheck(String),

    /// The token name does not name any syntax kind.
    #[error("{check}: unknown token name '{token}'")]
    UnknownToken { check: String, token: String },

    /// The token exists but the check cannot visit it.
    #[error("{check}: token '{token}' is not acceptable")]
    UnacceptableToken { check: String, token: String },

    /// The configured scope selects no tokens at all.
    #[error("{check}: at least one token must be configured")]
    EmptyScope { check: String },

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::yaml(err.to_string())
    }
}

/// Errors raised while a check visits a node.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    /// The tree lacks a child the parser always produces. This is a parser
    /// defect, reported instead of silently skipping the node.
    #[error("Malformed tree: expected {expected} in {node:?} at offset {offset:?}")]
    MalformedTree {
        expected: &'static str,
        node: SyntaxKind,
        offset: TextSize,
    },
}

/// Errors from checking one source file.
#[derive(Debug, Error)]
pub enum LintError {
    /// The source did not parse; checks are not run on broken trees.
    #[error("Source has {} syntax error(s)", .errors.len())]
    Parse { errors: Vec<SyntaxError> },

    /// A check hit a malformed tree.
    #[error(transparent)]
    Check(#[from] CheckError),

    /// The checks could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
