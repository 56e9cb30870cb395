//! YAML configuration for a lint run.
//!
//! ```yaml
//! tab_width: 8
//! checks:
//!   FinalParameters:
//!     severity: warning
//!     tokens: [METHOD_DEF, CTOR_DEF, LITERAL_CATCH, FOR_EACH_CLAUSE]
//!     ignore_primitive_types: true
//! ```
//!
//! Checks keep the order they are listed in. Unknown fields are rejected.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::base::DEFAULT_TAB_WIDTH;
use crate::checks::Severity;
use crate::error::ConfigError;

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Width of a tab stop when computing columns.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Checks to run, by name.
    #[serde(default)]
    pub checks: IndexMap<String, CheckConfig>,
}

/// Options for one check. Options a check does not understand are ignored
/// by that check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Token names to visit; the check's defaults when absent.
    #[serde(default)]
    pub tokens: Option<Vec<String>>,

    #[serde(default)]
    pub ignore_primitive_types: Option<bool>,
}

impl Default for LintConfig {
    /// `FinalParameters` with its default options.
    fn default() -> Self {
        let mut checks = IndexMap::new();
        checks.insert("FinalParameters".to_string(), CheckConfig::default());
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            checks,
        }
    }
}

impl LintConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        debug!(
            tab_width = config.tab_width,
            checks = ?config.checks.keys().collect::<Vec<_>>(),
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }
}
