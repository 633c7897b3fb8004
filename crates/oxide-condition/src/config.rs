//! Compiler configuration.

use serde::{Deserialize, Serialize};

use crate::dialect::{DialectKind, Quoter};
use crate::error::Result;
use crate::params::{DEFAULT_PARAM_PREFIX, ParamSink};

/// Settings for a [`ConditionCompiler`](crate::ConditionCompiler).
///
/// Every field has a default, so partial JSON documents are accepted:
///
/// ```rust
/// use oxide_condition::config::CompilerConfig;
/// use oxide_condition::dialect::DialectKind;
///
/// let config = CompilerConfig::from_json(r#"{"dialect": "mysql", "max_params": 100}"#).unwrap();
/// assert_eq!(config.dialect, DialectKind::MySql);
/// assert_eq!(config.param_prefix, ":qp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Identifier quoting style.
    pub dialect: DialectKind,
    /// Substituted for `%` in `{{%table}}` markers.
    pub table_prefix: String,
    /// Placeholder prefix; placeholders are this prefix plus a counter.
    pub param_prefix: String,
    /// Appended to LIKE comparisons as `ESCAPE '<c>'`.
    pub like_escape_character: Option<char>,
    /// Maximum number of parameters one build may bind.
    pub max_params: Option<usize>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            dialect: DialectKind::default(),
            table_prefix: String::new(),
            param_prefix: String::from(DEFAULT_PARAM_PREFIX),
            like_escape_character: None,
            max_params: None,
        }
    }
}

impl CompilerConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the dialect.
    #[must_use]
    pub const fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets the placeholder prefix.
    #[must_use]
    pub fn with_param_prefix(mut self, prefix: &str) -> Self {
        self.param_prefix = String::from(prefix);
        self
    }

    /// Sets the LIKE escape character.
    #[must_use]
    pub const fn with_like_escape_character(mut self, escape: Option<char>) -> Self {
        self.like_escape_character = escape;
        self
    }

    /// Sets the parameter limit.
    #[must_use]
    pub const fn with_max_params(mut self, limit: Option<usize>) -> Self {
        self.max_params = limit;
        self
    }

    /// Creates the quoter for the configured dialect and table prefix.
    #[must_use]
    pub fn quoter(&self) -> Box<dyn Quoter> {
        self.dialect.quoter(&self.table_prefix)
    }

    /// Creates an empty param sink honoring the prefix and limit.
    #[must_use]
    pub fn param_sink(&self) -> ParamSink {
        ParamSink::with_prefix(self.param_prefix.as_str()).with_limit(self.max_params)
    }
}
