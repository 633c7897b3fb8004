//! Raw SQL expressions.

use super::ExpressionNode;
use crate::value::{Param, ToSqlValue};

/// A raw SQL fragment spliced into the output instead of being bound.
///
/// The fragment may reference its own named parameters (`:name`). When the
/// expression is built, each referenced parameter is re-bound through the
/// param sink and its placeholder rewritten, so fragments never collide
/// with placeholders allocated elsewhere in the statement.
///
/// **Warning**: Only use this for SQL that doesn't contain user input.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    sql: String,
    params: Vec<(String, Param)>,
}

impl Expression {
    /// Creates an expression from raw SQL.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: vec![],
        }
    }

    /// Adds a named parameter. A missing leading `:` is added.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<Param>) -> Self {
        let name = if name.starts_with(':') {
            String::from(name)
        } else {
            format!(":{name}")
        };
        self.params.push((name, value.into()));
        self
    }

    /// Adds a named value parameter.
    #[must_use]
    pub fn bind(self, name: &str, value: impl ToSqlValue) -> Self {
        self.with_param(name, Param::new(value))
    }

    /// Returns the raw SQL.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the expression's own parameters.
    #[must_use]
    pub fn params(&self) -> &[(String, Param)] {
        &self.params
    }

    /// Looks up one of the expression's own parameters.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    /// Returns `true` if the SQL is empty or whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sql.trim().is_empty()
    }
}

impl ExpressionNode for Expression {}

impl From<&str> for Expression {
    fn from(sql: &str) -> Self {
        Self::new(sql)
    }
}

impl From<String> for Expression {
    fn from(sql: String) -> Self {
        Self::new(sql)
    }
}
