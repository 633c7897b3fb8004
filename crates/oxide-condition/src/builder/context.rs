//! Per-build state handed to every builder.

use tracing::trace;

use super::registry::BuilderRegistry;
use crate::ast::{ColumnRef, Condition, ExpressionNode, Operand, SubQuery};
use crate::dialect::Quoter;
use crate::error::Result;
use crate::params::ParamBinder;
use crate::value::{Param, ToSqlValue};

/// Everything a builder needs: the registry for nested nodes, the quoter
/// and the param sink shared by the whole build.
pub struct BuildContext<'a> {
    registry: &'a BuilderRegistry,
    quoter: &'a dyn Quoter,
    params: &'a mut dyn ParamBinder,
    like_escape_character: Option<char>,
}

impl<'a> BuildContext<'a> {
    /// Creates a context.
    pub fn new(
        registry: &'a BuilderRegistry,
        quoter: &'a dyn Quoter,
        params: &'a mut dyn ParamBinder,
    ) -> Self {
        Self {
            registry,
            quoter,
            params,
            like_escape_character: None,
        }
    }

    /// Appends `ESCAPE '<c>'` to every LIKE comparison.
    #[must_use]
    pub fn with_like_escape_character(mut self, escape: Option<char>) -> Self {
        self.like_escape_character = escape;
        self
    }

    /// Returns the quoter.
    pub fn quoter(&self) -> &'a dyn Quoter {
        self.quoter
    }

    /// Returns the LIKE escape character, if any.
    pub fn like_escape_character(&self) -> Option<char> {
        self.like_escape_character
    }

    /// Builds a condition through its registered builder.
    pub fn build(&mut self, condition: &Condition) -> Result<String> {
        self.build_node(condition.as_node())
    }

    /// Builds any expression node through its registered builder.
    pub fn build_node(&mut self, node: &dyn ExpressionNode) -> Result<String> {
        let registry = self.registry;
        let builder = registry.lookup(node)?;
        trace!(node = node.type_name(), "Building node");
        builder.build(node, self)
    }

    /// Builds a sub-query, parenthesized.
    pub fn query(&mut self, query: &SubQuery) -> Result<String> {
        self.build_node(query.node())
    }

    /// Binds a value and returns its placeholder.
    pub fn bind(&mut self, param: Param) -> Result<String> {
        self.params.bind(param)
    }

    /// Binds a plain value and returns its placeholder.
    pub fn bind_value(&mut self, value: impl ToSqlValue) -> Result<String> {
        self.bind(Param::new(value))
    }

    /// Quotes a column name; names containing `(` are emitted verbatim.
    pub fn quote_column(&self, name: &str) -> String {
        if name.contains('(') {
            return name.to_owned();
        }
        self.quoter.quote_column_name(name)
    }

    /// Renders a column reference.
    pub fn column(&mut self, column: &ColumnRef) -> Result<String> {
        match column {
            ColumnRef::Name(name) => Ok(self.quote_column(name)),
            ColumnRef::Expression(expr) => self.build_node(expr),
            ColumnRef::Query(query) => self.query(query),
        }
    }

    /// Renders an operand: values are bound, expressions and sub-queries
    /// are spliced.
    pub fn operand(&mut self, operand: &Operand) -> Result<String> {
        match operand {
            Operand::Value(param) => self.bind(param.clone()),
            Operand::Expression(expr) => self.build_node(expr),
            Operand::Query(query) => self.query(query),
        }
    }
}
