//! Column references and value operands.

use super::{Expression, Select, SubQuery};
use crate::value::{Param, ToSqlValue};

/// The left-hand side of most conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRef {
    /// A column name, quoted by the dialect unless it contains `(`.
    Name(String),
    /// Raw SQL used in place of a column.
    Expression(Expression),
    /// A scalar sub-query used in place of a column.
    Query(SubQuery),
}

impl ColumnRef {
    /// Returns the key used to look the column up in a row of values:
    /// the name, or the raw SQL of an expression.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Expression(expr) => Some(expr.sql()),
            Self::Query(_) => None,
        }
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        Self::Name(String::from(name))
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Expression> for ColumnRef {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

impl From<SubQuery> for ColumnRef {
    fn from(query: SubQuery) -> Self {
        Self::Query(query)
    }
}

impl From<Select> for ColumnRef {
    fn from(query: Select) -> Self {
        Self::Query(SubQuery::new(query))
    }
}

/// A right-hand side value: bound, spliced or sub-queried.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A value bound through the param sink.
    Value(Param),
    /// Raw SQL spliced in place of a value.
    Expression(Expression),
    /// A sub-query spliced in place of a value.
    Query(SubQuery),
}

impl Operand {
    /// Returns `true` for a bound NULL value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Value(param) if param.is_null())
    }
}

impl<T: ToSqlValue> From<T> for Operand {
    fn from(value: T) -> Self {
        Self::Value(Param::new(value))
    }
}

impl From<Param> for Operand {
    fn from(param: Param) -> Self {
        Self::Value(param)
    }
}

impl From<Expression> for Operand {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

impl From<SubQuery> for Operand {
    fn from(query: SubQuery) -> Self {
        Self::Query(query)
    }
}

impl From<Select> for Operand {
    fn from(query: Select) -> Self {
        Self::Query(SubQuery::new(query))
    }
}
