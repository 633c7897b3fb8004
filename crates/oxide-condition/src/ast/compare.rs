//! Simple comparison conditions.

use std::fmt;

use super::{ColumnRef, ExpressionNode, Operand};

/// Comparison operators.
///
/// Any other operator string is carried verbatim in [`CompareOp::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal (=)
    Eq,
    /// Not equal (<>)
    NotEq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    GtEq,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    LtEq,
    /// A free-form operator such as `!=` or `@>`.
    Other(String),
}

impl CompareOp {
    /// Parses an operator string.
    #[must_use]
    pub fn parse(operator: &str) -> Self {
        match operator.trim() {
            "=" => Self::Eq,
            "<>" => Self::NotEq,
            ">" => Self::Gt,
            ">=" => Self::GtEq,
            "<" => Self::Lt,
            "<=" => Self::LtEq,
            other => Self::Other(String::from(other)),
        }
    }

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Other(op) => op,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `column <op> value`.
///
/// A NULL value renders as `column <op> NULL` without binding anything.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareCondition {
    /// The compared column.
    pub column: ColumnRef,
    /// The operator.
    pub operator: CompareOp,
    /// The compared value.
    pub value: Operand,
}

impl CompareCondition {
    /// Creates a comparison.
    #[must_use]
    pub fn new(
        column: impl Into<ColumnRef>,
        operator: CompareOp,
        value: impl Into<Operand>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }
}

impl ExpressionNode for CompareCondition {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_operators() {
        assert_eq!(CompareOp::parse(">="), CompareOp::GtEq);
        assert_eq!(CompareOp::parse(" <> "), CompareOp::NotEq);
        assert_eq!(CompareOp::parse("!="), CompareOp::Other(String::from("!=")));
        assert_eq!(CompareOp::parse("@>").as_str(), "@>");
    }
}
