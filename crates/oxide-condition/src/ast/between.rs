//! BETWEEN conditions.

use super::{ColumnRef, ExpressionNode, Operand};

/// `column [NOT] BETWEEN start AND end`.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenCondition {
    /// The tested column.
    pub column: ColumnRef,
    /// Whether this is NOT BETWEEN.
    pub negated: bool,
    /// Interval start.
    pub start: Operand,
    /// Interval end.
    pub end: Operand,
}

impl BetweenCondition {
    /// Creates a BETWEEN condition.
    #[must_use]
    pub fn new(
        column: impl Into<ColumnRef>,
        negated: bool,
        start: impl Into<Operand>,
        end: impl Into<Operand>,
    ) -> Self {
        Self {
            column: column.into(),
            negated,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns `BETWEEN` or `NOT BETWEEN`.
    #[must_use]
    pub const fn operator(&self) -> &'static str {
        between_operator(self.negated)
    }
}

impl ExpressionNode for BetweenCondition {}

/// `value [NOT] BETWEEN start_column AND end_column`.
///
/// The mirror of [`BetweenCondition`]: the value is bound and the interval
/// bounds are columns.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenColumnsCondition {
    /// The tested value.
    pub value: Operand,
    /// Whether this is NOT BETWEEN.
    pub negated: bool,
    /// Column holding the interval start.
    pub start_column: ColumnRef,
    /// Column holding the interval end.
    pub end_column: ColumnRef,
}

impl BetweenColumnsCondition {
    /// Creates a BETWEEN condition over two columns.
    #[must_use]
    pub fn new(
        value: impl Into<Operand>,
        negated: bool,
        start_column: impl Into<ColumnRef>,
        end_column: impl Into<ColumnRef>,
    ) -> Self {
        Self {
            value: value.into(),
            negated,
            start_column: start_column.into(),
            end_column: end_column.into(),
        }
    }

    /// Returns `BETWEEN` or `NOT BETWEEN`.
    #[must_use]
    pub const fn operator(&self) -> &'static str {
        between_operator(self.negated)
    }
}

impl ExpressionNode for BetweenColumnsCondition {}

const fn between_operator(negated: bool) -> &'static str {
    if negated {
        "NOT BETWEEN"
    } else {
        "BETWEEN"
    }
}
