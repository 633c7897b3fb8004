//! Hash (column => value map) conditions.

use super::{ExpressionNode, Operand, SubQuery};

/// The value side of one hash pair.
#[derive(Debug, Clone, PartialEq)]
pub enum HashValue {
    /// A single operand: NULL renders `IS NULL`, a sub-query renders `IN`.
    Operand(Operand),
    /// A list of values, rendered as an `IN` condition.
    List(Vec<Operand>),
}

/// A conjunction of `column = value` pairs, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashCondition {
    /// The column/value pairs.
    pub pairs: Vec<(String, HashValue)>,
}

impl HashCondition {
    /// Creates an empty hash condition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `column = value` (or `column IS NULL`).
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Into<Operand>) -> Self {
        self.pairs
            .push((String::from(column), HashValue::Operand(value.into())));
        self
    }

    /// Adds `column IN (values)`.
    #[must_use]
    pub fn is_in<T: Into<Operand>>(
        mut self,
        column: &str,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.pairs.push((String::from(column), HashValue::List(values)));
        self
    }

    /// Adds `column IN (sub-query)`.
    #[must_use]
    pub fn in_query(mut self, column: &str, query: impl Into<SubQuery>) -> Self {
        self.pairs.push((
            String::from(column),
            HashValue::Operand(Operand::Query(query.into())),
        ));
        self
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl ExpressionNode for HashCondition {}
