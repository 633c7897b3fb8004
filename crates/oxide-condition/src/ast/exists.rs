//! EXISTS conditions.

use super::{ExpressionNode, SubQuery};

/// `[NOT] EXISTS (sub-query)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsCondition {
    /// Whether this is NOT EXISTS.
    pub negated: bool,
    /// The sub-query.
    pub query: SubQuery,
}

impl ExistsCondition {
    /// Creates an EXISTS condition.
    #[must_use]
    pub fn new(negated: bool, query: impl Into<SubQuery>) -> Self {
        Self {
            negated,
            query: query.into(),
        }
    }

    /// Returns `EXISTS` or `NOT EXISTS`.
    #[must_use]
    pub const fn operator(&self) -> &'static str {
        if self.negated {
            "NOT EXISTS"
        } else {
            "EXISTS"
        }
    }
}

impl ExpressionNode for ExistsCondition {}
