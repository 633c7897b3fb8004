//! AND / OR conjunctions.

use std::fmt;

use super::{Condition, ExpressionNode};

/// Logical connective of a conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(m1) OP (m2) OP ...`.
///
/// Members that build to an empty string are dropped; no members builds
/// to an empty string and a single member is returned unparenthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct ConjunctionCondition {
    /// The connective.
    pub op: LogicalOp,
    /// The joined conditions.
    pub members: Vec<Condition>,
}

impl ConjunctionCondition {
    /// Creates a conjunction.
    #[must_use]
    pub fn new(op: LogicalOp, members: impl IntoIterator<Item = Condition>) -> Self {
        Self {
            op,
            members: members.into_iter().collect(),
        }
    }
}

impl ExpressionNode for ConjunctionCondition {}
