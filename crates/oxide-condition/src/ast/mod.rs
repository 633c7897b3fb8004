//! Condition AST.
//!
//! One node type per condition shape. Nodes are validated when they are
//! constructed (directly or from an array-definition), are immutable
//! afterwards and may be built any number of times.

mod between;
mod column;
mod compare;
mod conjunction;
mod exists;
mod expression;
mod hash;
mod in_list;
mod like;
mod node;
mod not;
mod operand;
mod select;

pub use between::{BetweenColumnsCondition, BetweenCondition};
pub use column::{Column, col, exists, hash, not_exists};
pub use compare::{CompareCondition, CompareOp};
pub use conjunction::{ConjunctionCondition, LogicalOp};
pub use exists::ExistsCondition;
pub use expression::Expression;
pub use hash::{HashCondition, HashValue};
pub use in_list::{InCondition, InValues, Row};
pub use like::{EscapeMap, LikeCondition};
pub use node::{AsAny, CustomCondition, DynEq, ExpressionNode, QueryExpression, SubQuery};
pub use not::NotCondition;
pub use operand::{ColumnRef, Operand};
pub use select::Select;

/// A condition node.
///
/// Built-in shapes are closed variants; embedding code plugs its own node
/// types in through [`Condition::Custom`] and a registered builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column <op> value`.
    Compare(CompareCondition),
    /// Conjunction of column equalities.
    Hash(HashCondition),
    /// `column [NOT] IN (...)`, composite and sub-query forms included.
    In(InCondition),
    /// `column [NOT] [I]LIKE pattern`, possibly several patterns.
    Like(LikeCondition),
    /// `column [NOT] BETWEEN start AND end`.
    Between(BetweenCondition),
    /// `value [NOT] BETWEEN start_column AND end_column`.
    BetweenColumns(BetweenColumnsCondition),
    /// `[NOT] EXISTS (sub-query)`.
    Exists(ExistsCondition),
    /// `NOT (inner)`.
    Not(NotCondition),
    /// `(a) AND (b) ...` / `(a) OR (b) ...`.
    Conjunction(ConjunctionCondition),
    /// Raw SQL, spliced verbatim.
    Expression(Expression),
    /// A sub-query used as a boolean expression.
    Query(SubQuery),
    /// A node type registered by the embedding application.
    Custom(CustomCondition),
}

impl Condition {
    /// Creates a raw SQL condition.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Expression(Expression::new(sql))
    }

    /// Creates a conjunction of all `conditions` joined by AND.
    #[must_use]
    pub fn all(conditions: impl IntoIterator<Item = Self>) -> Self {
        Self::Conjunction(ConjunctionCondition::new(LogicalOp::And, conditions))
    }

    /// Creates a conjunction of all `conditions` joined by OR.
    #[must_use]
    pub fn any(conditions: impl IntoIterator<Item = Self>) -> Self {
        Self::Conjunction(ConjunctionCondition::new(LogicalOp::Or, conditions))
    }

    /// Returns the node used to dispatch this condition to its builder.
    #[must_use]
    pub fn as_node(&self) -> &dyn ExpressionNode {
        match self {
            Self::Compare(c) => c,
            Self::Hash(c) => c,
            Self::In(c) => c,
            Self::Like(c) => c,
            Self::Between(c) => c,
            Self::BetweenColumns(c) => c,
            Self::Exists(c) => c,
            Self::Not(c) => c,
            Self::Conjunction(c) => c,
            Self::Expression(e) => e,
            Self::Query(q) => q.node(),
            Self::Custom(c) => c.node(),
        }
    }

    /// Combines this condition with another using AND.
    ///
    /// An existing AND conjunction on the left is extended rather than
    /// nested.
    #[must_use]
    pub fn and(self, other: impl Into<Self>) -> Self {
        self.combine(LogicalOp::And, other.into())
    }

    /// Combines this condition with another using OR.
    #[must_use]
    pub fn or(self, other: impl Into<Self>) -> Self {
        self.combine(LogicalOp::Or, other.into())
    }

    /// Negates this condition with NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(NotCondition::new(self))
    }

    fn combine(self, op: LogicalOp, other: Self) -> Self {
        match self {
            Self::Conjunction(mut conjunction) if conjunction.op == op => {
                conjunction.members.push(other);
                Self::Conjunction(conjunction)
            }
            left => Self::Conjunction(ConjunctionCondition::new(op, [left, other])),
        }
    }
}

macro_rules! impl_from_node {
    ($($node:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Condition {
                fn from(node: $node) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    CompareCondition => Compare,
    HashCondition => Hash,
    InCondition => In,
    LikeCondition => Like,
    BetweenCondition => Between,
    BetweenColumnsCondition => BetweenColumns,
    ExistsCondition => Exists,
    NotCondition => Not,
    ConjunctionCondition => Conjunction,
    Expression => Expression,
    SubQuery => Query,
    CustomCondition => Custom,
}

impl From<&str> for Condition {
    fn from(sql: &str) -> Self {
        Self::raw(sql)
    }
}
